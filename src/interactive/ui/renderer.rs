use crate::interactive::constants::{SEARCH_BAR_HEIGHT, SIDEBAR_WIDTH};
use crate::interactive::domain::workspace::Workspace;
use crate::interactive::ui::app_state::AppState;
use crate::interactive::ui::components::{
    Component, admin_panel::AdminForm, admin_panel::AdminPanel, channel_list::ChannelList,
    chat_view::ChatView, results_dropdown::ResultsDropdown, search_bar::SearchBar,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
};

pub struct Renderer {
    search_bar: SearchBar,
    results_dropdown: ResultsDropdown,
    channel_list: ChannelList,
    chat_view: ChatView,
    admin_panel: AdminPanel,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            results_dropdown: ResultsDropdown::new(),
            channel_list: ChannelList::new(),
            chat_view: ChatView::new(),
            admin_panel: AdminPanel::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(f.area());

        self.render_sidebar(f, state, columns[0]);
        self.render_main(f, state, columns[1]);
    }

    fn render_sidebar(&mut self, f: &mut Frame, state: &AppState, area: ratatui::layout::Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.search_bar.set_query(state.search.query().to_string());
        self.search_bar.set_loading(state.search.is_loading());
        self.search_bar.render(f, rows[0]);

        // While the dropdown is open it takes the sidebar body over from the
        // channel list.
        if state.search.dropdown_open() {
            self.results_dropdown
                .set_results(state.search.results().to_vec());
            self.results_dropdown.set_focused(state.search.focused());
            self.results_dropdown.set_loading(state.search.is_loading());
            self.results_dropdown.render(f, rows[1]);
        } else {
            self.channel_list.set_channels(state.channels.clone());
            self.channel_list
                .set_active_id(state.active_channel.as_ref().map(|c| c.id.clone()));
            self.channel_list.render(f, rows[1]);
        }

        if let Some(status) = &state.status {
            f.render_widget(
                Paragraph::new(status.as_str()).style(Style::default().fg(Color::Yellow)),
                rows[2],
            );
        }
    }

    fn render_main(&mut self, f: &mut Frame, state: &AppState, area: ratatui::layout::Rect) {
        match state.workspace.active() {
            Workspace::Chat => {
                self.chat_view
                    .set_active_channel(state.active_channel.clone());
                self.chat_view
                    .set_pinned_overlay_open(state.workspace.pinned_overlay_open());
                self.chat_view.render(f, area);
            }
            Workspace::AdminChannelEdit(channel) => {
                self.admin_panel.set_form(AdminForm::Edit(channel.clone()));
                self.admin_panel.render(f, area);
            }
            Workspace::AdminChannelCreateTeam => {
                self.admin_panel.set_form(AdminForm::CreateTeam);
                self.admin_panel.render(f, area);
            }
            Workspace::AdminChannelCreateMessaging => {
                self.admin_panel.set_form(AdminForm::CreateMessaging);
                self.admin_panel.render(f, area);
            }
        }
    }

    pub fn search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn admin_panel_mut(&mut self) -> &mut AdminPanel {
        &mut self.admin_panel
    }
}
