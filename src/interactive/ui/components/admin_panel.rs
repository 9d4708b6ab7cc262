use crate::directory::ChannelHandle;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Which admin form is on screen. Derived from the active workspace each
/// frame; the input buffer resets when the form changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdminForm {
    CreateTeam,
    CreateMessaging,
    Edit(ChannelHandle),
}

impl AdminForm {
    fn title(&self) -> String {
        match self {
            AdminForm::CreateTeam => "Create a team channel".to_string(),
            AdminForm::CreateMessaging => "Start a direct conversation".to_string(),
            AdminForm::Edit(channel) => format!("Edit #{}", channel.display_name()),
        }
    }

    fn prefill(&self) -> String {
        match self {
            AdminForm::Edit(channel) => channel.display_name().to_string(),
            _ => String::new(),
        }
    }
}

/// Channel create/edit form: a single name input. Enter submits, Escape
/// closes the panel back to the chat view.
#[derive(Default)]
pub struct AdminPanel {
    form: Option<AdminForm>,
    input: String,
}

impl AdminPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_form(&mut self, form: AdminForm) {
        if self.form.as_ref() != Some(&form) {
            self.input = form.prefill();
            self.form = Some(form);
        }
    }

    #[cfg(test)]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Component for AdminPanel {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(form) = self.form.clone() else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(form.title()).block(Block::default().borders(Borders::ALL)),
            chunks[0],
        );

        let input_line = Line::from(vec![
            Span::raw(self.input.clone()),
            Span::styled(" ", Style::default().bg(Color::White)),
        ]);
        f.render_widget(
            Paragraph::new(input_line)
                .block(Block::default().title("Channel name").borders(Borders::ALL)),
            chunks[1],
        );

        f.render_widget(
            Paragraph::new("Enter: save | Esc: back to chat")
                .style(Style::default().fg(Color::DarkGray)),
            chunks[2],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        match key.code {
            KeyCode::Enter => Some(Message::AdminSubmitted(self.input.clone())),
            KeyCode::Esc => Some(Message::CloseAdminPanel),
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            _ => None,
        }
    }
}
