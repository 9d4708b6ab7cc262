use crate::interactive::domain::models::SearchItem;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Merged search results: a Channels section followed by a Users section.
/// The focused entry is highlighted; key handling lives with the
/// coordinator, not here.
#[derive(Default)]
pub struct ResultsDropdown {
    results: Vec<SearchItem>,
    focused: Option<usize>,
    loading: bool,
}

impl ResultsDropdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_results(&mut self, results: Vec<SearchItem>) {
        self.results = results;
    }

    pub fn set_focused(&mut self, focused: Option<usize>) {
        self.focused = focused;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn entry_line(&self, index: usize, item: &SearchItem) -> Line<'static> {
        let label = match item {
            SearchItem::Channel(c) => format!("# {}", c.display_name()),
            SearchItem::User(u) => format!("@ {}", u.display_name()),
        };
        let style = if self.focused == Some(index) {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(Span::styled(format!("  {label}"), style))
    }

    fn section_lines(&self) -> Vec<Line<'static>> {
        let header = |text: &str| {
            Line::from(Span::styled(
                text.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
        };
        let empty_note = |text: &str| {
            Line::from(Span::styled(
                format!("  {text}"),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let mut lines = vec![header("Channels")];
        let channel_count = self
            .results
            .iter()
            .take_while(|item| matches!(item, SearchItem::Channel(_)))
            .count();
        if channel_count == 0 {
            lines.push(empty_note(if self.loading {
                "loading..."
            } else {
                "no channels found"
            }));
        }
        for (index, item) in self.results.iter().take(channel_count).enumerate() {
            lines.push(self.entry_line(index, item));
        }

        lines.push(header("Users"));
        if channel_count == self.results.len() {
            lines.push(empty_note(if self.loading {
                "loading..."
            } else {
                "no users found"
            }));
        }
        for (offset, item) in self.results.iter().skip(channel_count).enumerate() {
            lines.push(self.entry_line(channel_count + offset, item));
        }

        lines
    }
}

impl Component for ResultsDropdown {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let body = Paragraph::new(self.section_lines())
            .block(Block::default().title("Results").borders(Borders::ALL));
        f.render_widget(body, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
