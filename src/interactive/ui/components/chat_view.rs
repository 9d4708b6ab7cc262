use crate::directory::ChannelHandle;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Main chat pane. Message history itself is rendered from backend state by
/// the surrounding shell; this pane shows the active conversation header and
/// the pinned-messages overlay.
#[derive(Default)]
pub struct ChatView {
    active_channel: Option<ChannelHandle>,
    pinned_overlay_open: bool,
}

impl ChatView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active_channel(&mut self, channel: Option<ChannelHandle>) {
        self.active_channel = channel;
    }

    pub fn set_pinned_overlay_open(&mut self, open: bool) {
        self.pinned_overlay_open = open;
    }

    fn render_overlay(&self, f: &mut Frame, area: Rect) {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(60),
                Constraint::Percentage(20),
            ])
            .split(area);
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(15),
                Constraint::Percentage(70),
                Constraint::Percentage(15),
            ])
            .split(vertical[1]);
        let overlay_area = horizontal[1];

        let body = match &self.active_channel {
            Some(channel) => format!("No pinned messages in #{} yet", channel.display_name()),
            None => "No conversation selected".to_string(),
        };
        let overlay = Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Pinned messages").borders(Borders::ALL));

        f.render_widget(Clear, overlay_area);
        f.render_widget(overlay, overlay_area);
    }
}

impl Component for ChatView {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let header = match &self.active_channel {
            Some(channel) => Line::from(vec![
                Span::styled(
                    format!("# {}", channel.display_name()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "   Ctrl+P: pinned messages",
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            None => Line::from(Span::styled(
                "No conversation selected",
                Style::default().fg(Color::DarkGray),
            )),
        };
        f.render_widget(
            Paragraph::new(header).block(Block::default().borders(Borders::ALL)),
            chunks[0],
        );

        let hint = match &self.active_channel {
            Some(channel) => format!(
                "Messages in #{} stream in from the chat backend.",
                channel.display_name()
            ),
            None => "Type in the search box to find a channel or teammate, \
                     Ctrl+T to create a team channel, Ctrl+N to start a direct message."
                .to_string(),
        };
        f.render_widget(
            Paragraph::new(hint)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );

        if self.pinned_overlay_open {
            self.render_overlay(f, area);
        }
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
