use crate::directory::ChannelHandle;
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

/// Sidebar list of the member's channels, with the active one highlighted.
#[derive(Default)]
pub struct ChannelList {
    channels: Vec<ChannelHandle>,
    active_id: Option<String>,
}

impl ChannelList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_channels(&mut self, channels: Vec<ChannelHandle>) {
        self.channels = channels;
    }

    pub fn set_active_id(&mut self, active_id: Option<String>) {
        self.active_id = active_id;
    }
}

impl Component for ChannelList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = if self.channels.is_empty() {
            vec![Line::from(Span::styled(
                "  no channels yet",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.channels
                .iter()
                .map(|channel| {
                    let style = if self.active_id.as_deref() == Some(channel.id.as_str()) {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    Line::from(Span::styled(
                        format!("  # {}", channel.display_name()),
                        style,
                    ))
                })
                .collect()
        };

        let list = Paragraph::new(lines)
            .block(Block::default().title("Channels").borders(Borders::ALL));
        f.render_widget(list, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
