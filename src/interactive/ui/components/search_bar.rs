use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Single-line search input. Every edit emits `QueryChanged` with the full
/// text; cursor movement alone emits nothing.
#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor: usize,
    loading: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: String) {
        if query != self.query {
            self.query = query;
            self.cursor = self.query.chars().count();
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.query
            .chars()
            .take(char_pos)
            .map(char::len_utf8)
            .sum()
    }

    fn delete_char_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_index(self.cursor - 1);
        let end = self.byte_index(self.cursor);
        self.query.drain(start..end);
        self.cursor -= 1;
        true
    }

    fn prev_word_boundary(&self) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = self.cursor;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let cursor_byte = self.byte_index(self.cursor);
        let (before, after) = self.query.split_at(cursor_byte);
        let under_cursor = after.chars().next().unwrap_or(' ').to_string();
        let rest: String = after.chars().skip(1).collect();

        let line = Line::from(vec![
            Span::raw(before.to_string()),
            Span::styled(under_cursor, Style::default().bg(Color::White).fg(Color::Black)),
            Span::raw(rest),
        ]);

        let title = if self.loading { "Search [...]" } else { "Search" };
        let input = Paragraph::new(line)
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = self.query.chars().count();
                    None
                }
                KeyCode::Char('u') => {
                    if self.cursor > 0 {
                        let end = self.byte_index(self.cursor);
                        self.query.drain(..end);
                        self.cursor = 0;
                        Some(Message::QueryChanged(self.query.clone()))
                    } else {
                        None
                    }
                }
                KeyCode::Char('w') => {
                    let boundary = self.prev_word_boundary();
                    if boundary < self.cursor {
                        let start = self.byte_index(boundary);
                        let end = self.byte_index(self.cursor);
                        self.query.drain(start..end);
                        self.cursor = boundary;
                        Some(Message::QueryChanged(self.query.clone()))
                    } else {
                        None
                    }
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let at = self.byte_index(self.cursor);
                self.query.insert(at, c);
                self.cursor += 1;
                Some(Message::QueryChanged(self.query.clone()))
            }
            KeyCode::Backspace => {
                if self.delete_char_before_cursor() {
                    Some(Message::QueryChanged(self.query.clone()))
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.query.chars().count() {
                    self.cursor += 1;
                    self.delete_char_before_cursor();
                    Some(Message::QueryChanged(self.query.clone()))
                } else {
                    None
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor < self.query.chars().count() {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.query.chars().count();
                None
            }
            _ => None,
        }
    }
}
