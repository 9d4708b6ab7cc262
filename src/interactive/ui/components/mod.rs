pub mod admin_panel;
pub mod channel_list;
pub mod chat_view;
pub mod results_dropdown;
pub mod search_bar;

#[cfg(test)]
mod search_bar_test;

use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}
