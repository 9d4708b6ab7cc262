use super::Component;
use super::search_bar::SearchBar;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(bar: &mut SearchBar, text: &str) -> Option<Message> {
    let mut last = None;
    for c in text.chars() {
        last = bar.handle_key(key(KeyCode::Char(c)));
    }
    last
}

#[test]
fn typing_emits_the_full_query() {
    let mut bar = SearchBar::new();
    let msg = type_text(&mut bar, "mar");
    match msg {
        Some(Message::QueryChanged(q)) => assert_eq!(q, "mar"),
        other => panic!("unexpected message {other:?}"),
    }
}

#[test]
fn backspace_removes_the_character_before_the_cursor() {
    let mut bar = SearchBar::new();
    type_text(&mut bar, "mar");
    let msg = bar.handle_key(key(KeyCode::Backspace));
    match msg {
        Some(Message::QueryChanged(q)) => assert_eq!(q, "ma"),
        other => panic!("unexpected message {other:?}"),
    }
}

#[test]
fn backspace_on_empty_input_emits_nothing() {
    let mut bar = SearchBar::new();
    assert!(bar.handle_key(key(KeyCode::Backspace)).is_none());
}

#[test]
fn insertion_respects_cursor_position() {
    let mut bar = SearchBar::new();
    type_text(&mut bar, "mr");
    bar.handle_key(key(KeyCode::Left));
    let msg = bar.handle_key(key(KeyCode::Char('a')));
    match msg {
        Some(Message::QueryChanged(q)) => assert_eq!(q, "mar"),
        other => panic!("unexpected message {other:?}"),
    }
}

#[test]
fn ctrl_u_clears_to_the_start() {
    let mut bar = SearchBar::new();
    type_text(&mut bar, "marketing");
    let msg = bar.handle_key(ctrl('u'));
    match msg {
        Some(Message::QueryChanged(q)) => assert_eq!(q, ""),
        other => panic!("unexpected message {other:?}"),
    }
}

#[test]
fn ctrl_w_deletes_the_previous_word() {
    let mut bar = SearchBar::new();
    type_text(&mut bar, "team chat");
    let msg = bar.handle_key(ctrl('w'));
    match msg {
        Some(Message::QueryChanged(q)) => assert_eq!(q, "team "),
        other => panic!("unexpected message {other:?}"),
    }
}

#[test]
fn multibyte_input_round_trips() {
    let mut bar = SearchBar::new();
    type_text(&mut bar, "日本");
    let msg = bar.handle_key(key(KeyCode::Backspace));
    match msg {
        Some(Message::QueryChanged(q)) => assert_eq!(q, "日"),
        other => panic!("unexpected message {other:?}"),
    }
}

#[test]
fn set_query_moves_the_cursor_to_the_end() {
    let mut bar = SearchBar::new();
    bar.set_query("general".to_string());
    let msg = bar.handle_key(key(KeyCode::Char('!')));
    match msg {
        Some(Message::QueryChanged(q)) => assert_eq!(q, "general!"),
        other => panic!("unexpected message {other:?}"),
    }
}
