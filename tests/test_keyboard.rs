use std::sync::mpsc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use space_invaders::input::{InputEvent, InputSource, Key};
use space_invaders::keyboard::{translate, TerminalInput, HOLD_WINDOW};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
}

#[test]
fn arrows_and_letters_map_to_directions() {
    assert_eq!(translate(&press(KeyCode::Left)), Some(InputEvent::KeyDown(Key::Left)));
    assert_eq!(translate(&press(KeyCode::Char('a'))), Some(InputEvent::KeyDown(Key::Left)));
    assert_eq!(translate(&press(KeyCode::Right)), Some(InputEvent::KeyDown(Key::Right)));
    assert_eq!(translate(&press(KeyCode::Char('D'))), Some(InputEvent::KeyDown(Key::Right)));
}

#[test]
fn action_keys_map() {
    assert_eq!(translate(&press(KeyCode::Char(' '))), Some(InputEvent::KeyDown(Key::Space)));
    assert_eq!(translate(&press(KeyCode::Esc)), Some(InputEvent::KeyDown(Key::Escape)));
    assert_eq!(translate(&press(KeyCode::Char('r'))), Some(InputEvent::KeyDown(Key::R)));
    assert_eq!(translate(&press(KeyCode::Char('x'))), None);
}

#[test]
fn ctrl_c_and_q_quit() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(translate(&ctrl_c), Some(InputEvent::Quit));
    assert_eq!(translate(&press(KeyCode::Char('q'))), Some(InputEvent::Quit));
}

#[test]
fn only_direction_releases_are_reported() {
    assert_eq!(
        translate(&with_kind(KeyCode::Left, KeyEventKind::Release)),
        Some(InputEvent::KeyUp(Key::Left))
    );
    assert_eq!(translate(&with_kind(KeyCode::Char(' '), KeyEventKind::Release)), None);
    assert_eq!(translate(&with_kind(KeyCode::Left, KeyEventKind::Repeat)), None);
}

#[test]
fn classic_terminal_releases_after_hold_window() {
    let (tx, rx) = mpsc::channel();
    let mut input = TerminalInput::new(rx, false);

    tx.send(Event::Key(press(KeyCode::Left))).unwrap();
    assert_eq!(input.poll().unwrap(), vec![InputEvent::KeyDown(Key::Left)]);

    for _ in 0..HOLD_WINDOW {
        assert!(input.poll().unwrap().is_empty());
    }
    assert_eq!(input.poll().unwrap(), vec![InputEvent::KeyUp(Key::Left)]);
    assert!(input.poll().unwrap().is_empty());
}

#[test]
fn repeats_keep_a_key_held() {
    let (tx, rx) = mpsc::channel();
    let mut input = TerminalInput::new(rx, false);

    tx.send(Event::Key(press(KeyCode::Right))).unwrap();
    input.poll().unwrap();
    for _ in 0..3 * HOLD_WINDOW {
        tx.send(Event::Key(with_kind(KeyCode::Right, KeyEventKind::Repeat))).unwrap();
        assert!(input.poll().unwrap().is_empty());
    }
}

#[test]
fn enhanced_terminal_reports_real_releases_only() {
    let (tx, rx) = mpsc::channel();
    let mut input = TerminalInput::new(rx, true);

    tx.send(Event::Key(press(KeyCode::Left))).unwrap();
    input.poll().unwrap();
    for _ in 0..2 * HOLD_WINDOW {
        assert!(input.poll().unwrap().is_empty());
    }
    tx.send(Event::Key(with_kind(KeyCode::Left, KeyEventKind::Release))).unwrap();
    assert_eq!(input.poll().unwrap(), vec![InputEvent::KeyUp(Key::Left)]);
}

#[test]
fn closed_channel_means_quit() {
    let (tx, rx) = mpsc::channel::<Event>();
    let mut input = TerminalInput::new(rx, true);
    drop(tx);
    assert_eq!(input.poll().unwrap(), vec![InputEvent::Quit]);
}
