/// Terminal keyboard → `InputEvent` translation.
///
/// A dedicated thread does the blocking `event::read()` calls and forwards
/// everything through a channel, so the frame loop only ever drains.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): real `Release`
///   events become `KeyUp`.
/// * **Classic terminals**: only `Press` events arrive (OS key-repeat shows
///   up as repeated presses). A held direction key is considered released
///   once no press has been seen for `HOLD_WINDOW` ticks.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, warn};

use crate::input::{InputEvent, InputSource, Key};

/// Ticks of silence after which a direction key counts as released.
/// At 60 Hz this is 500 ms, long enough to bridge the OS delay before
/// key-repeat kicks in.
pub const HOLD_WINDOW: u64 = 30;

/// Map a terminal key event onto the game's event vocabulary.
pub fn translate(key: &KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return Some(InputEvent::Quit);
    }

    if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Some(InputEvent::Quit);
    }

    let mapped = map_code(key.code)?;

    match key.kind {
        KeyEventKind::Press => Some(InputEvent::KeyDown(mapped)),
        KeyEventKind::Release if is_directional(mapped) => Some(InputEvent::KeyUp(mapped)),
        KeyEventKind::Release | KeyEventKind::Repeat => None,
    }
}

fn map_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::R),
        _ => None,
    }
}

fn is_directional(key: Key) -> bool {
    matches!(key, Key::Left | Key::Right)
}

pub struct TerminalInput {
    rx: Receiver<Event>,
    /// True when the terminal reports key releases itself.
    release_events: bool,
    /// Direction key → tick it was last pressed or repeated.
    held: HashMap<Key, u64>,
    tick: u64,
}

impl TerminalInput {
    /// Build from an existing channel of terminal events.
    pub fn new(rx: Receiver<Event>, release_events: bool) -> Self {
        TerminalInput {
            rx,
            release_events,
            held: HashMap::new(),
            tick: 0,
        }
    }

    /// Spawn the reader thread and return an input source fed by it.
    pub fn spawn(release_events: bool) -> Self {
        let (tx, rx) = mpsc::channel::<Event>();
        thread::spawn(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(e) => {
                    warn!("terminal event read failed: {e}");
                    break;
                }
            }
        });
        Self::new(rx, release_events)
    }

    fn track(&mut self, key: &KeyEvent, out: &mut Vec<InputEvent>) {
        if let Some(k) = map_code(key.code).filter(|k| is_directional(*k)) {
            match key.kind {
                // Repeats keep a held key alive without re-sending it.
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    self.held.insert(k, self.tick);
                }
                KeyEventKind::Release => {
                    self.held.remove(&k);
                }
            }
        }

        if let Some(ev) = translate(key) {
            out.push(ev);
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> std::io::Result<Vec<InputEvent>> {
        self.tick += 1;
        let mut events = Vec::new();

        loop {
            match self.rx.try_recv() {
                Ok(Event::Key(key)) => self.track(&key, &mut events),
                Ok(_) => {}
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("input channel closed");
                    events.push(InputEvent::Quit);
                    break;
                }
            }
        }

        if !self.release_events {
            let tick = self.tick;
            let mut expired: Vec<Key> = self
                .held
                .iter()
                .filter(|&(_, &last)| tick.saturating_sub(last) > HOLD_WINDOW)
                .map(|(&k, _)| k)
                .collect();
            expired.sort_by_key(|k| *k == Key::Right);
            for key in expired {
                self.held.remove(&key);
                events.push(InputEvent::KeyUp(key));
            }
        }

        Ok(events)
    }
}
