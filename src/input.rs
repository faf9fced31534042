/// Input collaborator contract.
///
/// The core only sees discrete events; how they are produced (terminal,
/// window system, test script) is the collaborator's business.

use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Space,
    Escape,
    R,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// A source of input events, drained once per tick.
pub trait InputSource {
    /// Every event that arrived since the previous call, oldest first.
    fn poll(&mut self) -> std::io::Result<Vec<InputEvent>>;
}

/// Replays a fixed list of per-tick event batches. After the script runs
/// out it keeps returning empty batches.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = Vec<InputEvent>>,
    {
        ScriptedInput {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> std::io::Result<Vec<InputEvent>> {
        Ok(self.frames.pop_front().unwrap_or_default())
    }
}
