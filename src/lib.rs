//! Fixed-formation space shooter: simulation core plus a terminal front end.
//!
//! The core (`entities`, `compute`, `session`, `scene`, `frame_loop`) only
//! talks to the outside world through the `Canvas` and `InputSource`
//! traits. `display` and `keyboard` implement those for crossterm.

pub mod assets;
pub mod canvas;
pub mod compute;
pub mod constants;
pub mod display;
pub mod entities;
pub mod error;
pub mod frame_loop;
pub mod input;
pub mod keyboard;
pub mod palette;
pub mod scene;
pub mod session;
