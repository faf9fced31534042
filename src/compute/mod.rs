/// Pure game-logic components.
///
/// Every function here works on plain entity data borrowed from the
/// `GameSession`; none of them touch rendering, input or the clock.
/// Randomness is always injected so callers control determinism.

pub mod collision;
pub mod effects;
pub mod formation;
pub mod player;

pub use collision::{resolve, CollisionReport};
pub use effects::{advance_all, spawn_explosion};
pub use formation::{advance_formation, spawn_grid, FormationOutcome};
pub use player::{advance_bullets, advance_player, fire, set_horizontal_intent};
