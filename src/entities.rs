/// Game entities. Plain data; behaviour lives in `compute`.

use crate::constants::{ENEMY_DROP, ENEMY_HEIGHT, ENEMY_SPEED, ENEMY_WIDTH, MAX_HEALTH, PLAYER_START_X, PLAYER_Y};
use crate::palette::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    Menu,
    Playing,
    GameOver,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    /// Left edge of the ship.
    pub x: i32,
    /// Fixed for the whole session.
    pub y: i32,
    /// Horizontal velocity in pixels per tick.
    pub dx: i32,
    pub health: u32,
    pub max_health: u32,
}

impl Player {
    /// A fresh ship at centre-bottom with full shields.
    pub fn spawn() -> Self {
        Player {
            x: PLAYER_START_X,
            y: PLAYER_Y,
            dx: 0,
            health: MAX_HEALTH,
            max_health: MAX_HEALTH,
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    /// Vertical velocity added each tick (negative = upward).
    pub dy: i32,
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    /// Top-left corner.
    pub x: i32,
    pub y: i32,
}

impl Enemy {
    /// Point-in-box test against the enemy's open bounding box.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        self.x < px && px < self.x + ENEMY_WIDTH && self.y < py && py < self.y + ENEMY_HEIGHT
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + ENEMY_WIDTH / 2, self.y + ENEMY_HEIGHT / 2)
    }
}

/// Shared motion of the whole enemy grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Formation {
    /// +1 = moving right, -1 = moving left.
    pub direction: i32,
    pub speed: i32,
    pub drop: i32,
}

impl Default for Formation {
    fn default() -> Self {
        Formation {
            direction: 1,
            speed: ENEMY_SPEED,
            drop: ENEMY_DROP,
        }
    }
}

// ── Effects ───────────────────────────────────────────────────────────────────

/// Purely visual debris from an explosion.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Rgba,
    /// Ticks left before removal.
    pub life: i32,
}

/// A background star; cosmetic only.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    /// 1..=3; doubles as radius and drift speed.
    pub size: i32,
}
