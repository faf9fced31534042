/// Playfield and gameplay constants.
///
/// All geometry is in playfield pixels; the rendering collaborator decides
/// how pixels map onto its own surface.

// ── Playfield ────────────────────────────────────────────────────────────────

pub const WIDTH: i32 = 800;
pub const HEIGHT: i32 = 700;
pub const WINDOW_TITLE: &str = "🚀 Space Invaders - Enhanced Edition";

/// Target simulation rate.
pub const TICKS_PER_SECOND: u32 = 60;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: i32 = 50;
pub const PLAYER_HEIGHT: i32 = 40;
pub const PLAYER_SPEED: i32 = 7;
pub const PLAYER_START_X: i32 = WIDTH / 2;
pub const PLAYER_Y: i32 = HEIGHT - 80;
pub const MAX_HEALTH: u32 = 3;

// ── Bullets ──────────────────────────────────────────────────────────────────

/// Negative: bullets travel toward the top of the playfield.
pub const BULLET_SPEED: i32 = -8;
/// Horizontal spawn offset from the player's left edge (nose of the ship).
pub const BULLET_OFFSET_X: i32 = 25;

// ── Formation ────────────────────────────────────────────────────────────────

pub const ENEMY_WIDTH: i32 = 40;
pub const ENEMY_HEIGHT: i32 = 40;
pub const ENEMY_ROWS: usize = 4;
pub const ENEMY_COLS: usize = 8;
pub const GRID_ORIGIN_X: i32 = 80;
pub const GRID_ORIGIN_Y: i32 = 80;
pub const GRID_SPACING_X: i32 = 80;
pub const GRID_SPACING_Y: i32 = 60;
pub const ENEMY_SPEED: i32 = 1;
pub const ENEMY_DROP: i32 = 30;
/// Any enemy at or below this row ends the game.
pub const LOSS_THRESHOLD: i32 = HEIGHT - 120;

// ── Scoring ──────────────────────────────────────────────────────────────────

pub const ENEMY_REWARD: u32 = 10;
pub const WAVE_BONUS: u32 = 100;

// ── Effects ──────────────────────────────────────────────────────────────────

pub const EXPLOSION_PARTICLES: usize = 10;
pub const PARTICLE_LIFETIME: i32 = 30;
/// Particle velocity components are drawn from `-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED`.
pub const PARTICLE_MAX_SPEED: f32 = 3.0;
pub const PARTICLE_RADIUS: i32 = 2;

pub const STAR_COUNT: usize = 100;

// ── HUD ──────────────────────────────────────────────────────────────────────

pub const HUD_HEIGHT: i32 = 60;
