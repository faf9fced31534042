/// Scene composition: turns a `GameSession` into draw commands.
///
/// No game logic lives here. Each function reads state and issues shape,
/// text and sprite commands to whatever `Canvas` it is handed.

use rand::Rng;

use crate::canvas::{Canvas, FontRole, Rect, SpriteId};
use crate::constants::{
    ENEMY_HEIGHT, ENEMY_WIDTH, HEIGHT, HUD_HEIGHT, PARTICLE_RADIUS, PLAYER_HEIGHT, PLAYER_WIDTH,
    STAR_COUNT, WIDTH,
};
use crate::entities::{GameState, Star};
use crate::palette::{
    Rgba, BLACK, CYAN, DARK_BLUE, GOLD, NEON_BLUE, NEON_GREEN, NEON_PINK, RED, SHIELD_DEPLETED,
    SHIELD_FILL, SPACE_BLUE, WHITE,
};
use crate::session::GameSession;

pub const START_PROMPT: &str = "PRESS SPACE TO START";
pub const CONTROLS_HINT: &str = "CONTROLS: ← → ARROWS TO MOVE, SPACE TO SHOOT";
pub const RESTART_HINT: &str = "PRESS R TO RESTART OR ESC TO QUIT";

// ── Starfield ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    pub fn new(rng: &mut impl Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.gen_range(0..=WIDTH) as f32,
                y: rng.gen_range(0..=HEIGHT) as f32,
                size: rng.gen_range(1..=3),
            })
            .collect();
        Starfield { stars }
    }

    /// Drift every star downward; stars falling off the bottom wrap to the
    /// top at a new column.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.y += star.size as f32 * 0.5;
            if star.y > HEIGHT as f32 {
                star.y = 0.0;
                star.x = rng.gen_range(0..=WIDTH) as f32;
            }
        }
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        for star in &self.stars {
            canvas.circle((star.x as i32, star.y as i32), star.size, WHITE, 0);
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Draw one complete frame for the session's current state and present it.
///
/// `elapsed_ms` drives purely cosmetic animation (the pulsing prompt).
pub fn render<C: Canvas>(
    canvas: &mut C,
    session: &GameSession,
    stars: &Starfield,
    elapsed_ms: u64,
) -> std::io::Result<()> {
    match session.state {
        GameState::Menu => draw_menu(canvas, stars, elapsed_ms),
        GameState::Playing => draw_playing(canvas, session, stars),
        GameState::GameOver => draw_game_over(canvas, session.score),
    }
    canvas.present()
}

// ── Text effects ──────────────────────────────────────────────────────────────

/// Text with a drop shadow `offset` pixels down and right.
pub fn draw_text_with_shadow<C: Canvas>(
    canvas: &mut C,
    text: &str,
    font: FontRole,
    color: Rgba,
    shadow: Rgba,
    pos: (i32, i32),
    offset: i32,
) {
    canvas.text(text, font, shadow, (pos.0 + offset, pos.1 + offset));
    canvas.text(text, font, color, pos);
}

/// Shadowed text centred on `center`.
fn draw_centered_with_shadow<C: Canvas>(
    canvas: &mut C,
    text: &str,
    font: FontRole,
    color: Rgba,
    shadow: Rgba,
    center: (i32, i32),
    offset: i32,
) {
    let (w, h) = canvas.text_size(text, font);
    draw_text_with_shadow(
        canvas,
        text,
        font,
        color,
        shadow,
        (center.0 - w / 2, center.1 - h / 2),
        offset,
    );
}

/// Text centred on `center` with concentric glow layers behind it, the
/// outermost layer faintest.
pub fn draw_text_with_glow<C: Canvas>(
    canvas: &mut C,
    text: &str,
    font: FontRole,
    color: Rgba,
    glow: Rgba,
    center: (i32, i32),
    radius: i32,
) {
    let (w, h) = canvas.text_size(text, font);
    let origin = (center.0 - w / 2, center.1 - h / 2);

    for i in (1..=radius).rev() {
        let alpha = (150 - i * 30).max(30) as u8;
        let layer = glow.with_alpha(alpha);
        for dx in -i..=i {
            for dy in -i..=i {
                if dx * dx + dy * dy <= i * i {
                    canvas.text(text, font, layer, (origin.0 + dx, origin.1 + dy));
                }
            }
        }
    }
    canvas.text(text, font, color, origin);
}

// ── Backgrounds ───────────────────────────────────────────────────────────────

fn draw_gradient_background<C: Canvas>(canvas: &mut C) {
    for y in 0..HEIGHT {
        let color = SPACE_BLUE.lerp(BLACK, y as f32 / HEIGHT as f32);
        canvas.fill_rect(Rect::new(0, y, WIDTH, 1), color);
    }
}

// ── Screens ───────────────────────────────────────────────────────────────────

pub fn draw_menu<C: Canvas>(canvas: &mut C, stars: &Starfield, elapsed_ms: u64) {
    draw_gradient_background(canvas);
    stars.draw(canvas);

    draw_text_with_glow(
        canvas,
        "SPACE INVADERS",
        FontRole::Title,
        CYAN,
        NEON_BLUE,
        (WIDTH / 2, HEIGHT / 3),
        4,
    );

    let start_color = NEON_GREEN.scaled(pulse(elapsed_ms));
    draw_centered_with_shadow(
        canvas,
        START_PROMPT,
        FontRole::Score,
        start_color,
        BLACK,
        (WIDTH / 2, HEIGHT / 2),
        3,
    );
    draw_centered_with_shadow(
        canvas,
        CONTROLS_HINT,
        FontRole::Ui,
        WHITE,
        DARK_BLUE,
        (WIDTH / 2, HEIGHT / 2 + 60),
        1,
    );
}

/// Brightness factor in `0.7..=1.0` for the pulsing start prompt.
pub fn pulse(elapsed_ms: u64) -> f32 {
    (elapsed_ms as f32 * 0.003).sin().abs() * 0.3 + 0.7
}

pub fn draw_playing<C: Canvas>(canvas: &mut C, session: &GameSession, stars: &Starfield) {
    draw_gradient_background(canvas);
    stars.draw(canvas);

    let p = &session.player;
    canvas.stroke_rect(
        Rect::new(p.x - 2, p.y - 2, PLAYER_WIDTH + 4, PLAYER_HEIGHT + 4),
        NEON_BLUE,
        2,
    );
    canvas.sprite(SpriteId::Player, (p.x, p.y));

    for b in &session.bullets {
        let c = (b.x + 2, b.y + 8);
        canvas.circle(c, 4, CYAN, 0);
        canvas.circle(c, 2, WHITE, 0);
        canvas.circle(c, 6, NEON_BLUE, 1);
    }

    for e in &session.enemies {
        canvas.stroke_rect(
            Rect::new(e.x - 2, e.y - 2, ENEMY_WIDTH + 4, ENEMY_HEIGHT + 4),
            NEON_GREEN,
            2,
        );
        canvas.sprite(SpriteId::Enemy, (e.x, e.y));
    }

    for particle in &session.particles {
        canvas.circle(
            (particle.x as i32, particle.y as i32),
            PARTICLE_RADIUS,
            particle.color,
            0,
        );
    }

    draw_hud(canvas, session.score, p.health, p.max_health);
}

/// Gradient band with score on the left and shield pips on the right.
pub fn draw_hud<C: Canvas>(canvas: &mut C, score: u32, health: u32, max_health: u32) {
    for y in 0..HUD_HEIGHT {
        let color = DARK_BLUE.lerp(SPACE_BLUE, y as f32 / HUD_HEIGHT as f32);
        canvas.fill_rect(Rect::new(0, y, WIDTH, 1), color);
    }
    canvas.line((0, HUD_HEIGHT - 2), (WIDTH, HUD_HEIGHT - 2), CYAN, 3);
    canvas.line((0, HUD_HEIGHT), (WIDTH, HUD_HEIGHT), NEON_BLUE, 1);

    draw_text_with_shadow(
        canvas,
        &format!("SCORE: {:06}", score),
        FontRole::Score,
        GOLD,
        BLACK,
        (25, 18),
        2,
    );
    draw_text_with_shadow(
        canvas,
        "SHIELDS:",
        FontRole::Ui,
        CYAN,
        BLACK,
        (WIDTH - 200, 20),
        2,
    );

    for i in 0..max_health {
        let x = WIDTH - 120 + i as i32 * 32;
        let y = 22;
        if i < health {
            canvas.fill_rect(Rect::new(x - 1, y - 1, 27, 17), NEON_GREEN);
            canvas.fill_rect(Rect::new(x + 1, y + 1, 23, 13), SHIELD_FILL);
            canvas.stroke_rect(Rect::new(x, y, 25, 15), CYAN, 2);
        } else {
            canvas.fill_rect(Rect::new(x, y, 25, 15), SHIELD_DEPLETED);
            canvas.stroke_rect(Rect::new(x, y, 25, 15), RED, 2);
        }
    }
}

/// Darkening overlay on top of whatever was last shown, then the summary.
pub fn draw_game_over<C: Canvas>(canvas: &mut C, score: u32) {
    canvas.fill_rect(Rect::new(0, 0, WIDTH, HEIGHT), BLACK.with_alpha(200));

    draw_text_with_glow(
        canvas,
        "GAME OVER",
        FontRole::Title,
        RED,
        NEON_PINK,
        (WIDTH / 2, HEIGHT / 3),
        5,
    );
    draw_centered_with_shadow(
        canvas,
        &format!("FINAL SCORE: {:06}", score),
        FontRole::Score,
        GOLD,
        BLACK,
        (WIDTH / 2, HEIGHT / 2),
        3,
    );
    draw_centered_with_shadow(
        canvas,
        RESTART_HINT,
        FontRole::Ui,
        CYAN,
        DARK_BLUE,
        (WIDTH / 2, HEIGHT / 2 + 70),
        2,
    );
}
