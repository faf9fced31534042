/// Game session context and the MENU → PLAYING → GAME_OVER state machine.
///
/// Everything that changes during play lives in `GameSession`, which the
/// frame loop owns and lends to each component for the duration of a tick.

use rand::Rng;
use tracing::{debug, info};

use crate::compute::{
    advance_all, advance_bullets, advance_formation, advance_player, fire, resolve,
    set_horizontal_intent, spawn_explosion, spawn_grid, FormationOutcome,
};
use crate::constants::WAVE_BONUS;
use crate::entities::{Bullet, Enemy, Formation, GameState, Particle, Player};
use crate::input::{InputEvent, Key};

/// What the frame loop should do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Notable things that happened during one `update`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub hits: usize,
    pub formation: Option<FormationOutcome>,
    pub wave_cleared: bool,
    pub game_over: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    pub state: GameState,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub formation: Formation,
    pub particles: Vec<Particle>,
    pub score: u32,
    /// Waves cleared since the last new game.
    pub waves_cleared: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A session sitting on the title menu with a ready-made field behind it.
    pub fn new() -> Self {
        GameSession {
            state: GameState::Menu,
            player: Player::spawn(),
            bullets: Vec::new(),
            enemies: spawn_grid(),
            formation: Formation::default(),
            particles: Vec::new(),
            score: 0,
            waves_cleared: 0,
        }
    }

    /// Start a new game: fresh field, zero score, state = PLAYING.
    pub fn reset(&mut self) {
        self.respawn_field();
        self.score = 0;
        self.waves_cleared = 0;
        self.transition(GameState::Playing);
    }

    /// Rebuild the ship, grid and effects without touching the score.
    fn respawn_field(&mut self) {
        self.player = Player::spawn();
        self.bullets.clear();
        self.particles.clear();
        self.enemies = spawn_grid();
        self.formation = Formation::default();
    }

    fn transition(&mut self, to: GameState) {
        if self.state != to {
            info!(from = ?self.state, to = ?to, score = self.score, "state transition");
        }
        self.state = to;
    }

    // ── Input ────────────────────────────────────────────────────────────────

    /// Route one input event according to the current state.
    pub fn handle_event(&mut self, event: InputEvent) -> Control {
        if event == InputEvent::Quit {
            info!(state = ?self.state, "quit requested");
            return Control::Quit;
        }

        match self.state {
            GameState::Menu => match event {
                InputEvent::KeyDown(Key::Space) => self.reset(),
                InputEvent::KeyDown(Key::Escape) => return Control::Quit,
                _ => {}
            },
            GameState::Playing => match event {
                InputEvent::KeyDown(Key::Left) => set_horizontal_intent(&mut self.player, -1),
                InputEvent::KeyDown(Key::Right) => set_horizontal_intent(&mut self.player, 1),
                InputEvent::KeyDown(Key::Space) => fire(&self.player, &mut self.bullets),
                InputEvent::KeyDown(Key::Escape) => self.transition(GameState::Menu),
                // Releasing a key only cancels the direction it was driving.
                InputEvent::KeyUp(Key::Left) if self.player.dx < 0 => {
                    set_horizontal_intent(&mut self.player, 0)
                }
                InputEvent::KeyUp(Key::Right) if self.player.dx > 0 => {
                    set_horizontal_intent(&mut self.player, 0)
                }
                _ => {}
            },
            GameState::GameOver => match event {
                InputEvent::KeyDown(Key::R) => self.reset(),
                InputEvent::KeyDown(Key::Escape) => return Control::Quit,
                _ => {}
            },
        }
        Control::Continue
    }

    // ── Per-tick update ──────────────────────────────────────────────────────

    /// Advance the simulation by one tick. Outside PLAYING this does nothing.
    pub fn update(&mut self, rng: &mut impl Rng) -> TickReport {
        let mut report = TickReport::default();
        if self.state != GameState::Playing {
            return report;
        }

        advance_player(&mut self.player);
        advance_bullets(&mut self.bullets);
        report.formation = Some(advance_formation(
            &mut self.enemies,
            &mut self.formation,
            &mut self.player,
        ));

        let collisions = resolve(&mut self.bullets, &mut self.enemies, self.score);
        self.score = collisions.score;
        report.hits = collisions.hits();
        for &(x, y) in &collisions.explosions {
            spawn_explosion(&mut self.particles, x, y, rng);
        }

        advance_all(&mut self.particles);

        if self.enemies.is_empty() {
            self.score += WAVE_BONUS;
            self.waves_cleared += 1;
            info!(wave = self.waves_cleared, score = self.score, "wave cleared");
            self.respawn_field();
            report.wave_cleared = true;
        }

        if self.player.health == 0 {
            debug!(score = self.score, "shields depleted");
            self.transition(GameState::GameOver);
            report.game_over = true;
        }

        report
    }
}
