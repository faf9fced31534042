/// Fixed-rate frame loop: input → update → render → wait, once per tick.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::info;

use crate::canvas::Canvas;
use crate::constants::TICKS_PER_SECOND;
use crate::entities::GameState;
use crate::input::InputSource;
use crate::scene::{self, Starfield};
use crate::session::{Control, GameSession};

/// Tick pacing.
pub trait Clock {
    /// Ticks completed so far.
    fn ticks(&self) -> u64;

    /// Block until the current tick's budget is spent, then start the next.
    fn wait_for_next_tick(&mut self);

    /// Cosmetic wall time derived from the tick count.
    fn elapsed_ms(&self) -> u64 {
        self.ticks() * 1000 / TICKS_PER_SECOND as u64
    }
}

/// Sleeps away whatever is left of each tick's budget.
pub struct FixedRateClock {
    frame: Duration,
    frame_start: Instant,
    ticks: u64,
}

impl FixedRateClock {
    pub fn new(ticks_per_second: u32) -> Self {
        FixedRateClock {
            frame: Duration::from_secs(1) / ticks_per_second.max(1),
            frame_start: Instant::now(),
            ticks: 0,
        }
    }
}

impl Default for FixedRateClock {
    fn default() -> Self {
        Self::new(TICKS_PER_SECOND)
    }
}

impl Clock for FixedRateClock {
    fn ticks(&self) -> u64 {
        self.ticks
    }

    fn wait_for_next_tick(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
        self.frame_start = Instant::now();
        self.ticks += 1;
    }
}

/// Never sleeps; each wait just counts a tick.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    pub ticks: u64,
}

impl Clock for ManualClock {
    fn ticks(&self) -> u64 {
        self.ticks
    }

    fn wait_for_next_tick(&mut self) {
        self.ticks += 1;
    }
}

/// Run exactly one tick. Returns `Control::Quit` as soon as a quit action is
/// seen; the rest of that tick is skipped.
pub fn run_frame<I, C, R>(
    session: &mut GameSession,
    stars: &mut Starfield,
    input: &mut I,
    canvas: &mut C,
    rng: &mut R,
    elapsed_ms: u64,
) -> std::io::Result<Control>
where
    I: InputSource,
    C: Canvas,
    R: Rng,
{
    for event in input.poll()? {
        if session.handle_event(event) == Control::Quit {
            return Ok(Control::Quit);
        }
    }

    session.update(rng);

    if session.state != GameState::GameOver {
        stars.advance(rng);
    }

    scene::render(canvas, session, stars, elapsed_ms)?;
    Ok(Control::Continue)
}

/// Drive the session until a quit action arrives. Returns the number of
/// completed ticks.
pub fn run<I, C, K, R>(
    session: &mut GameSession,
    input: &mut I,
    canvas: &mut C,
    clock: &mut K,
    rng: &mut R,
) -> std::io::Result<u64>
where
    I: InputSource,
    C: Canvas,
    K: Clock,
    R: Rng,
{
    let mut stars = Starfield::new(rng);
    info!(state = ?session.state, "frame loop started");

    loop {
        let control = run_frame(session, &mut stars, input, canvas, rng, clock.elapsed_ms())?;
        if control == Control::Quit {
            break;
        }
        clock.wait_for_next_tick();
    }

    info!(ticks = clock.ticks(), score = session.score, "frame loop stopped");
    Ok(clock.ticks())
}
