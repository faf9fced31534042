use std::fs::File;
use std::io::{stdout, BufWriter};
use std::sync::Mutex;

use anyhow::Context;
use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::{error, info};

use space_invaders::assets::{Assets, DisplayConfig};
use space_invaders::display::TerminalCanvas;
use space_invaders::frame_loop::{self, FixedRateClock};
use space_invaders::keyboard::TerminalInput;
use space_invaders::session::GameSession;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The display owns the terminal, so logs go to a file in the temp dir.
fn init_logging() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join("space_invaders.log");
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .init();
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_logging()?;

    // Asset problems abort before the terminal is touched so the message
    // stays readable.
    let config = DisplayConfig::embedded().context("reading display configuration")?;
    let root = std::env::current_dir().context("locating asset root")?;
    let assets = Assets::load(&config, &root).context("loading game assets")?;

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(terminal::SetTitle(&assets.title))?;

    // Request key-release events where the terminal supports them; others
    // fall back to hold-window expiry.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    info!(keyboard_enhanced, "terminal ready");

    let result = run(out, assets, keyboard_enhanced);

    // Always restore the terminal
    let mut out = stdout();
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        error!("game loop failed: {e:#}");
    }
    result
}

fn run(
    out: BufWriter<std::io::Stdout>,
    assets: Assets,
    keyboard_enhanced: bool,
) -> anyhow::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut canvas = TerminalCanvas::new(out, cols, rows, assets).with_size_probe(terminal::size);
    let mut input = TerminalInput::spawn(keyboard_enhanced);
    let mut session = GameSession::new();
    let mut clock = FixedRateClock::default();
    let mut rng = thread_rng();

    let ticks = frame_loop::run(&mut session, &mut input, &mut canvas, &mut clock, &mut rng)
        .context("running frame loop")?;
    info!(ticks, final_score = session.score, "exiting");
    Ok(())
}
