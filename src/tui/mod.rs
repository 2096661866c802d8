//! Terminal front end: the drawing surface, input dispatch and event loop.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, key_action, mouse_action, move_cursor};
pub use ui::{UiLayout, draw, layout};

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Owns raw mode and the alternate screen for one session.
///
/// Restores the terminal on drop unless [`TerminalGuard::restore`] already ran.
struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Enables raw mode, then the alternate screen and mouse capture.
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // From here on, any early return drops the guard and restores.
        let guard = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        debug!("Terminal prepared");
        Ok(guard)
    }

    /// Restores the terminal, reporting the first failure.
    fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        restore_terminal(&mut io::stdout())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored
            && let Err(err) = restore_terminal(&mut io::stdout())
        {
            error!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen. Every step runs even if an
/// earlier one fails; the first error is returned.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = leave_screen(out);
    raw.and(screen)
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
}

/// Runs the game until the user quits.
///
/// The terminal is restored on every exit path, including setup failures.
#[instrument(skip(config))]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    let mut app = App::new(config)?;

    info!("Starting tic-tac-toe TUI");

    let guard = TerminalGuard::enter()?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| run_app(&mut terminal, &mut app, config.frame_interval()));
    let restored = guard.restore().context("Failed to restore terminal");

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    let scores = app.game().scores();
    info!(
        games = scores.games_played(),
        draws = scores.draws(),
        "Session finished"
    );
    res.and(restored)
}

/// Single-threaded event loop: draw, wait for input up to the next frame,
/// then advance the animation when a frame interval has elapsed.
fn run_app(terminal: &mut Term, app: &mut App, frame_interval: Duration) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        let area = terminal.draw(|f| ui::draw(f, app))?.area;

        let timeout = frame_interval.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) => input::key_action(key),
                Event::Mouse(mouse) => input::mouse_action(mouse),
                _ => None,
            };
            if let Some(action) = action {
                app.handle(action, area);
            }
        }

        if last_frame.elapsed() >= frame_interval {
            app.tick();
            last_frame = Instant::now();
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
