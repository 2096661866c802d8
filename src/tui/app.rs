//! Application state and logic.

use super::input::{Action, move_cursor};
use super::ui;
use crate::config::{ConfigError, GameConfig};
use crate::games::tictactoe::{Coord, GameState, MoveOutcome};
use crate::renderer::{DEFAULT_STEP, LineAnimation, Surface, Theme, pointer_offset};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    surface: Surface,
    theme: Theme,
    step: f64,
    animation: Option<LineAnimation>,
    cursor: Coord,
    should_quit: bool,
}

impl App {
    /// Creates an application from validated configuration.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            game: GameState::new(),
            surface: config.build_surface(),
            theme: config.build_theme()?,
            step: *config.animation().step(),
            animation: None,
            cursor: Coord::new(1, 1),
            should_quit: false,
        })
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Drawing surface geometry.
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Board colors.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Winning line animation, present from the winning move until reset.
    pub fn animation(&self) -> Option<&LineAnimation> {
        self.animation.as_ref()
    }

    /// Keyboard cursor cell.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a user action. `area` is the full frame the UI was laid out in.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action, area: Rect) {
        match action {
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::Reset => {
                self.reset();
            }
            Action::MoveCursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
            }
            Action::PlayCursor => {
                self.play(self.cursor);
            }
            Action::Play(coord) => {
                self.cursor = coord;
                self.play(coord);
            }
            Action::Click { column, row } => self.click(column, row, area),
        }
    }

    /// Forwards a move to the engine and starts the line animation on a win.
    #[instrument(skip(self))]
    pub fn play(&mut self, coord: Coord) -> MoveOutcome {
        let outcome = self.game.apply_move(coord.row, coord.col);
        match outcome {
            MoveOutcome::Ignored(reason) => debug!(%coord, %reason, "Move ignored"),
            MoveOutcome::Won { line, .. } => {
                self.animation = Some(LineAnimation::new(line, self.step));
            }
            MoveOutcome::Continue { .. } | MoveOutcome::Draw => {}
        }
        outcome
    }

    /// Starts a new game if the current one is over. Returns whether it did.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> bool {
        if !self.game.is_over() {
            debug!("Reset ignored: game in progress");
            return false;
        }
        self.game.reset();
        self.animation = None;
        true
    }

    /// Advances one animation frame. Returns `true` if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.animation
            .as_mut()
            .map(LineAnimation::advance)
            .unwrap_or(false)
    }

    fn click(&mut self, column: u16, row: u16, area: Rect) {
        let layout = ui::layout(area, self.game.is_over());

        if let Some(button) = layout.reset_button
            && button.contains(Position::new(column, row))
        {
            self.reset();
            return;
        }

        let Some(offset) = pointer_offset(layout.board_inner, &self.surface, column, row) else {
            debug!(column, row, "Click outside the board");
            return;
        };
        if let Some(coord) = self.surface.cell_at(offset.x, offset.y) {
            self.cursor = coord;
            self.play(coord);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            game: GameState::new(),
            surface: Surface::default(),
            theme: Theme::default(),
            step: DEFAULT_STEP,
            animation: None,
            cursor: Coord::new(1, 1),
            should_quit: false,
        }
    }
}
