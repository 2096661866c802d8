//! canvas_tictactoe library - two-player tic-tac-toe on a terminal canvas
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe state engine (moves, win/draw detection, scores)
//! - **Renderer**: surface geometry, winning-line animation, canvas painting
//! - **TUI**: layout, input dispatch and the event loop
//! - **Config**: TOML configuration with defaults
//!
//! # Example
//!
//! ```
//! use canvas_tictactoe::{GameState, MoveOutcome, Player};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     game.apply_move(row, col);
//! }
//! let outcome = game.apply_move(0, 2);
//! assert!(matches!(outcome, MoveOutcome::Won { winner: Player::X, .. }));
//! assert_eq!(game.scores().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod games;
mod renderer;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AnimationConfig, ConfigError, GameConfig, SurfaceConfig, ThemeConfig};

// Crate-level exports - Game engine
pub use games::tictactoe::{
    Board, Coord, GameState, GameStatus, LINES, MoveOutcome, Player, Rejection, Scoreboard,
    Square, Win, WinningLine, check_winner, is_draw, is_full,
};

// Crate-level exports - Renderer
pub use renderer::{
    BoardView, DEFAULT_STEP, LineAnimation, Point, Segment, Surface, Theme, pointer_offset,
};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, UiLayout, draw, key_action, layout, mouse_action, move_cursor, run_tui};
