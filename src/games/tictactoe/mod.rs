//! Tic-tac-toe game state engine.

pub mod rules;
mod score;
mod state;
mod types;

pub use rules::{LINES, Win, check_winner, is_draw, is_full};
pub use score::Scoreboard;
pub use state::{GameState, MoveOutcome, Rejection};
pub use types::{Board, Coord, GameStatus, Player, Square, WinningLine};
