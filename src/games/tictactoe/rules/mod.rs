//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board); the state engine runs
//! them after every accepted move.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Win, check_winner};
