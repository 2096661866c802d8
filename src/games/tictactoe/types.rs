//! Core domain types for tic-tac-toe.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[default]
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// A `(row, col)` coordinate on the board.
///
/// Coordinates are not range-checked on construction; use
/// [`Coord::index`] to get the row-major index of an in-range cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Coord {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

impl Coord {
    /// Row-major index (0-8), or `None` when outside the 3x3 grid.
    pub fn index(self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then_some(self.row * 3 + self.col)
    }

    /// Coordinate for a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::new(index / 3, index % 3))
    }

    /// All 9 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..9).map(|i| Self::new(i / 3, i % 3))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given coordinate; out-of-range reads as empty.
    pub fn get(&self, coord: Coord) -> Square {
        coord
            .index()
            .map(|i| self.squares[i])
            .unwrap_or(Square::Empty)
    }

    /// Sets the square at the given coordinate. Out-of-range writes are ignored.
    pub(crate) fn set(&mut self, coord: Coord, square: Square) {
        if let Some(i) = coord.index() {
            self.squares[i] = square;
        }
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Iterates occupied cells with their owner.
    pub fn marks(&self) -> impl Iterator<Item = (Coord, Player)> + '_ {
        Coord::all().filter_map(|c| self.get(c).player().map(|p| (c, p)))
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.get(Coord::new(row, col)) {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// The two ends of a winning triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct WinningLine {
    /// First cell of the triple.
    pub start: Coord,
    /// Last cell of the triple.
    pub end: Coord,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won {
        /// The player with three in a row.
        winner: Player,
        /// Endpoints of the winning triple.
        line: WinningLine,
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
