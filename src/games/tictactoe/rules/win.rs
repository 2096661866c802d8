//! Win detection logic for tic-tac-toe.

use super::super::{Board, Coord, Player, Square, WinningLine};
use tracing::instrument;

/// The 8 winning triples, in scan order: rows, columns, then the two diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord { row: 0, col: 0 }, Coord { row: 0, col: 1 }, Coord { row: 0, col: 2 }],
    [Coord { row: 1, col: 0 }, Coord { row: 1, col: 1 }, Coord { row: 1, col: 2 }],
    [Coord { row: 2, col: 0 }, Coord { row: 2, col: 1 }, Coord { row: 2, col: 2 }],
    // Columns
    [Coord { row: 0, col: 0 }, Coord { row: 1, col: 0 }, Coord { row: 2, col: 0 }],
    [Coord { row: 0, col: 1 }, Coord { row: 1, col: 1 }, Coord { row: 2, col: 1 }],
    [Coord { row: 0, col: 2 }, Coord { row: 1, col: 2 }, Coord { row: 2, col: 2 }],
    // Diagonals
    [Coord { row: 0, col: 0 }, Coord { row: 1, col: 1 }, Coord { row: 2, col: 2 }],
    [Coord { row: 0, col: 2 }, Coord { row: 1, col: 1 }, Coord { row: 2, col: 0 }],
];

/// A detected three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    /// Owner of the triple.
    pub player: Player,
    /// First and last cell of the triple.
    pub line: WinningLine,
}

/// Checks if there is a winner on the board.
///
/// Returns the first triple (in [`LINES`] order) whose three squares hold
/// the same player, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => Some(Win {
                player,
                line: WinningLine::new(a, c),
            }),
            _ => None,
        }
    })
}
