//! Game state engine for tic-tac-toe.
//!
//! [`GameState`] owns the board, the player to move, the terminal status and
//! the running [`Scoreboard`]. Moves that cannot be applied are ignored and
//! reported through [`MoveOutcome::Ignored`]; they never change state.

use super::rules::{check_winner, is_full};
use super::score::Scoreboard;
use super::types::{Board, Coord, GameStatus, Player, Square, WinningLine};
use tracing::{debug, info, instrument};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The game already has a winner or is drawn.
    #[display("game is already over")]
    GameOver,
    /// The coordinate is outside the 3x3 grid.
    #[display("cell is off the board")]
    OutOfBounds,
    /// The target square already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
}

/// Result of [`GameState::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was not applied.
    Ignored(Rejection),
    /// Mark placed; the other player is now to move.
    Continue {
        /// Player now to move.
        next: Player,
    },
    /// Mark placed and completed a triple.
    Won {
        /// The winning player.
        winner: Player,
        /// Endpoints of the winning triple.
        line: WinningLine,
    },
    /// Mark placed and filled the board without a triple.
    Draw,
}

impl MoveOutcome {
    /// True if the board changed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    scores: Scoreboard,
}

impl GameState {
    /// Creates a new game: empty board, X to move, zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (or the winner, once the game is won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Returns the endpoints of the winning triple, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// True if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }

    /// True if the game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the cumulative scores.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Ignored when the game is over, the cell is off the board, or the
    /// cell is occupied. Otherwise checks for a win, then for a full board,
    /// and only then passes the turn.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        let coord = Coord::new(row, col);

        if self.is_over() {
            debug!(%coord, "Move ignored: game over");
            return MoveOutcome::Ignored(Rejection::GameOver);
        }
        if coord.index().is_none() {
            debug!(%coord, "Move ignored: off the board");
            return MoveOutcome::Ignored(Rejection::OutOfBounds);
        }
        if !self.board.is_empty(coord) {
            debug!(%coord, "Move ignored: occupied");
            return MoveOutcome::Ignored(Rejection::Occupied);
        }

        let player = self.current_player;
        self.board.set(coord, Square::Occupied(player));
        debug!(%coord, board = %self.board.display(), "Mark placed");

        if let Some(win) = check_winner(&self.board) {
            self.status = GameStatus::Won {
                winner: win.player,
                line: win.line,
            };
            self.scores.record_win(win.player);
            info!(winner = %win.player, start = %win.line.start, end = %win.line.end, "Game won");
            return MoveOutcome::Won {
                winner: win.player,
                line: win.line,
            };
        }

        if is_full(&self.board) {
            self.status = GameStatus::Draw;
            self.scores.record_draw();
            info!("Game drawn");
            return MoveOutcome::Draw;
        }

        self.current_player = player.opponent();
        MoveOutcome::Continue {
            next: self.current_player,
        }
    }

    /// Clears the board and status and gives X the first move. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        info!(games_played = self.scores.games_played(), "Board reset");
    }
}
