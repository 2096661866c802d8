//! Cumulative results across games.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Win and draw counters. Survives [`GameState::reset`](super::GameState::reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Number of games won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Number of drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total finished games.
    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }

    pub(crate) fn record_draw(&mut self) {
        self.draws += 1;
    }
}
