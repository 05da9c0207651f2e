use super::constants::BOARD_HEIGHT;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The row this player's pawn must reach to win.
    pub fn goal_row(&self) -> u8 {
        match self {
            Player::One => (BOARD_HEIGHT - 1) as u8,
            Player::Two => 0,
        }
    }

    /// 1-based player number, as used by game-agnostic drivers.
    pub fn as_index(&self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub(crate) fn idx(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_index())
    }
}
