use std::{
    collections::HashSet,
    fmt::{self, Display, Formatter},
};

use crate::constants::{ASCII_LETTER_A, BOARD_HEIGHT, BOARD_WIDTH};
use crate::{Coordinate, GameState, Player, WallOrientation};

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut vertical_walls = HashSet::new();
        let mut horizontal_walls = HashSet::new();
        for wall in self.walls() {
            match wall.orientation {
                WallOrientation::Vertical => vertical_walls.insert(wall.coordinate),
                WallOrientation::Horizontal => horizontal_walls.insert(wall.coordinate),
            };
        }

        writeln!(f)?;
        write!(f, "  +")?;
        for _ in 0..BOARD_WIDTH {
            write!(f, "---+")?;
        }
        writeln!(f)?;

        for row in (0..BOARD_HEIGHT as u8).rev() {
            write!(f, "{} |", row + 1)?;
            for col in 0..BOARD_WIDTH as u8 {
                let pawn = match self.pawn_at(Coordinate::new(col, row)) {
                    Some(Player::One) => '1',
                    Some(Player::Two) => '2',
                    None => ' ',
                };
                // The gap right of this column belongs to the next column's
                // vertical wall slot.
                let gap = Coordinate::new(col + 1, row);
                let separator = if (col as usize) < BOARD_WIDTH - 1 && vertical_walls.contains(&gap)
                {
                    '█'
                } else {
                    '|'
                };
                write!(f, " {} {}", pawn, separator)?;
            }
            writeln!(f)?;

            write!(f, "  +")?;
            for col in 0..BOARD_WIDTH as u8 {
                let fenced = horizontal_walls.contains(&Coordinate::new(col, row));
                write!(f, "{}+", if fenced { "■■■" } else { "---" })?;
            }
            writeln!(f)?;
        }

        write!(f, "   ")?;
        for col in 0..BOARD_WIDTH as u8 {
            write!(f, " {}  ", (ASCII_LETTER_A + col) as char)?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(
            f,
            "  P1: {}  P2: {}",
            self.fences_remaining(Player::One),
            self.fences_remaining(Player::Two)
        )?;

        Ok(())
    }
}
