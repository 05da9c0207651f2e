use super::constants::{ASCII_LETTER_A, BOARD_HEIGHT, BOARD_WIDTH};
use anyhow::{anyhow, bail};
use std::fmt::{self};
use std::str::FromStr;

/// A cell on the 9x9 grid.
///
/// `col` 0 is the left edge; `row` 0 is player one's starting edge and row 8
/// is player two's. The algebraic form used by `FromStr`/`Display` maps
/// columns to `a..=i` and rows to `1..=9`, so `"e1"` is `(4, 0)`.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Coordinate {
    col: u8,
    row: u8,
}

impl Coordinate {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    pub const fn col(&self) -> u8 {
        self.col
    }

    pub const fn row(&self) -> u8 {
        self.row
    }

    pub fn in_bounds(&self) -> bool {
        (self.col as usize) < BOARD_WIDTH && (self.row as usize) < BOARD_HEIGHT
    }

    /// The cell `dcol`/`drow` away, or `None` when that leaves the grid.
    pub fn offset(&self, dcol: i8, drow: i8) -> Option<Self> {
        let col = self.col as i8 + dcol;
        let row = self.row as i8 + drow;

        if (0..BOARD_WIDTH as i8).contains(&col) && (0..BOARD_HEIGHT as i8).contains(&row) {
            Some(Self::new(col as u8, row as u8))
        } else {
            None
        }
    }
}

impl FromStr for Coordinate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let column = chars.next().ok_or_else(|| anyhow!("Empty coordinate"))?;
        let row = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(|| anyhow!("Invalid row in coordinate {:?}", s))?;

        if chars.next().is_some() {
            bail!("Trailing characters in coordinate {:?}", s);
        }

        if !('a'..='i').contains(&column) || !(1..=9).contains(&row) {
            bail!("Coordinate {:?} is outside the board", s);
        }

        Ok(Coordinate::new(column as u8 - ASCII_LETTER_A, row as u8 - 1))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", (self.col + ASCII_LETTER_A) as char, self.row + 1)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
