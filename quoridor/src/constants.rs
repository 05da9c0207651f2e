pub const BOARD_WIDTH: usize = 9;
pub const BOARD_HEIGHT: usize = 9;

pub const NUM_WALLS_PER_PLAYER: u8 = 10;

pub const ASCII_LETTER_A: u8 = b'a';
