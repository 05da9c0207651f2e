mod display;
mod serde;

pub mod action;
pub mod board;
pub mod constants;
pub mod coordinate;
pub mod engine;
pub mod game_state;
pub mod player;


pub use crate::action::Action;
pub use crate::board::{Board, Wall, WallOrientation};
pub use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, NUM_WALLS_PER_PLAYER};
pub use crate::coordinate::Coordinate;
pub use crate::engine::Engine;
pub use crate::game_state::GameState;
pub use crate::player::Player;
