//! Core game logic: the 6x12 board, the two players, and terminal
//! classification.

mod board;
mod outcome;
mod player;
#[cfg(test)]
pub(crate) mod testing;

pub use board::{Board, Cell, Direction, COLS, ROWS, WIN_LENGTH};
pub use outcome::{classify, Outcome};
pub use player::Player;
