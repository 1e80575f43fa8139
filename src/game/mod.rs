//! Core checkers logic: board representation, pieces, players, and the
//! select/move state machine the UI drives.

mod board;
mod piece;
mod player;
mod position;
mod state;

pub use board::{Board, BoardError, BOARD_SIZE, STARTING_ROWS};
pub use piece::Piece;
pub use player::Player;
pub use position::{MoveSet, Position};
pub use state::{GameState, MoveError, MoveOutcome, SelectError};
