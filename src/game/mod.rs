//! Core Connect Four game logic: board representation, player identities and
//! the mutable game engine.

mod board;
mod engine;
mod player;
mod status;

pub use board::{column_index, Board, Cell, COLS, CONNECT, DIRECTIONS, ROWS};
pub use engine::{GameEngine, Placement};
pub use player::PlayerId;
pub use status::GameStatus;
