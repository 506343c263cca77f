//! Move sources: the capability of supplying a column for the player to move.
//! A uniform-random bot and a line-oriented console reader are provided.

mod console;
mod random;
mod source;

pub use console::ConsoleInput;
pub use random::RandomBot;
pub use source::MoveSource;
