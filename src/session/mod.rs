//! Session loop: plays games between two move sources and tallies results.

mod runner;
mod stats;

pub use runner::{GameRecord, Session, SessionEvent};
pub use stats::MatchStats;
