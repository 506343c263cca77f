//! # Connect Four Engine
//!
//! The rules engine for Connect Four on the standard 6x7 grid: gravity drops,
//! turn alternation, and win/draw detection anchored on the last placed token.
//! Around it sit a random bot and console move source, a text renderer, a
//! session loop for headless play, and a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] - Core game logic: board, player identity, status, engine
//! - [`bot`] - Move sources: uniform-random bot, console input
//! - [`session`] - Session loop driving two move sources, match statistics
//! - [`render`] - Plain-text board rendering
//! - [`ui`] - Terminal UI: interactive game view
//! - [`config`] - TOML configuration loading and validation
//! - [`logging`] - Tracing subscriber setup for the binaries
//! - [`error`] - Structured error types

pub mod bot;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod render;
pub mod session;
pub mod ui;

pub use error::{MoveError, SetupError};
pub use game::{Board, Cell, GameEngine, GameStatus, PlayerId};
