//! Terminal UI for playing Connect Four at the keyboard, against another
//! person or a random bot.

mod app;
mod game_view;

pub use app::App;
