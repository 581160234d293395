//! Terminal UI: play Connect Four against a computer opponent.

mod app;
mod game_view;

pub use app::App;
