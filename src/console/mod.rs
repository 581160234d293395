//! Headless text front end: prompts on stdin, boards printed to stdout.

mod input;
mod render;
mod session;

pub use input::{parse_column, read_choice, read_column};
pub use render::{render_board, Symbols};
pub use session::ConsoleGame;
