//! Core Connect Four game logic: board with reversible place/unplace, colors,
//! four-in-a-row detection, and the game state machine.

mod board;
mod color;
mod state;
pub(crate) mod win;

pub use board::{Board, Cell, LegalActions, CENTER_COL, COLS, ROWS};
pub use color::Color;
pub use state::{GameOutcome, GameState, MoveError};
pub use win::is_win;
