use std::fmt::Write as _;

use crate::game::{Board, Cell, Color, COLS, ROWS};

/// Characters used to draw each color's pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub red: char,
    pub yellow: char,
}

impl Symbols {
    pub fn for_cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => ' ',
            Cell::Red => self.red,
            Cell::Yellow => self.yellow,
        }
    }

    pub fn for_color(&self, color: Color) -> char {
        self.for_cell(color.to_cell())
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols { red: 'r', yellow: 'y' }
    }
}

/// Draw the board as text, top row first, with 1-based column numbers below.
pub fn render_board(board: &Board, symbols: &Symbols) -> String {
    let mut out = String::new();
    for row in 0..ROWS {
        for col in 0..COLS {
            let _ = write!(out, "| {} ", symbols.for_cell(board.get(row, col)));
        }
        out.push_str("|\n");
    }
    for col in 0..COLS {
        let _ = write!(out, "  {} ", col + 1);
    }
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}
