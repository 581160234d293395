use arrayvec::ArrayVec;

use super::color::Color;
use super::state::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Index of the middle column.
pub const CENTER_COL: usize = COLS / 2;

/// Columns that can still take a piece, ascending.
pub type LegalActions = ArrayVec<usize, COLS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// 7×6 grid with a fill pointer per column.
///
/// Row 0 is the top, row 5 the bottom. `pointers[col]` is the row the next
/// piece in `col` lands on, or -1 once the column is full. Every row below the
/// pointer is occupied and every row at or above it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    pointers: [i8; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            pointers: [(ROWS - 1) as i8; COLS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Row the next piece in `col` would land on, `None` if the column is full.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        usize::try_from(self.pointers[col]).ok()
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.pointers[col] < 0
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.pointers.iter().all(|&p| p < 0)
    }

    /// Columns that are not full, in ascending order.
    pub fn playable_columns(&self) -> LegalActions {
        (0..COLS).filter(|&col| self.pointers[col] >= 0).collect()
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.pointers
            .iter()
            .map(|&p| (ROWS as i8 - 1 - p) as usize)
            .sum()
    }

    /// Drop `color` into `col` without bounds checks.
    ///
    /// The column must not be full. Pair every call with one `unplace` on the
    /// same column, in reverse order.
    pub fn place(&mut self, col: usize, color: Color) {
        debug_assert!(self.pointers[col] >= 0, "place on full column {col}");
        let row = self.pointers[col] as usize;
        self.cells[row][col] = color.to_cell();
        self.pointers[col] -= 1;
    }

    /// Take back the most recent `place` on `col`.
    pub fn unplace(&mut self, col: usize) {
        debug_assert!(
            self.pointers[col] < (ROWS - 1) as i8,
            "unplace on empty column {col}"
        );
        self.pointers[col] += 1;
        let row = self.pointers[col] as usize;
        self.cells[row][col] = Cell::Empty;
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, color: Color) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        let row = self.landing_row(col).ok_or(MoveError::ColumnFull)?;
        self.place(col, color);
        Ok(row)
    }

    /// Check whether `color` has four in a row anywhere on the board.
    pub fn has_won(&self, color: Color) -> bool {
        super::win::is_win(self, color)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
