//! Four-in-a-row detection.
//!
//! Scans the whole board rather than only the cells around the last move, so
//! the result never depends on how the position was reached.

use super::board::{Board, COLS, ROWS};
use super::color::Color;

/// `(row step, col step)` for each line direction. Rows grow downwards.
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal \
    (-1, 1), // diagonal /
];

/// Iterate over every run of four cells on the board as `(row, col)` arrays.
pub(crate) fn windows() -> impl Iterator<Item = [(usize, usize); 4]> {
    DIRECTIONS.into_iter().flat_map(|(dr, dc)| {
        (0..ROWS).flat_map(move |row| {
            (0..COLS).filter_map(move |col| window_from(row, col, dr, dc))
        })
    })
}

fn window_from(row: usize, col: usize, dr: isize, dc: isize) -> Option<[(usize, usize); 4]> {
    let end_row = row as isize + 3 * dr;
    let end_col = col as isize + 3 * dc;
    if !(0..ROWS as isize).contains(&end_row) || !(0..COLS as isize).contains(&end_col) {
        return None;
    }
    let mut cells = [(0, 0); 4];
    for (i, cell) in cells.iter_mut().enumerate() {
        let i = i as isize;
        *cell = ((row as isize + i * dr) as usize, (col as isize + i * dc) as usize);
    }
    Some(cells)
}

/// True iff `color` has four consecutive pieces in some row, column or diagonal.
pub fn is_win(board: &Board, color: Color) -> bool {
    let cell = color.to_cell();
    check_vertical(board, cell)
        || check_horizontal(board, cell)
        || check_diagonal_down(board, cell)
        || check_diagonal_up(board, cell)
}

fn check_vertical(board: &Board, cell: super::Cell) -> bool {
    (0..COLS).any(|col| {
        (0..=ROWS - 4).any(|row| (0..4).all(|i| board.get(row + i, col) == cell))
    })
}

fn check_horizontal(board: &Board, cell: super::Cell) -> bool {
    (0..ROWS).any(|row| {
        (0..=COLS - 4).any(|col| (0..4).all(|i| board.get(row, col + i) == cell))
    })
}

/// Top-left to bottom-right, \
fn check_diagonal_down(board: &Board, cell: super::Cell) -> bool {
    (0..=ROWS - 4).any(|row| {
        (0..=COLS - 4).any(|col| (0..4).all(|i| board.get(row + i, col + i) == cell))
    })
}

/// Bottom-left to top-right, /
fn check_diagonal_up(board: &Board, cell: super::Cell) -> bool {
    (3..ROWS).any(|row| {
        (0..=COLS - 4).any(|col| (0..4).all(|i| board.get(row - i, col + i) == cell))
    })
}
