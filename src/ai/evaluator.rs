//! Position scoring shared by the search leaves and the move orderer.

use crate::game::{is_win, win, Board, Cell, Color, CENTER_COL, COLS, ROWS};

/// Deepest search the engine accepts: one ply per cell.
pub const MAX_DEPTH: u32 = (ROWS * COLS) as u32;

/// Score of a position won by the scoring side at ply 0.
///
/// Sits `2 * MAX_DEPTH` below `i64::MAX` so ply adjustments never overflow.
pub const WIN_SCORE: i64 = i64::MAX - 2 * MAX_DEPTH as i64;

/// Alpha-beta bound strictly outside every reachable score.
pub const INFINITY: i64 = i64::MAX;

/// Trait for evaluating a non-terminal board from one color's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, color: Color) -> i64;
}

/// Center-column bonus plus a score for every 4-cell window the color is
/// building without interference.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    pub const CENTER_BONUS: i64 = 3;
    pub const THREE_OPEN: i64 = 5;
    pub const TWO_OPEN: i64 = 2;

    fn score_window(own: usize, empty: usize) -> i64 {
        match (own, empty) {
            (3, 1) => Self::THREE_OPEN,
            (2, 2) => Self::TWO_OPEN,
            _ => 0,
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, color: Color) -> i64 {
        let own_cell = color.to_cell();

        // Center column bonus
        let mut score = (0..ROWS)
            .filter(|&row| board.get(row, CENTER_COL) == own_cell)
            .count() as i64
            * Self::CENTER_BONUS;

        for window in win::windows() {
            let mut own = 0;
            let mut empty = 0;
            for (row, col) in window {
                match board.get(row, col) {
                    c if c == own_cell => own += 1,
                    Cell::Empty => empty += 1,
                    _ => {}
                }
            }
            score += Self::score_window(own, empty);
        }

        score
    }
}

/// Maps a board to a signed score favoring one color.
pub struct Evaluator {
    heuristic: Box<dyn Heuristic>,
}

impl Evaluator {
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        Evaluator { heuristic }
    }

    /// Score `board` for `color`.
    ///
    /// `depth` is the search depth still remaining and `max_depth` the depth
    /// the search started with, so `max_depth - depth` plies have been played.
    /// Wins are worth more the sooner they come, losses less the sooner they
    /// come, a full board is 0, and anything else is the heuristic minus the
    /// ply count.
    pub fn score(
        &self,
        board: &Board,
        color: Color,
        opponent: Color,
        depth: u32,
        max_depth: u32,
    ) -> i64 {
        let ply = i64::from(max_depth.saturating_sub(depth));

        if is_win(board, color) {
            WIN_SCORE - ply
        } else if is_win(board, opponent) {
            -WIN_SCORE + ply
        } else if board.is_full() {
            0
        } else {
            self.heuristic.evaluate(board, color) - ply
        }
    }

    /// True for scores that can only come from a decided game.
    pub fn is_decisive(score: i64) -> bool {
        score.abs() >= WIN_SCORE - i64::from(MAX_DEPTH)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Box::new(WindowHeuristic))
    }
}
