use arrayvec::ArrayVec;

use crate::game::{Board, Color, COLS};

use super::evaluator::Evaluator;

/// A candidate column with the one-ply score it was ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub column: usize,
    pub score: i64,
}

pub type MoveList = ArrayVec<Move, COLS>;

/// Rank the playable columns for `mover`, best first.
///
/// Each column is tried in place, scored as a leaf for `mover`, then taken
/// back. The sort is stable, so equal scores keep ascending column order.
pub fn order_moves(board: &mut Board, evaluator: &Evaluator, mover: Color) -> MoveList {
    let mut moves: MoveList = board
        .playable_columns()
        .into_iter()
        .map(|column| {
            board.place(column, mover);
            let score = evaluator.score(board, mover, mover.other(), 0, 0);
            board.unplace(column);
            Move { column, score }
        })
        .collect();

    moves.sort_by(|a, b| b.score.cmp(&a.score));
    moves
}
