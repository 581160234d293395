use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::error::SearchError;
use crate::game::{is_win, Board, Color, GameState, LegalActions};

use super::agent::Agent;

/// One-ply agent: wins if it can, blocks if it must, otherwise plays at random.
pub struct EasyAgent {
    rng: StdRng,
}

impl EasyAgent {
    pub fn new() -> Self {
        EasyAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        EasyAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EasyAgent {
    fn default() -> Self {
        Self::new()
    }
}

/// Columns where dropping `color` completes four in a row.
pub fn winning_columns(board: &mut Board, color: Color) -> LegalActions {
    board
        .playable_columns()
        .into_iter()
        .filter(|&col| {
            board.place(col, color);
            let wins = is_win(board, color);
            board.unplace(col);
            wins
        })
        .collect()
}

impl Agent for EasyAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError> {
        let mut board = *state.board();
        let me = state.current_player();

        let own_wins = winning_columns(&mut board, me);
        let candidates = if !own_wins.is_empty() {
            own_wins
        } else {
            let blocks = winning_columns(&mut board, me.other());
            if !blocks.is_empty() {
                blocks
            } else {
                board.playable_columns()
            }
        };

        let action = *candidates
            .choose(&mut self.rng)
            .ok_or(SearchError::NoPlayableColumns)?;
        tracing::debug!(column = action, "easy move selected");
        Ok(action)
    }

    fn name(&self) -> &str {
        "Easy"
    }
}
