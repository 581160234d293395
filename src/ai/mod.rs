//! Computer players: the alpha-beta minimax engine with its evaluator and move
//! ordering, plus the easy and random opponents.

mod agent;
mod easy;
pub mod evaluator;
pub mod minimax;
pub mod ordering;
mod random;

pub use agent::Agent;
pub use easy::{winning_columns, EasyAgent};
pub use evaluator::{Evaluator, Heuristic, WindowHeuristic};
pub use minimax::{MinimaxAgent, SearchResult, SearchStats, DEFAULT_DEPTH};
pub use ordering::{order_moves, Move, MoveList};
pub use random::RandomAgent;

/// Which opponent the human plays against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random columns
    Random,
    /// Wins or blocks one move ahead, random otherwise
    Easy,
    /// Full minimax search
    #[default]
    Hard,
}

impl Difficulty {
    /// Build the agent for this difficulty.
    ///
    /// `depth` only applies to `Hard`; `seed` only to the randomized agents.
    pub fn build(self, depth: u32, seed: Option<u64>) -> Box<dyn Agent> {
        match (self, seed) {
            (Difficulty::Random, Some(seed)) => Box::new(RandomAgent::with_seed(seed)),
            (Difficulty::Random, None) => Box::new(RandomAgent::new()),
            (Difficulty::Easy, Some(seed)) => Box::new(EasyAgent::with_seed(seed)),
            (Difficulty::Easy, None) => Box::new(EasyAgent::new()),
            (Difficulty::Hard, _) => Box::new(MinimaxAgent::new(depth)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Random => "Random AI",
            Difficulty::Easy => "Easy AI",
            Difficulty::Hard => "Hard AI",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_matches_difficulty() {
        assert_eq!(Difficulty::Random.build(4, Some(1)).name(), "Random");
        assert_eq!(Difficulty::Easy.build(4, None).name(), "Easy");
        assert_eq!(Difficulty::Hard.build(4, None).name(), "Minimax");
    }

    #[test]
    fn default_is_hard() {
        assert_eq!(Difficulty::default(), Difficulty::Hard);
    }
}
