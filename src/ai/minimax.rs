//! Depth-limited minimax with alpha-beta pruning.
//!
//! The search owns a single mutable [`Board`] for the whole call and walks the
//! tree with `place` → recurse → `unplace`, so only one line of play exists at
//! any time. Children are visited in [`order_moves`] order, which only affects
//! how much gets pruned, never the value returned.

use crate::error::SearchError;
use crate::game::{is_win, Board, Color, GameState};

use super::agent::Agent;
use super::evaluator::{Evaluator, Heuristic, INFINITY};
use super::ordering::order_moves;

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: u32 = 10;

/// Counters collected over one root search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered below the root, leaves included
    pub nodes: u64,
    /// Branches abandoned because `beta <= alpha`
    pub cutoffs: u64,
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: usize,
    pub score: i64,
    pub stats: SearchStats,
}

/// Minimax agent with alpha-beta pruning.
pub struct MinimaxAgent {
    depth: u32,
    evaluator: Evaluator,
    last_stats: SearchStats,
}

impl MinimaxAgent {
    /// `depth` must be at least 1.
    pub fn new(depth: u32) -> Self {
        Self::with_evaluator(depth, Evaluator::default())
    }

    pub fn with_heuristic(depth: u32, heuristic: Box<dyn Heuristic>) -> Self {
        Self::with_evaluator(depth, Evaluator::new(heuristic))
    }

    fn with_evaluator(depth: u32, evaluator: Evaluator) -> Self {
        debug_assert!(depth >= 1, "search depth must be at least 1");
        MinimaxAgent {
            depth: depth.max(1),
            evaluator,
            last_stats: SearchStats::default(),
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Counters from the most recent search.
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Pick the best column for `color` on `board`.
    pub fn choose_move(&mut self, board: &mut Board, color: Color) -> Result<usize, SearchError> {
        self.search(board, color).map(|result| result.column)
    }

    /// Run the full search from the root and report the chosen column.
    ///
    /// `board` is mutated during the search and restored before returning.
    pub fn search(&mut self, board: &mut Board, color: Color) -> Result<SearchResult, SearchError> {
        let mut search = Search {
            board,
            evaluator: &self.evaluator,
            me: color,
            opponent: color.other(),
            max_depth: self.depth,
            stats: SearchStats::default(),
        };

        let mut best: Option<(usize, i64)> = None;
        for candidate in order_moves(search.board, search.evaluator, color) {
            search.board.place(candidate.column, color);
            let score = search.minimax(self.depth - 1, -INFINITY, INFINITY, false);
            search.board.unplace(candidate.column);

            tracing::trace!(column = candidate.column, score, "root candidate");

            // Strict comparison: the first column seen keeps a tie.
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((candidate.column, score));
            }
        }

        let stats = search.stats;
        self.last_stats = stats;

        let (column, score) = best.ok_or(SearchError::NoPlayableColumns)?;
        tracing::debug!(
            column,
            score,
            depth = self.depth,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "minimax move selected"
        );

        Ok(SearchResult {
            column,
            score,
            stats,
        })
    }
}

/// State threaded through one root search.
struct Search<'a> {
    board: &'a mut Board,
    evaluator: &'a Evaluator,
    me: Color,
    opponent: Color,
    max_depth: u32,
    stats: SearchStats,
}

impl Search<'_> {
    fn is_terminal(&self) -> bool {
        is_win(self.board, self.me) || is_win(self.board, self.opponent) || self.board.is_full()
    }

    fn minimax(&mut self, depth: u32, mut alpha: i64, mut beta: i64, maximizing: bool) -> i64 {
        self.stats.nodes += 1;

        if depth == 0 || self.is_terminal() {
            return self
                .evaluator
                .score(self.board, self.me, self.opponent, depth, self.max_depth);
        }

        if maximizing {
            let mut best = -INFINITY;
            for candidate in order_moves(self.board, self.evaluator, self.me) {
                self.board.place(candidate.column, self.me);
                let eval = self.minimax(depth - 1, alpha, beta, false);
                self.board.unplace(candidate.column);

                best = best.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for candidate in order_moves(self.board, self.evaluator, self.opponent) {
                self.board.place(candidate.column, self.opponent);
                let eval = self.minimax(depth - 1, alpha, beta, true);
                self.board.unplace(candidate.column);

                best = best.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError> {
        let mut board = *state.board();
        self.choose_move(&mut board, state.current_player())
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::evaluator::WIN_SCORE;
    use crate::ai::RandomAgent;
    use crate::game::{GameOutcome, COLS, ROWS};

    fn board_from(moves: &[(usize, Color)]) -> Board {
        let mut board = Board::new();
        for &(col, color) in moves {
            board.place(col, color);
        }
        board
    }

    /// Plain minimax over columns in ascending order, no pruning.
    fn reference_minimax(
        board: &mut Board,
        evaluator: &Evaluator,
        me: Color,
        depth: u32,
        max_depth: u32,
        maximizing: bool,
    ) -> i64 {
        let opponent = me.other();
        if depth == 0 || is_win(board, me) || is_win(board, opponent) || board.is_full() {
            return evaluator.score(board, me, opponent, depth, max_depth);
        }
        let mover = if maximizing { me } else { opponent };
        let scores = board.playable_columns().into_iter().map(|col| {
            board.place(col, mover);
            let s = reference_minimax(board, evaluator, me, depth - 1, max_depth, !maximizing);
            board.unplace(col);
            s
        });
        let scores: Vec<i64> = scores.collect();
        if maximizing {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    // --- End-to-end scenarios ---

    #[test]
    fn opens_in_center_at_reference_depth() {
        let mut agent = MinimaxAgent::new(DEFAULT_DEPTH);
        let mut board = Board::new();
        assert_eq!(agent.choose_move(&mut board, Color::Red).unwrap(), 3);
    }

    #[test]
    fn blocks_opponent_win() {
        // Yellow has [0,1,2] on the bottom row, Red has no immediate win.
        let mut board = board_from(&[
            (0, Color::Yellow),
            (1, Color::Yellow),
            (2, Color::Yellow),
            (6, Color::Red),
            (6, Color::Red),
            (5, Color::Red),
        ]);
        let mut agent = MinimaxAgent::new(DEFAULT_DEPTH);
        let action = agent.choose_move(&mut board, Color::Red).unwrap();
        assert_eq!(action, 3, "Should block opponent's winning move at col 3");
    }

    #[test]
    fn blocks_vertical_threat() {
        let mut board = board_from(&[
            (3, Color::Yellow),
            (3, Color::Yellow),
            (3, Color::Yellow),
            (0, Color::Red),
            (6, Color::Red),
            (1, Color::Red),
        ]);
        let mut agent = MinimaxAgent::new(6);
        assert_eq!(agent.choose_move(&mut board, Color::Red).unwrap(), 3);
    }

    #[test]
    fn prefers_win_over_block() {
        // Red has bottom row 0,1,2. Yellow has second row 0,1,2.
        // Both threaten col 3. Red should take the win.
        let mut moves = Vec::new();
        for col in 0..3 {
            moves.push((col, Color::Red));
            moves.push((col, Color::Yellow));
        }
        let mut board = board_from(&moves);
        let mut agent = MinimaxAgent::new(DEFAULT_DEPTH);
        let result = agent.search(&mut board, Color::Red).unwrap();
        assert_eq!(result.column, 3, "Should prefer winning move over blocking");
        assert_eq!(result.score, WIN_SCORE - 1);
    }

    #[test]
    fn takes_winning_move_as_yellow() {
        let mut board = board_from(&[
            (6, Color::Yellow),
            (6, Color::Yellow),
            (6, Color::Yellow),
            (0, Color::Red),
            (1, Color::Red),
        ]);
        let mut agent = MinimaxAgent::new(4);
        assert_eq!(agent.choose_move(&mut board, Color::Yellow).unwrap(), 6);
    }

    // --- Search properties ---

    #[test]
    fn search_restores_board() {
        let mut board = board_from(&[(3, Color::Red), (2, Color::Yellow), (3, Color::Red)]);
        let before = board;
        let mut agent = MinimaxAgent::new(6);
        agent.choose_move(&mut board, Color::Yellow).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn search_is_deterministic() {
        let board = board_from(&[(3, Color::Red), (4, Color::Yellow), (2, Color::Red)]);
        let mut first_board = board;
        let first = MinimaxAgent::new(6).search(&mut first_board, Color::Yellow).unwrap();
        for _ in 0..3 {
            let mut b = board;
            let again = MinimaxAgent::new(6).search(&mut b, Color::Yellow).unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn pruning_matches_plain_minimax() {
        let positions = [
            vec![],
            vec![(3, Color::Red), (3, Color::Yellow)],
            vec![(0, Color::Red), (1, Color::Yellow), (1, Color::Red), (4, Color::Yellow)],
            vec![(2, Color::Red), (2, Color::Red), (5, Color::Yellow), (6, Color::Yellow)],
        ];
        let evaluator = Evaluator::default();
        let depth = 4;

        for moves in positions {
            let mut board = board_from(&moves);
            let result = MinimaxAgent::new(depth).search(&mut board, Color::Red).unwrap();

            board.place(result.column, Color::Red);
            let chosen_value =
                reference_minimax(&mut board, &evaluator, Color::Red, depth - 1, depth, false);
            board.unplace(result.column);

            let best_value = board
                .playable_columns()
                .into_iter()
                .map(|col| {
                    board.place(col, Color::Red);
                    let v = reference_minimax(
                        &mut board,
                        &evaluator,
                        Color::Red,
                        depth - 1,
                        depth,
                        false,
                    );
                    board.unplace(col);
                    v
                })
                .max()
                .unwrap();

            assert_eq!(result.score, best_value, "position {moves:?}");
            assert_eq!(chosen_value, best_value, "position {moves:?}");
        }
    }

    #[test]
    fn pruning_cuts_branches() {
        let mut agent = MinimaxAgent::new(6);
        let mut board = Board::new();
        agent.choose_move(&mut board, Color::Red).unwrap();
        let stats = agent.last_stats();
        assert!(stats.cutoffs > 0);
        // Unpruned depth-6 tree has over 100k nodes.
        assert!(stats.nodes < 7u64.pow(6));
    }

    #[test]
    fn depth_one_picks_best_leaf() {
        let mut agent = MinimaxAgent::new(1);
        let mut board = Board::new();
        assert_eq!(agent.choose_move(&mut board, Color::Yellow).unwrap(), 3);
        assert_eq!(agent.last_stats().nodes, COLS as u64);
    }

    #[test]
    fn full_board_is_an_error() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.place(col, Color::Red);
            }
        }
        let mut agent = MinimaxAgent::new(4);
        assert_eq!(
            agent.choose_move(&mut board, Color::Yellow),
            Err(SearchError::NoPlayableColumns)
        );
    }

    #[test]
    fn only_one_column_left() {
        let mut board = Board::new();
        let pattern = [
            0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, //
            2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, //
            4, 5, 4, 5, 4, 5, 5, 4, 5, 4, 5, 4, //
            6, 6, 6, 6, 6,
        ];
        let mut color = Color::Red;
        for &col in &pattern {
            board.place(col, color);
            color = color.other();
        }
        let result = MinimaxAgent::new(DEFAULT_DEPTH).search(&mut board, color).unwrap();
        assert_eq!(result.column, 6);
        assert_eq!(result.score, 0);
    }

    // --- Agent trait tests ---

    #[test]
    fn selects_legal_action() {
        let mut agent = MinimaxAgent::new(4);
        let state = GameState::initial();
        let legal = state.legal_actions();
        let action = agent.select_action(&state).unwrap();
        assert!(legal.contains(&action), "Action {action} is not legal");
    }

    #[test]
    fn name_is_minimax() {
        let agent = MinimaxAgent::new(7);
        assert_eq!(agent.name(), "Minimax");
        assert_eq!(agent.depth(), 7);
    }

    // --- Integration tests ---

    #[test]
    fn full_game_vs_self_completes() {
        let mut agent1 = MinimaxAgent::new(4);
        let mut agent2 = MinimaxAgent::new(4);
        let mut state = GameState::initial();
        let mut turn = 0;

        while !state.is_terminal() && turn < 42 {
            let action = if turn % 2 == 0 {
                agent1.select_action(&state).unwrap()
            } else {
                agent2.select_action(&state).unwrap()
            };
            state = state.apply_move(action).unwrap();
            turn += 1;
        }

        assert!(state.is_terminal(), "Game should complete");
        assert!(state.outcome().is_some());
    }

    #[test]
    fn beats_random_agent() {
        let games_per_color = 10;
        let mut minimax_wins = 0;
        let total = games_per_color * 2;

        for game in 0..total {
            let minimax_color = if game % 2 == 0 { Color::Red } else { Color::Yellow };
            let mut minimax = MinimaxAgent::new(5);
            let mut random = RandomAgent::with_seed(game as u64);
            let mut state = GameState::initial();

            while !state.is_terminal() {
                let action = if state.current_player() == minimax_color {
                    minimax.select_action(&state).unwrap()
                } else {
                    random.select_action(&state).unwrap()
                };
                state = state.apply_move(action).unwrap();
            }

            if state.outcome() == Some(GameOutcome::Winner(minimax_color)) {
                minimax_wins += 1;
            }
        }

        let win_rate = minimax_wins as f64 / total as f64;
        assert!(
            win_rate > 0.80,
            "Minimax should beat random >80% of the time, got {:.0}% ({minimax_wins}/{total})",
            win_rate * 100.0
        );
    }
}
