use crate::error::SearchError;
use crate::game::GameState;

/// Universal interface for computer players.
pub trait Agent {
    /// Select a column for the player to move in `state`.
    ///
    /// Fails with [`SearchError::NoPlayableColumns`] when the board is full;
    /// callers are expected to stop asking once the game is over.
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
