use crate::error::SearchError;
use crate::game::{Board, Player};

/// Anything that can pick a column for one side of the board.
pub trait Agent {
    /// Select a playable column for `player`. Fails only when the board has
    /// no playable column left.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
