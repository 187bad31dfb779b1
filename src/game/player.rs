use super::board::Cell;

/// The two sides. Cross moves first in the source game and is the side the
/// search maximizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Cross,
    Nought,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Cross => Cell::Cross,
            Player::Nought => Cell::Nought,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Cross => "Cross",
            Player::Nought => "Nought",
        }
    }

    /// Flip a Cross-perspective score so that larger is better for `self`.
    pub fn orient(self, score: i32) -> i32 {
        match self {
            Player::Cross => score,
            Player::Nought => -score,
        }
    }
}
