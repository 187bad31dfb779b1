use super::{Board, Player};

/// Result of inspecting a board for a finished game.
///
/// A full board with no four-in-a-row is `Undecided`; callers that need draw
/// detection check [`Board::is_full`] themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Undecided,
    Winner(Player),
}

impl Outcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Undecided => None,
            Outcome::Winner(player) => Some(player),
        }
    }

    pub fn is_decided(self) -> bool {
        matches!(self, Outcome::Winner(_))
    }
}

/// Classify a board. Cross is checked first, so a (search-only) board where
/// both sides show four in a row is reported as a Cross win.
pub fn classify(board: &Board) -> Outcome {
    if board.has_won(Player::Cross) {
        Outcome::Winner(Player::Cross)
    } else if board.has_won(Player::Nought) {
        Outcome::Winner(Player::Nought)
    } else {
        Outcome::Undecided
    }
}
