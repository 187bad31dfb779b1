use crate::game::{Board, Cell, Direction};

/// Length of the partial alignments the default heuristic rewards.
pub const RUN_LENGTH: usize = 3;

/// Trait for scoring a board at the search horizon.
///
/// Scores are signed from Cross's perspective: positive favours Cross,
/// negative favours Nought.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board) -> i32;
}

/// Per-direction weights for a completed length-3 run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Horizontal and vertical runs
    pub straight: i32,
    /// Runs along either diagonal
    pub diagonal: i32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        HeuristicWeights {
            straight: 5,
            diagonal: 2,
        }
    }
}

impl HeuristicWeights {
    fn for_direction(&self, direction: Direction) -> i32 {
        match direction {
            Direction::Horizontal | Direction::Vertical => self.straight,
            Direction::DownRight | Direction::DownLeft => self.diagonal,
        }
    }
}

/// Counts every length-3 window holding a single color. It ignores lone
/// pieces, centre control and whether a run is still open.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlignmentHeuristic {
    weights: HeuristicWeights,
}

impl AlignmentHeuristic {
    pub fn new(weights: HeuristicWeights) -> Self {
        AlignmentHeuristic { weights }
    }

    pub fn weights(&self) -> HeuristicWeights {
        self.weights
    }
}

impl Heuristic for AlignmentHeuristic {
    fn evaluate(&self, board: &Board) -> i32 {
        Direction::ALL
            .iter()
            .map(|&direction| {
                let weight = self.weights.for_direction(direction);
                let cross = board.count_windows(direction, RUN_LENGTH, Cell::Cross) as i32;
                let nought = board.count_windows(direction, RUN_LENGTH, Cell::Nought) as i32;
                weight * (cross - nought)
            })
            .sum()
    }
}
