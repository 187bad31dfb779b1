//! Move selection: the alpha-beta search, its board heuristic, and a random
//! baseline, all behind the [`Agent`] trait.

mod agent;
pub mod alphabeta;
pub mod heuristic;
mod random;

pub use agent::Agent;
pub use alphabeta::{choose_move, AlphaBeta, AlphaBetaAgent, SearchConfig, SearchStats};
pub use heuristic::{AlignmentHeuristic, Heuristic, HeuristicWeights};
pub use random::RandomAgent;
