use log::debug;

use crate::error::SearchError;
use crate::game::{classify, Board, Outcome, Player};

use super::agent::Agent;
use super::heuristic::{AlignmentHeuristic, Heuristic};

/// Value of a board Cross has won. Heuristic scores stay strictly inside
/// `(-INFINITY, INFINITY)`.
pub const INFINITY: i32 = i32::MAX;

/// Value of a full board nobody has won.
pub const DRAW_SCORE: i32 = 0;

/// Plies searched when no depth is configured.
pub const DEFAULT_DEPTH: usize = 5;

/// Search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched, counting the root move. Boards this deep are scored by
    /// the heuristic.
    pub depth: usize,
    /// Alpha-beta cutoffs. Turning them off only changes how much work is
    /// done, never the chosen move.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            pruning: true,
        }
    }
}

/// Work counters for the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes below the root that were visited
    pub nodes: u64,
    /// Nodes scored by the heuristic
    pub leaves: u64,
    /// Times the remaining siblings were skipped
    pub cutoffs: u64,
    /// Cross-perspective value of the chosen move
    pub score: i32,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Values are always from Cross's perspective: Cross nodes maximize, Nought
/// nodes minimize. Each hypothetical move is played on a copy of the parent
/// board, so sibling branches never share a grid.
pub struct AlphaBeta {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
    stats: SearchStats,
}

impl AlphaBeta {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_heuristic(config, Box::new(AlignmentHeuristic::default()))
    }

    pub fn with_heuristic(config: SearchConfig, heuristic: Box<dyn Heuristic>) -> Self {
        AlphaBeta {
            config,
            heuristic,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Pick the best column for `player` on `board`.
    ///
    /// Every legal move is tried in ascending column order; the first move
    /// with the strictly best value wins ties. If every move is equally bad
    /// the first legal column is returned.
    pub fn choose_move(&mut self, board: &Board, player: Player) -> Result<usize, SearchError> {
        self.stats = SearchStats::default();

        let moves = board.available_moves();
        let mut best_move = *moves.first().ok_or(SearchError::NoLegalMoves)?;
        let mut best_value = -INFINITY;
        let mut best_score = player.orient(best_value);

        let mut alpha = -INFINITY;
        let mut beta = INFINITY;

        for &col in &moves {
            let mut next = *board;
            next.drop_piece(col, player);
            let value = self.value(&next, alpha, beta, player.other(), 1);

            let oriented = player.orient(value);
            if oriented > best_value {
                best_value = oriented;
                best_move = col;
                best_score = value;
            }

            match player {
                Player::Cross => alpha = alpha.max(value),
                Player::Nought => beta = beta.min(value),
            }
        }

        self.stats.score = best_score;
        debug!(
            "{} plays column {} (score {}, {} nodes, {} leaves, {} cutoffs)",
            player.name(),
            best_move,
            best_score,
            self.stats.nodes,
            self.stats.leaves,
            self.stats.cutoffs
        );

        Ok(best_move)
    }

    fn value(&mut self, board: &Board, alpha: i32, beta: i32, to_move: Player, depth: usize) -> i32 {
        match to_move {
            Player::Cross => self.max_value(board, alpha, beta, depth),
            Player::Nought => self.min_value(board, alpha, beta, depth),
        }
    }

    /// Value of a node that needs no expansion: decided, at the horizon, or full.
    fn settled_value(&mut self, board: &Board, depth: usize) -> Option<i32> {
        match classify(board) {
            Outcome::Winner(Player::Cross) => return Some(INFINITY),
            Outcome::Winner(Player::Nought) => return Some(-INFINITY),
            Outcome::Undecided => {}
        }

        if depth >= self.config.depth {
            self.stats.leaves += 1;
            return Some(self.heuristic.evaluate(board));
        }

        if board.is_full() {
            return Some(DRAW_SCORE);
        }

        None
    }

    fn max_value(&mut self, board: &Board, mut alpha: i32, beta: i32, depth: usize) -> i32 {
        self.stats.nodes += 1;
        if let Some(value) = self.settled_value(board, depth) {
            return value;
        }

        let mut best = -INFINITY;
        for col in board.available_moves() {
            let mut next = *board;
            next.drop_piece(col, Player::Cross);
            best = best.max(self.min_value(&next, alpha, beta, depth + 1));

            if self.config.pruning && best >= beta {
                self.stats.cutoffs += 1;
                return best;
            }
            alpha = alpha.max(best);
        }

        best
    }

    fn min_value(&mut self, board: &Board, alpha: i32, mut beta: i32, depth: usize) -> i32 {
        self.stats.nodes += 1;
        if let Some(value) = self.settled_value(board, depth) {
            return value;
        }

        let mut best = INFINITY;
        for col in board.available_moves() {
            let mut next = *board;
            next.drop_piece(col, Player::Nought);
            best = best.min(self.max_value(&next, alpha, beta, depth + 1));

            if self.config.pruning && best <= alpha {
                self.stats.cutoffs += 1;
                return best;
            }
            beta = beta.min(best);
        }

        best
    }
}

/// Choose a move with the default depth and heuristic.
pub fn choose_move(board: &Board, player: Player) -> Result<usize, SearchError> {
    AlphaBeta::new(SearchConfig::default()).choose_move(board, player)
}

/// Agent backed by [`AlphaBeta`].
pub struct AlphaBetaAgent {
    search: AlphaBeta,
}

impl AlphaBetaAgent {
    pub fn new(config: SearchConfig) -> Self {
        AlphaBetaAgent {
            search: AlphaBeta::new(config),
        }
    }

    pub fn with_heuristic(config: SearchConfig, heuristic: Box<dyn Heuristic>) -> Self {
        AlphaBetaAgent {
            search: AlphaBeta::with_heuristic(config, heuristic),
        }
    }

    pub fn last_stats(&self) -> SearchStats {
        self.search.stats()
    }
}

impl Agent for AlphaBetaAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, SearchError> {
        self.search.choose_move(board, player)
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }
}
