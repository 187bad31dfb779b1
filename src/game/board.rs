use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 12;

/// Number of aligned pieces that wins the game.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Cross,
    Nought,
}

impl Cell {
    /// Swap the two piece colors, leaving empty cells alone.
    pub fn swapped(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Cross => Cell::Nought,
            Cell::Nought => Cell::Cross,
        }
    }
}

/// The four alignment orientations scanned by win detection and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right (\)
    DownRight,
    /// Top-right to bottom-left (/)
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Row and column step between consecutive cells of a window.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }

    /// Every starting cell from which a window of `len` cells stays on the board.
    pub fn window_starts(self, len: usize) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.step();
        let rows = if dr == 0 { 0..ROWS } else { 0..ROWS + 1 - len };
        let cols = match dc {
            0 => 0..COLS,
            1 => 0..COLS + 1 - len,
            _ => len - 1..COLS,
        };
        rows.flat_map(move |row| cols.clone().map(move |col| (row, col)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Read-only view of the whole grid, top row first.
    pub fn cells(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// A column is playable while it is on the board and its top cell is empty.
    pub fn is_playable(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col] == Cell::Empty
    }

    /// Playable columns in ascending order. Empty once the board is full.
    pub fn available_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_playable(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_playable(col))
    }

    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Row a piece dropped in `col` would settle on, or `None` if the column
    /// cannot take another piece.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if !self.is_playable(col) {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// Dropping into a full or out-of-range column changes nothing and
    /// returns `None`; check [`Board::is_playable`] first.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Option<usize> {
        let row = self.landing_row(col)?;
        self.cells[row][col] = player.to_cell();
        Some(row)
    }

    /// True if the `len` cells starting at (`row`, `col`) along `direction`
    /// all hold `cell`. The start must come from [`Direction::window_starts`].
    pub fn window_is(
        &self,
        direction: Direction,
        row: usize,
        col: usize,
        len: usize,
        cell: Cell,
    ) -> bool {
        let (dr, dc) = direction.step();
        (0..len as isize).all(|i| {
            let r = (row as isize + dr * i) as usize;
            let c = (col as isize + dc * i) as usize;
            self.cells[r][c] == cell
        })
    }

    /// Count the windows of `len` cells along `direction` uniformly filled with `cell`.
    pub fn count_windows(&self, direction: Direction, len: usize, cell: Cell) -> usize {
        direction
            .window_starts(len)
            .filter(|&(row, col)| self.window_is(direction, row, col, len, cell))
            .count()
    }

    fn has_four(&self, direction: Direction, player: Player) -> bool {
        let cell = player.to_cell();
        direction
            .window_starts(WIN_LENGTH)
            .any(|(row, col)| self.window_is(direction, row, col, WIN_LENGTH, cell))
    }

    pub fn has_four_in_a_row(&self, player: Player) -> bool {
        self.has_four(Direction::Horizontal, player)
    }

    pub fn has_four_in_a_column(&self, player: Player) -> bool {
        self.has_four(Direction::Vertical, player)
    }

    /// Both diagonal orientations.
    pub fn has_four_diagonal(&self, player: Player) -> bool {
        self.has_four(Direction::DownRight, player) || self.has_four(Direction::DownLeft, player)
    }

    pub fn has_won(&self, player: Player) -> bool {
        self.has_four_in_a_row(player)
            || self.has_four_in_a_column(player)
            || self.has_four_diagonal(player)
    }

    /// The same position with every Cross and Nought piece exchanged.
    pub fn mirrored(&self) -> Board {
        let mut cells = self.cells;
        for cell in cells.iter_mut().flatten() {
            *cell = cell.swapped();
        }
        Board { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::testing::random_line;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn drop_all(board: &mut Board, moves: &[(usize, Player)]) {
        for &(col, player) in moves {
            board.drop_piece(col, player).unwrap();
        }
    }

    /// Brute-force reference: try every cell and every direction, bounds-checked.
    fn any_uniform_window(board: &Board, player: Player) -> bool {
        let cell = player.to_cell();
        for row in 0..ROWS as isize {
            for col in 0..COLS as isize {
                for direction in Direction::ALL {
                    let (dr, dc) = direction.step();
                    let fits = (0..4).all(|i| {
                        let r = row + dr * i;
                        let c = col + dc * i;
                        r >= 0
                            && c >= 0
                            && r < ROWS as isize
                            && c < COLS as isize
                            && board.get(r as usize, c as usize) == cell
                    });
                    if fits {
                        return true;
                    }
                }
            }
        }
        false
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_fresh_board_offers_every_column() {
        let board = Board::new();
        assert_eq!(board.available_moves(), (0..COLS).collect::<Vec<_>>());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        let row = board.drop_piece(3, Player::Cross).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::Cross);

        let row = board.drop_piece(3, Player::Nought).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Nought);
    }

    #[test]
    fn test_landing_row_tracks_column_height() {
        let mut board = Board::new();
        assert_eq!(board.landing_row(11), Some(ROWS - 1));
        for expected in (0..ROWS).rev() {
            assert_eq!(board.landing_row(11), Some(expected));
            board.drop_piece(11, Player::Nought).unwrap();
        }
        assert_eq!(board.landing_row(11), None);
        assert_eq!(board.landing_row(COLS), None);
    }

    #[test]
    fn test_full_column_drop_is_noop() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, Player::Cross).unwrap();
        }
        let before = board;

        assert!(!board.is_playable(0));
        assert_eq!(board.drop_piece(0, Player::Nought), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_range_drop_is_noop() {
        let mut board = Board::new();
        assert!(!board.is_playable(COLS));
        assert_eq!(board.drop_piece(COLS, Player::Cross), None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_gravity_invariant_holds() {
        let mut board = Board::new();
        let moves = [0, 5, 5, 11, 5, 0, 7, 7, 7, 7, 2];
        for (i, &col) in moves.iter().enumerate() {
            let player = if i % 2 == 0 { Player::Cross } else { Player::Nought };
            board.drop_piece(col, player).unwrap();
        }
        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if board.get(row, col) != Cell::Empty {
                    assert_ne!(board.get(row + 1, col), Cell::Empty, "floating piece at ({row}, {col})");
                }
            }
        }
    }

    #[test]
    fn test_column_scenario() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.drop_piece(0, Player::Cross).unwrap();
        }
        assert!(!board.has_four_in_a_column(Player::Cross));

        for placed in 3..ROWS {
            assert!(board.available_moves().contains(&0), "column full after {placed} pieces");
            board.drop_piece(0, Player::Cross).unwrap();
        }
        assert!(!board.available_moves().contains(&0));
        assert!(board.has_four_in_a_column(Player::Cross));
    }

    #[test]
    fn test_row_scenario() {
        let mut board = Board::new();
        for col in 0..4 {
            assert!(!board.has_four_in_a_row(Player::Cross));
            board.drop_piece(col, Player::Cross).unwrap();
        }
        assert!(board.has_four_in_a_row(Player::Cross));
        assert!(!board.has_four_in_a_row(Player::Nought));
    }

    #[test]
    fn test_row_win_at_right_edge() {
        let mut board = Board::new();
        for col in COLS - 4..COLS {
            board.drop_piece(col, Player::Nought).unwrap();
        }
        assert!(board.has_won(Player::Nought));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let mut board = Board::new();
        // Builds a / diagonal on columns 8..=11
        drop_all(
            &mut board,
            &[
                (8, Player::Cross),
                (9, Player::Nought),
                (9, Player::Cross),
                (10, Player::Nought),
                (10, Player::Nought),
                (10, Player::Cross),
                (11, Player::Nought),
                (11, Player::Nought),
                (11, Player::Nought),
            ],
        );
        assert!(!board.has_four_diagonal(Player::Cross));
        board.drop_piece(11, Player::Cross).unwrap();
        assert!(board.has_four_diagonal(Player::Cross));
        assert!(board.has_won(Player::Cross));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let mut board = Board::new();
        // Builds a \ diagonal on columns 0..=3
        drop_all(
            &mut board,
            &[
                (3, Player::Nought),
                (2, Player::Cross),
                (2, Player::Nought),
                (1, Player::Cross),
                (1, Player::Cross),
                (1, Player::Nought),
                (0, Player::Cross),
                (0, Player::Cross),
                (0, Player::Cross),
            ],
        );
        assert!(!board.has_four_diagonal(Player::Nought));
        board.drop_piece(0, Player::Nought).unwrap();
        assert!(board.has_four_diagonal(Player::Nought));
    }

    #[test]
    fn test_diagonal_touching_top_row() {
        // / diagonal from (3, 0) to (0, 3)
        let mut board = Board::new();
        for col in 0..4 {
            for _ in 0..(2 + col) {
                board.drop_piece(col, Player::Nought).unwrap();
            }
            board.drop_piece(col, Player::Cross).unwrap();
        }
        assert_eq!(board.get(3, 0), Cell::Cross);
        assert_eq!(board.get(0, 3), Cell::Cross);
        assert!(board.has_four_diagonal(Player::Cross));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::Cross).unwrap();
        }
        assert!(!board.has_won(Player::Cross));
    }

    #[test]
    fn test_has_won_matches_brute_force() {
        // Seeded random games checked against the reference scan after every drop
        let mut rng = StdRng::seed_from_u64(0x9e37_79b9);
        for _ in 0..200 {
            let mut board = Board::new();
            for (col, player) in random_line(&mut rng, 40) {
                board.drop_piece(col, player).unwrap();
                for p in [Player::Cross, Player::Nought] {
                    assert_eq!(board.has_won(p), any_uniform_window(&board, p));
                }
            }
        }
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Player::Cross).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
        assert_eq!(board.piece_count(), ROWS * COLS);
    }

    #[test]
    fn test_window_starts_counts() {
        assert_eq!(Direction::Horizontal.window_starts(4).count(), ROWS * (COLS - 3));
        assert_eq!(Direction::Vertical.window_starts(4).count(), (ROWS - 3) * COLS);
        assert_eq!(Direction::DownRight.window_starts(3).count(), (ROWS - 2) * (COLS - 2));
        assert_eq!(Direction::DownLeft.window_starts(3).count(), (ROWS - 2) * (COLS - 2));
    }

    #[test]
    fn test_mirrored_swaps_colors() {
        let mut board = Board::new();
        board.drop_piece(4, Player::Cross).unwrap();
        board.drop_piece(4, Player::Nought).unwrap();
        let mirrored = board.mirrored();
        assert_eq!(mirrored.get(5, 4), Cell::Nought);
        assert_eq!(mirrored.get(4, 4), Cell::Cross);
        assert_eq!(mirrored.get(3, 4), Cell::Empty);
        assert_eq!(mirrored.mirrored(), board);
    }
}
