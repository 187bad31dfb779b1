//! Board fixtures shared by the test modules.

use rand::rngs::StdRng;
use rand::Rng;

use super::{Board, Player, COLS, ROWS};

/// Piece for the `height`-th drop into `col` of a drawn fill. Rows read
/// XXOOXXOO..., shifted by two columns on alternate rows, which holds no four.
pub fn banded_player(col: usize, height: usize) -> Player {
    if (col / 2 + height) % 2 == 0 {
        Player::Cross
    } else {
        Player::Nought
    }
}

/// Fill each listed column to the top with the banded pattern.
pub fn fill_banded(board: &mut Board, cols: impl IntoIterator<Item = usize>) {
    for col in cols {
        for height in 0..ROWS {
            board.drop_piece(col, banded_player(col, height));
        }
    }
}

/// A full board on which neither color has four in a line.
pub fn drawn_board() -> Board {
    let mut board = Board::new();
    fill_banded(&mut board, 0..COLS);
    board
}

/// Up to `plies` legal drops, alternating colors from Cross.
pub fn random_line(rng: &mut StdRng, plies: usize) -> Vec<(usize, Player)> {
    let mut board = Board::new();
    let mut player = Player::Cross;
    let mut line = Vec::with_capacity(plies);
    for _ in 0..plies {
        let moves = board.available_moves();
        if moves.is_empty() {
            break;
        }
        let col = moves[rng.random_range(0..moves.len())];
        board.drop_piece(col, player);
        line.push((col, player));
        player = player.other();
    }
    line
}

/// The board reached after a [`random_line`] of `plies` drops.
pub fn random_board(rng: &mut StdRng, plies: usize) -> Board {
    let mut board = Board::new();
    for (col, player) in random_line(rng, plies) {
        board.drop_piece(col, player);
    }
    board
}
