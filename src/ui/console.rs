use std::fmt::Write;

use crate::game::{Board, Cell, COLS};

const EMPTY_GLYPH: char = '_';

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => EMPTY_GLYPH,
        Cell::Cross => 'X',
        Cell::Nought => 'O',
    }
}

/// Plain-text board: one line per row with its index on the right, a blank
/// line between rows, and a column index footer.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    for (row, cells) in board.cells().iter().enumerate() {
        for &cell in cells {
            let _ = write!(out, "{:<3}", glyph(cell));
        }
        let _ = writeln!(out, " {row}");
        out.push('\n');
    }

    for col in 0..COLS {
        let _ = write!(out, "{col:<3}");
    }
    out.truncate(out.trim_end().len());
    out.push('\n');

    out
}
