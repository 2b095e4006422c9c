//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view from the cell arena for debugging,
//! tests, and diagnostics in text environments.

use crate::board::board_graph::Board;
use crate::board::board_types::{CellShade, Coordinate, Side, BOARD_COLS, BOARD_ROWS};

/// Render the board to a string for terminal output.
///
/// Rows are printed with `y = 7` (Black's target rank) at the top, prefixed
/// and suffixed with their `y` value. `b`/`w` are pieces, `·` is an empty
/// dark cell, a space is an unplayable light cell.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for y in (0..BOARD_ROWS).rev() {
        out.push(char::from(b'0' + y as u8));
        out.push(' ');

        for x in 0..BOARD_COLS {
            let coordinate = Coordinate::new(x, y);
            out.push(cell_glyph(board, coordinate));
            if x < BOARD_COLS - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + y as u8));
        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7");

    out
}

fn cell_glyph(board: &Board, coordinate: Coordinate) -> char {
    match board.piece_at(coordinate) {
        Some(piece_id) => match board.piece(piece_id).side {
            Side::Black => 'b',
            Side::White => 'w',
        },
        None => match CellShade::of(coordinate) {
            CellShade::Dark => '·',
            CellShade::Light => ' ',
        },
    }
}
