//! Pure movement legality predicates
//!
//! Geometry and occupancy only: turn order and origin ownership are the
//! session's concern, and check detection is not implemented anywhere in the
//! engine.

use crate::board::{Board, Piece, PieceColor, PieceType, Position};

/// Whether `piece`, standing on `from`, may move to `to`.
pub fn is_legal_move(board: &Board, piece: &Piece, from: Position, to: Position) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    // A same-color occupant on the destination is illegal for every piece
    // type, before any shape rule.
    if let Some(target) = board.piece_at(to) {
        if target.color == piece.color {
            return false;
        }
    }

    let row_diff = to.row - from.row;
    let col_diff = to.col - from.col;

    match piece.piece_type {
        PieceType::Pawn => is_legal_pawn_move(board, piece.color, from, to),
        PieceType::Rook => is_rook_shape(row_diff, col_diff) && path_is_clear(board, from, to),
        PieceType::Knight => is_knight_shape(row_diff, col_diff),
        PieceType::Bishop => is_bishop_shape(row_diff, col_diff) && path_is_clear(board, from, to),
        PieceType::Queen => {
            (is_rook_shape(row_diff, col_diff) || is_bishop_shape(row_diff, col_diff))
                && path_is_clear(board, from, to)
        }
        // One square in any direction; castling is not implemented.
        PieceType::King => row_diff.abs() <= 1 && col_diff.abs() <= 1,
    }
}

fn is_legal_pawn_move(board: &Board, color: PieceColor, from: Position, to: Position) -> bool {
    let forward = color.forward();
    let row_diff = to.row - from.row;
    let col_diff = (to.col - from.col).abs();
    let target = board.piece_at(to);

    // Straight advance, never a capture.
    if col_diff == 0 && target.is_none() {
        if row_diff == forward {
            return true;
        }
        // TODO: decide whether the double step should also require the
        // passed-over square to be empty; today only the destination is
        // checked.
        if row_diff == 2 * forward && from.row == color.pawn_start_row() {
            return true;
        }
    }

    // Single-step diagonal, only as a capture. En passant is not implemented.
    col_diff == 1 && row_diff == forward && target.is_some_and(|t| t.color != color)
}

fn is_rook_shape(row_diff: i8, col_diff: i8) -> bool {
    (row_diff == 0 && col_diff != 0) || (row_diff != 0 && col_diff == 0)
}

fn is_knight_shape(row_diff: i8, col_diff: i8) -> bool {
    (row_diff.abs() == 2 && col_diff.abs() == 1) || (row_diff.abs() == 1 && col_diff.abs() == 2)
}

fn is_bishop_shape(row_diff: i8, col_diff: i8) -> bool {
    row_diff != 0 && row_diff.abs() == col_diff.abs()
}

/// Walks the unit-step line strictly between `from` and `to`; any occupied
/// intermediate square fails the check. Never called for knight moves, which
/// cannot be blocked.
fn path_is_clear(board: &Board, from: Position, to: Position) -> bool {
    let row_step = (to.row - from.row).signum();
    let col_step = (to.col - from.col).signum();

    let mut pos = Position::new(from.row + row_step, from.col + col_step);
    while pos != to {
        if board.piece_at(pos).is_some() {
            return false;
        }
        pos = Position::new(pos.row + row_step, pos.col + col_step);
    }
    true
}
