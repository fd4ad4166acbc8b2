//! The 8x8 grid and its starting layout

use super::types::{Piece, PieceColor, PieceType, Position};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// 8x8 grid of optional pieces. Owned exclusively by the game session;
/// everything else gets read-only access.
#[derive(Debug, Clone)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard initial setup: pawns on rows 1 and 6, the back ranks on row 0
    /// (Black) and row 7 (White).
    pub fn new() -> Self {
        let mut squares = [[None; 8]; 8];
        for col in 0..8 {
            squares[0][col] = Some(Piece::new(BACK_RANK[col], PieceColor::Black));
            squares[1][col] = Some(Piece::new(PieceType::Pawn, PieceColor::Black));
            squares[6][col] = Some(Piece::new(PieceType::Pawn, PieceColor::White));
            squares[7][col] = Some(Piece::new(BACK_RANK[col], PieceColor::White));
        }
        Self { squares }
    }

    /// Piece on `pos`, or `None` for an empty square. Off-board positions
    /// also return `None`; callers that must tell "off-board" apart from
    /// "empty" check [`Position::is_on_board`] first.
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        if !pos.is_on_board() {
            return None;
        }
        self.squares[pos.row as usize][pos.col as usize].as_ref()
    }

    /// Read-only view of the grid, rank 8 first.
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    /// Lifts the occupant of `from` onto `to`, marking it moved and
    /// overwriting whatever stood there. Both positions must already be
    /// validated; mutation is reserved to the session.
    pub(crate) fn move_piece(&mut self, from: Position, to: Position) {
        if let Some(mut piece) = self.squares[from.row as usize][from.col as usize].take() {
            piece.has_moved = true;
            self.squares[to.row as usize][to.col as usize] = Some(piece);
        }
    }
}

#[cfg(test)]
impl Board {
    /// Board with no pieces, for setting up test positions.
    pub(crate) fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub(crate) fn put(&mut self, pos: Position, piece: Piece) {
        self.squares[pos.row as usize][pos.col as usize] = Some(piece);
    }
}
