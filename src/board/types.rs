//! Piece and square vocabulary

use serde::{Deserialize, Serialize};

/// Side of the game. White moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opponent(&self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row delta of a single forward pawn step. Row 0 is rank 8, so White
    /// advances toward smaller rows.
    pub fn forward(&self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Row holding this color's pawns in the initial setup.
    pub fn pawn_start_row(&self) -> i8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::White => "white",
            PieceColor::Black => "black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    /// Letter prefix used in move tokens. Pawns have none.
    pub fn letter(&self) -> &'static str {
        match self {
            PieceType::Pawn => "",
            PieceType::Rook => "R",
            PieceType::Knight => "N",
            PieceType::Bishop => "B",
            PieceType::Queen => "Q",
            PieceType::King => "K",
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'R' => Some(PieceType::Rook),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }
}

/// A piece standing on the board.
///
/// `has_moved` is tracked for future castling and double-step gating; the
/// current rules never consult it (the pawn double step reads the start row
/// instead) and it stays out of the serialized state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub piece_type: PieceType,
    pub color: PieceColor,
    #[serde(skip)]
    pub has_moved: bool,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: PieceColor) -> Self {
        Self {
            piece_type,
            color,
            has_moved: false,
        }
    }
}

/// Board coordinates. Row 0 is rank 8 (Black's back rank), row 7 is rank 1;
/// column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Both coordinates in [0, 7]. Out-of-range positions are rejected by
    /// every consumer, never clamped.
    pub fn is_on_board(&self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }
}
