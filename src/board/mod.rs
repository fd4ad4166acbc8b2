//! Board model: the 8x8 grid and its piece vocabulary

mod grid;
mod types;

pub use grid::Board;
pub use types::{Piece, PieceColor, PieceType, Position};
