//! Error types for chess-engine

use thiserror::Error;

/// Why a move was rejected.
///
/// Every variant is a recoverable rejection; callers that only care about
/// success use the boolean [`GameSession::apply_move`] surface and never see
/// these. Bad input never panics the engine.
///
/// [`GameSession::apply_move`]: crate::game::GameSession::apply_move
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("unparsable move token: {0:?}")]
    Unparsable(String),

    #[error("square outside the board")]
    OutOfRange,

    #[error("no piece on {0}")]
    EmptyOrigin(String),

    #[error("piece does not belong to the side to move")]
    WrongTurn,

    #[error("move violates the piece's movement rules")]
    Illegal,
}

pub type Result<T> = std::result::Result<T, MoveError>;
