//! Chess rules and state engine
//!
//! Board occupancy, per-piece movement legality, move history in an
//! engine-internal notation, and a session state machine driven by notation
//! tokens. Transport layers and natural-language resolvers live outside this
//! crate and consume it through [`GameSession`] (or [`SharedSession`] when
//! one game is shared across callers) and the [`MoveResolver`] seam.
//!
//! ```
//! use chess_engine::GameSession;
//!
//! let mut game = GameSession::new();
//! assert!(game.apply_move("e2e4"));
//! assert!(!game.apply_move("e2e4")); // not White's turn anymore
//! assert_eq!(game.history(), ["e2e4"]);
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod notation;
pub mod resolver;
pub mod rules;

pub use board::{Board, Piece, PieceColor, PieceType, Position};
pub use error::{MoveError, Result};
pub use game::{GameSession, GameStateSnapshot, GameStatus, SharedSession};
pub use notation::{MoveInput, ParsedMove};
pub use resolver::MoveResolver;
