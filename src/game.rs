//! Game session: the state machine driving board, turn, and history

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Piece, PieceColor, Position};
use crate::error::{MoveError, Result};
use crate::notation;
use crate::rules;

/// Game termination state.
///
/// Only `Ongoing` is ever produced: checkmate, stalemate, and draw detection
/// are not implemented, and nothing transitions into the other variants. They
/// are reserved for a future detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    Draw,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Draw => "draw",
        }
    }
}

/// Deep copy of a session's state for external consumers. Mutating it never
/// touches the session it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateSnapshot {
    /// 8x8 grid, rank 8 first; within each row, the a-file first.
    pub board: Vec<Vec<Option<Piece>>>,
    pub current_player: PieceColor,
    pub game_status: GameStatus,
    pub move_history: Vec<String>,
}

/// One game's mutable truth: board, side to move, move history, status.
///
/// The session is the sole owner of its board; every mutation funnels through
/// [`apply_move`](Self::apply_move) and [`reset`](Self::reset), and both are
/// all-or-nothing.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    current_player: PieceColor,
    status: GameStatus,
    history: Vec<String>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Fresh game: standard starting board, White to move, empty history.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: PieceColor::White,
            status: GameStatus::Ongoing,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> PieceColor {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Applies a move token, reporting only success. This is the transport
    /// surface; [`try_apply_move`](Self::try_apply_move) exposes the
    /// rejection reason.
    pub fn apply_move(&mut self, token: &str) -> bool {
        match self.try_apply_move(token) {
            Ok(()) => true,
            Err(reason) => {
                debug!(token, %reason, "move rejected");
                false
            }
        }
    }

    /// Parses `token` and applies the move it names.
    pub fn try_apply_move(&mut self, token: &str) -> Result<()> {
        let parsed = notation::parse_token(token)
            .ok_or_else(|| MoveError::Unparsable(token.to_string()))?;
        self.try_apply_positions(parsed.from, parsed.to)
    }

    /// Validates and applies a move given as raw board positions: the single
    /// atomic state transition. On success the piece lands on `to` (marked
    /// moved), `from` is cleared, the engine-formatted token is appended to
    /// history, and the turn flips. Any failure leaves the session untouched.
    pub fn try_apply_positions(&mut self, from: Position, to: Position) -> Result<()> {
        if !from.is_on_board() || !to.is_on_board() {
            return Err(MoveError::OutOfRange);
        }

        let piece = *self
            .board
            .piece_at(from)
            .ok_or_else(|| MoveError::EmptyOrigin(notation::position_to_square(from)))?;

        if piece.color != self.current_player {
            return Err(MoveError::WrongTurn);
        }

        if !rules::is_legal_move(&self.board, &piece, from, to) {
            return Err(MoveError::Illegal);
        }

        self.board.move_piece(from, to);
        let recorded = notation::format_move(piece.piece_type, from, to);
        debug!(token = %recorded, player = piece.color.as_str(), "move applied");
        self.history.push(recorded);
        self.current_player = self.current_player.opponent();
        Ok(())
    }

    /// Discards everything and starts over; indistinguishable from a freshly
    /// constructed session.
    pub fn reset(&mut self) {
        debug!("session reset");
        *self = Self::new();
    }

    /// Deep-copied state for external consumers.
    pub fn state(&self) -> GameStateSnapshot {
        GameStateSnapshot {
            board: self.board.rows().iter().map(|row| row.to_vec()).collect(),
            current_player: self.current_player,
            game_status: self.status,
            move_history: self.history.clone(),
        }
    }
}

/// Handle for the one-session-shared-by-all-callers deployment shape.
///
/// The lock is the session's serialization point: concurrent `apply_move` and
/// `reset` calls cannot interleave their read-modify-write, and a snapshot
/// never observes a half-applied transition.
#[derive(Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(GameSession::new())),
        }
    }

    pub fn apply_move(&self, token: &str) -> bool {
        self.lock().apply_move(token)
    }

    pub fn try_apply_move(&self, token: &str) -> Result<()> {
        self.lock().try_apply_move(token)
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn state(&self) -> GameStateSnapshot {
        self.lock().state()
    }

    fn lock(&self) -> MutexGuard<'_, GameSession> {
        // Transitions are all-or-nothing, so a session behind a poisoned
        // lock is still consistent.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
