//! Move representation and the generator seam used by search and engines.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;

/// A move as a from/to square pair, plus the promotion choice for pawn moves
/// reaching the last rank. Captures, castling, and en passant are implied by
/// the position the move is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    NotImplemented,
    InvalidState(String),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::NotImplemented => {
                write!(f, "move generation is not implemented")
            }
            MoveGenerationError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
        }
    }
}

impl Error for MoveGenerationError {}

/// A legal move together with the position it produces. Each successor is an
/// independent value, so search branches can never alias each other's state.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub chess_move: ChessMove,
    pub game_after_move: GameState,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>>;
}

pub struct NullMoveGenerator;

impl MoveGenerator for NullMoveGenerator {
    fn generate_legal_moves(&self, _game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
        Err(MoveGenerationError::NotImplemented)
    }
}
