//! Timestamped move log.
//!
//! Shells persist the current position string plus one log entry per turn
//! (when it was played, the move, and the resulting position). `MoveLog`
//! owns that bookkeeping: it validates and applies each move against its
//! live position and appends an entry describing the outcome.

use chrono::{DateTime, Utc};

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::normalize_promotion;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{ChessMove, MoveGenerator};
use crate::utils::long_algebraic::chess_move_to_lan;

#[derive(Debug, Clone)]
pub struct MoveLogEntry {
    pub timestamp: DateTime<Utc>,
    /// 1-based half-move counter from the log's initial position.
    pub ply: u16,
    pub lan: String,
    pub fen_after: String,
}

#[derive(Debug, Clone)]
pub struct MoveLog {
    position: GameState,
    entries: Vec<MoveLogEntry>,
}

impl MoveLog {
    pub fn new(initial: GameState) -> Self {
        Self {
            position: initial,
            entries: Vec::new(),
        }
    }

    pub fn from_start() -> Self {
        Self::new(GameState::new_game())
    }

    #[inline]
    pub fn position(&self) -> &GameState {
        &self.position
    }

    #[inline]
    pub fn entries(&self) -> &[MoveLogEntry] {
        &self.entries
    }

    /// Validate and apply `chess_move` to the live position, appending and
    /// returning the new log entry. The position is untouched on rejection.
    pub fn record(&mut self, chess_move: ChessMove) -> Result<&MoveLogEntry, String> {
        let candidate = normalize_promotion(&self.position, chess_move);

        let legal_moves = LegalMoveGenerator
            .generate_legal_moves(&self.position)
            .map_err(|e| e.to_string())?;
        let generated = legal_moves
            .into_iter()
            .find(|generated| generated.chess_move == candidate)
            .ok_or_else(|| {
                format!(
                    "Illegal move {} in position {}",
                    chess_move_to_lan(candidate).unwrap_or_else(|_| "??".to_owned()),
                    self.position.get_fen()
                )
            })?;

        let entry = MoveLogEntry {
            timestamp: Utc::now(),
            ply: (self.entries.len() as u16).saturating_add(1),
            lan: chess_move_to_lan(candidate)?,
            fen_after: generated.game_after_move.get_fen(),
        };

        self.position = generated.game_after_move;
        self.entries.push(entry);
        Ok(self.entries.last().expect("entry was just pushed"))
    }
}
