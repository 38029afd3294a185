//! Terminal-state classification for the side to move.

use crate::game_state::chess_types::{Color, GameStatus};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};

/// Classify the position from the perspective of the side to move: no legal
/// moves means checkmate (king attacked) or stalemate (king safe); otherwise
/// the position is check or simply in progress. Draw rules beyond stalemate
/// (repetition, fifty moves, bare material) are a shell concern.
pub fn game_status(game_state: &GameState) -> MoveGenResult<GameStatus> {
    let legal_moves = LegalMoveGenerator.generate_legal_moves(game_state)?;
    let in_check = is_king_in_check(game_state, game_state.side_to_move);

    let status = if legal_moves.is_empty() {
        if in_check {
            match game_state.side_to_move {
                Color::White => GameStatus::WhiteCheckmated,
                Color::Black => GameStatus::BlackCheckmated,
            }
        } else {
            GameStatus::Stalemate
        }
    } else if in_check {
        GameStatus::Check
    } else {
        GameStatus::InProgress
    };

    Ok(status)
}
