//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, applies each candidate,
//! and filters out moves that leave the moving side's own king in check. A
//! move is legal iff its fully-applied successor position does not expose the
//! mover's king.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, normalize_promotion};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{
    ChessMove, GeneratedMove, MoveGenResult, MoveGenerationError, MoveGenerator,
};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
        let mut pseudo = Vec::<ChessMove>::with_capacity(128);

        generate_pawn_moves(game_state, &mut pseudo);
        generate_knight_moves(game_state, &mut pseudo);
        generate_bishop_moves(game_state, &mut pseudo);
        generate_rook_moves(game_state, &mut pseudo);
        generate_queen_moves(game_state, &mut pseudo);
        generate_king_moves(game_state, &mut pseudo);

        let mut legal = Vec::<GeneratedMove>::with_capacity(pseudo.len());
        for chess_move in pseudo {
            let next = apply_move(game_state, chess_move).map_err(|x| {
                MoveGenerationError::InvalidState(format!("apply_move failed: {x}"))
            })?;

            // Illegal if own king is in check after the move.
            if is_king_in_check(&next, game_state.side_to_move) {
                continue;
            }

            legal.push(GeneratedMove {
                chess_move,
                game_after_move: next,
            });
        }

        Ok(legal)
    }
}

/// Standalone legality query for a single candidate move.
pub fn is_legal_move(game_state: &GameState, chess_move: ChessMove) -> bool {
    let candidate = normalize_promotion(game_state, chess_move);
    match LegalMoveGenerator.generate_legal_moves(game_state) {
        Ok(moves) => moves
            .iter()
            .any(|generated| generated.chess_move == candidate),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_legal_move, LegalMoveGenerator};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::move_generation::move_generator::{ChessMove, MoveGenerator};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(coord: &str) -> u8 {
        algebraic_to_square(coord).expect("square should parse")
    }

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let game = GameState::new_game();
        let moves = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("move generation should succeed");
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn every_reply_to_check_resolves_it() {
        // White king e1 checked by the rook on e8.
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/3P1P2/3QKB2 w - - 0 1")
            .expect("FEN should parse");
        assert!(is_king_in_check(&game, game.side_to_move));

        let moves = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("move generation should succeed");
        assert!(!moves.is_empty());
        for generated in &moves {
            assert!(
                !is_king_in_check(&generated.game_after_move, game.side_to_move),
                "move {:?} leaves the king in check",
                generated.chess_move
            );
        }
    }

    #[test]
    fn pinned_piece_cannot_expose_the_king() {
        // The e4 rook is pinned to the king by the e8 rook.
        let game =
            GameState::from_fen("4r3/8/8/8/4R3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_legal_move(&game, ChessMove::new(sq("e4"), sq("a4"))));
        assert!(is_legal_move(&game, ChessMove::new(sq("e4"), sq("e8"))));
        assert!(is_legal_move(&game, ChessMove::new(sq("e4"), sq("e5"))));
    }

    #[test]
    fn is_legal_move_rejects_pattern_violations() {
        let game = GameState::new_game();
        assert!(is_legal_move(&game, ChessMove::new(sq("e2"), sq("e4"))));
        assert!(!is_legal_move(&game, ChessMove::new(sq("e2"), sq("e5"))));
        assert!(!is_legal_move(&game, ChessMove::new(sq("d1"), sq("d3"))));
    }
}
