//! Rook pseudo-legal move generation.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{generate_ray_moves, ORTHOGONAL_DIRECTIONS};
use crate::move_generation::move_generator::ChessMove;

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;

    for from in 0..64u8 {
        let Some(piece) = game_state.board[from as usize] else {
            continue;
        };
        if piece.color != side || piece.kind != PieceKind::Rook {
            continue;
        }
        generate_ray_moves(game_state, from, side, &ORTHOGONAL_DIRECTIONS, out);
    }
}
