//! Bishop pseudo-legal move generation.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{generate_ray_moves, DIAGONAL_DIRECTIONS};
use crate::move_generation::move_generator::ChessMove;

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;

    for from in 0..64u8 {
        let Some(piece) = game_state.board[from as usize] else {
            continue;
        };
        if piece.color != side || piece.kind != PieceKind::Bishop {
            continue;
        }
        generate_ray_moves(game_state, from, side, &DIAGONAL_DIRECTIONS, out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn bishop_rays_stop_at_blockers() {
        // Bishop d4; own pawn f6 ends one ray exclusively, enemy pawn b6
        // ends another inclusively.
        let game =
            GameState::from_fen("4k3/8/1p3P2/8/3B4/8/8/4K3 w - - 0 1").expect("FEN parse");
        let mut moves = Vec::new();
        generate_bishop_moves(&game, &mut moves);
        // Rays: c5,b6(capture) + e5 + c3,b2,a1 + e3,f2,g1.
        assert_eq!(moves.len(), 9);
    }
}
