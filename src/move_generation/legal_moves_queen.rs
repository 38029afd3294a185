//! Queen pseudo-legal move generation: bishop and rook rays combined.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{
    generate_ray_moves, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};
use crate::move_generation::move_generator::ChessMove;

pub fn generate_queen_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;

    for from in 0..64u8 {
        let Some(piece) = game_state.board[from as usize] else {
            continue;
        };
        if piece.color != side || piece.kind != PieceKind::Queen {
            continue;
        }
        generate_ray_moves(game_state, from, side, &DIAGONAL_DIRECTIONS, out);
        generate_ray_moves(game_state, from, side, &ORTHOGONAL_DIRECTIONS, out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn lone_queen_covers_both_ray_families() {
        let game = GameState::from_fen("4k3/8/8/3Q4/8/8/8/4K3 w - - 0 1").expect("FEN parse");
        let mut moves = Vec::new();
        generate_queen_moves(&game, &mut moves);
        // 13 diagonal + 14 orthogonal destinations from d5.
        assert_eq!(moves.len(), 27);
    }
}
