//! Knight pseudo-legal move generation.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::KNIGHT_JUMPS;
use crate::move_generation::legal_move_shared::offset_square;
use crate::move_generation::move_generator::ChessMove;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;

    for from in 0..64u8 {
        let Some(piece) = game_state.board[from as usize] else {
            continue;
        };
        if piece.color != side || piece.kind != PieceKind::Knight {
            continue;
        }

        for (row_delta, col_delta) in KNIGHT_JUMPS {
            let Some(to) = offset_square(from, row_delta, col_delta) else {
                continue;
            };
            match game_state.board[to as usize] {
                Some(target) if target.color == side => {}
                _ => out.push(ChessMove::new(from, to)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::ChessMove;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(coord: &str) -> u8 {
        algebraic_to_square(coord).expect("square should parse")
    }

    #[test]
    fn start_position_knights_have_four_moves() {
        let game = GameState::new_game();
        let mut moves = Vec::new();
        generate_knight_moves(&game, &mut moves);
        assert_eq!(moves.len(), 4);
        assert!(moves.contains(&ChessMove::new(sq("b1"), sq("a3"))));
        assert!(moves.contains(&ChessMove::new(sq("g1"), sq("f3"))));
    }

    #[test]
    fn central_knight_reaches_eight_squares() {
        let game = GameState::from_fen("4k3/8/8/3N4/8/8/8/4K3 w - - 0 1").expect("FEN parse");
        let mut moves = Vec::new();
        generate_knight_moves(&game, &mut moves);
        assert_eq!(moves.len(), 8);
    }
}
