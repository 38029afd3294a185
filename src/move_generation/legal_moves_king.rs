//! King pseudo-legal move generation, including castling.
//!
//! Castling requires the rights flag, king and rook on their original
//! squares, empty squares between them, and a king path that neither starts
//! from, passes through, nor lands on an attacked square.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::{is_square_attacked, KING_STEPS};
use crate::move_generation::legal_move_shared::offset_square;
use crate::move_generation::move_generator::ChessMove;

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;

    for from in 0..64u8 {
        let Some(piece) = game_state.board[from as usize] else {
            continue;
        };
        if piece.color != side || piece.kind != PieceKind::King {
            continue;
        }

        for (row_delta, col_delta) in KING_STEPS {
            let Some(to) = offset_square(from, row_delta, col_delta) else {
                continue;
            };
            match game_state.board[to as usize] {
                Some(target) if target.color == side => {}
                _ => out.push(ChessMove::new(from, to)),
            }
        }

        generate_castling_moves(game_state, out, from);
    }
}

struct CastlingLane {
    right: CastlingRights,
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    empty: &'static [Square],
    king_path: &'static [Square],
}

// Cell indices: rank 8 occupies 0..8, rank 1 occupies 56..64.
const CASTLING_LANES: [CastlingLane; 4] = [
    CastlingLane {
        right: CASTLE_WHITE_KINGSIDE,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        empty: &[61, 62],
        king_path: &[61, 62],
    },
    CastlingLane {
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        empty: &[57, 58, 59],
        king_path: &[59, 58],
    },
    CastlingLane {
        right: CASTLE_BLACK_KINGSIDE,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        empty: &[5, 6],
        king_path: &[5, 6],
    },
    CastlingLane {
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        empty: &[1, 2, 3],
        king_path: &[3, 2],
    },
];

fn generate_castling_moves(game_state: &GameState, out: &mut Vec<ChessMove>, king_from: Square) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();

    // Cannot castle out of check.
    if is_square_attacked(game_state, king_from, enemy) {
        return;
    }

    for lane in &CASTLING_LANES {
        let lane_color = if lane.right & (CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE) != 0 {
            Color::White
        } else {
            Color::Black
        };
        if lane_color != side || lane.king_from != king_from {
            continue;
        }
        if game_state.castling_rights & lane.right == 0 {
            continue;
        }
        if !matches!(
            game_state.board[lane.rook_from as usize],
            Some(piece) if piece.kind == PieceKind::Rook && piece.color == side
        ) {
            continue;
        }
        if lane
            .empty
            .iter()
            .any(|&square| game_state.board[square as usize].is_some())
        {
            continue;
        }
        if lane
            .king_path
            .iter()
            .any(|&square| is_square_attacked(game_state, square, enemy))
        {
            continue;
        }

        out.push(ChessMove::new(lane.king_from, lane.king_to));
    }
}
