//! Pawn pseudo-legal move generation: pushes, double pushes from the home
//! rank, diagonal captures, en-passant captures, and promotions.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::offset_square;
use crate::move_generation::move_generator::ChessMove;

pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;
    // White pawns advance toward rank 8, which is row 0.
    let (row_delta, home_row, promotion_row) = match side {
        Color::White => (-1i8, 6u8, 0u8),
        Color::Black => (1i8, 1u8, 7u8),
    };

    for from in 0..64u8 {
        let Some(piece) = game_state.board[from as usize] else {
            continue;
        };
        if piece.color != side || piece.kind != PieceKind::Pawn {
            continue;
        }

        if let Some(to) = offset_square(from, row_delta, 0) {
            if game_state.board[to as usize].is_none() {
                push_pawn_move(from, to, promotion_row, out);

                if from / 8 == home_row {
                    if let Some(two) = offset_square(from, row_delta * 2, 0) {
                        if game_state.board[two as usize].is_none() {
                            out.push(ChessMove::new(from, two));
                        }
                    }
                }
            }
        }

        for col_delta in [-1, 1] {
            let Some(to) = offset_square(from, row_delta, col_delta) else {
                continue;
            };
            match game_state.board[to as usize] {
                Some(target) if target.color != side => {
                    push_pawn_move(from, to, promotion_row, out);
                }
                None if game_state.en_passant_square == Some(to) => {
                    out.push(ChessMove::new(from, to));
                }
                _ => {}
            }
        }
    }
}

#[inline]
fn push_pawn_move(from: Square, to: Square, promotion_row: u8, out: &mut Vec<ChessMove>) {
    if to / 8 == promotion_row {
        for promotion in PROMOTION_CHOICES {
            out.push(ChessMove::with_promotion(from, to, promotion));
        }
    } else {
        out.push(ChessMove::new(from, to));
    }
}
