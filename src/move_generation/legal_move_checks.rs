//! Attack and check detection.
//!
//! All questions reduce to "is this square attacked by that color", answered
//! by scanning outward from the square: pawn and king contact squares, knight
//! jumps, and slider rays up to the first blocker.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{
    offset_square, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state.board.iter().position(|cell| {
        matches!(cell, Some(piece) if piece.kind == PieceKind::King && piece.color == color)
    }).map(|index| index as Square)
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    // Pawn contact: white pawns attack toward rank 8 (row decreasing), so a
    // white attacker sits one row below the target; black one row above.
    let pawn_row_delta = match attacker_color {
        Color::White => 1,
        Color::Black => -1,
    };
    for col_delta in [-1, 1] {
        if let Some(from) = offset_square(square, pawn_row_delta, col_delta) {
            if is_piece_on(game_state, from, attacker_color, PieceKind::Pawn) {
                return true;
            }
        }
    }

    for (row_delta, col_delta) in KNIGHT_JUMPS {
        if let Some(from) = offset_square(square, row_delta, col_delta) {
            if is_piece_on(game_state, from, attacker_color, PieceKind::Knight) {
                return true;
            }
        }
    }

    for (row_delta, col_delta) in KING_STEPS {
        if let Some(from) = offset_square(square, row_delta, col_delta) {
            if is_piece_on(game_state, from, attacker_color, PieceKind::King) {
                return true;
            }
        }
    }

    if ray_attacker_found(
        game_state,
        square,
        attacker_color,
        &DIAGONAL_DIRECTIONS,
        PieceKind::Bishop,
    ) {
        return true;
    }

    ray_attacker_found(
        game_state,
        square,
        attacker_color,
        &ORTHOGONAL_DIRECTIONS,
        PieceKind::Rook,
    )
}

#[inline]
fn is_piece_on(game_state: &GameState, square: Square, color: Color, kind: PieceKind) -> bool {
    matches!(
        game_state.board[square as usize],
        Some(piece) if piece.color == color && piece.kind == kind
    )
}

fn ray_attacker_found(
    game_state: &GameState,
    square: Square,
    attacker_color: Color,
    directions: &[(i8, i8)],
    slider_kind: PieceKind,
) -> bool {
    for &(row_delta, col_delta) in directions {
        let mut current = square;
        while let Some(next) = offset_square(current, row_delta, col_delta) {
            if let Some(piece) = game_state.board[next as usize] {
                if piece.color == attacker_color
                    && (piece.kind == slider_kind || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}
