//! Helpers shared by the per-piece pseudo-legal generators.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::ChessMove;

/// Rook/queen ray directions as (row delta, col delta).
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Bishop/queen ray directions as (row delta, col delta).
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Step from a square by a (row, col) delta, staying on the board.
#[inline]
pub fn offset_square(from: Square, row_delta: i8, col_delta: i8) -> Option<Square> {
    let row = (from / 8) as i8 + row_delta;
    let col = (from % 8) as i8 + col_delta;
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row * 8 + col) as Square)
    } else {
        None
    }
}

/// Walk each ray from `from` until a blocker or the board edge, pushing quiet
/// moves and captures of enemy pieces. Own pieces end the ray exclusively.
pub fn generate_ray_moves(
    game_state: &GameState,
    from: Square,
    mover_color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(row_delta, col_delta) in directions {
        let mut current = from;
        while let Some(to) = offset_square(current, row_delta, col_delta) {
            match game_state.board[to as usize] {
                None => out.push(ChessMove::new(from, to)),
                Some(blocker) => {
                    if blocker.color != mover_color {
                        out.push(ChessMove::new(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
