//! Move application.
//!
//! `apply_move` produces the successor position for a pseudo-legal move:
//! capture removal (including the en-passant victim), the castling rook jump,
//! castling-rights bookkeeping, en-passant target maintenance, promotion, and
//! both clocks. King safety is the caller's concern (`legal_move_generator`
//! filters, `GameState::make_move` validates).

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::ChessMove;

pub fn apply_move(game_state: &GameState, chess_move: ChessMove) -> Result<GameState, String> {
    let ChessMove {
        from,
        to,
        promotion,
    } = chess_move;

    if from > 63 || to > 63 {
        return Err(format!("Move squares out of range: {from}->{to}"));
    }

    let moving_color = game_state.side_to_move;
    let enemy_color = moving_color.opposite();

    let moved_piece = game_state.board[from as usize]
        .ok_or_else(|| format!("No piece on from-square {from}"))?;
    if moved_piece.color != moving_color {
        return Err(format!("Piece on square {from} does not belong to the side to move"));
    }
    if matches!(game_state.board[to as usize], Some(target) if target.color == moving_color) {
        return Err(format!("Destination square {to} holds an own piece"));
    }

    let mut next = game_state.clone();

    let direct_capture = next.board[to as usize].is_some();

    // En-passant capture: a pawn moving diagonally onto the empty recorded
    // target square removes the bypassed pawn behind it.
    let is_en_passant = moved_piece.kind == PieceKind::Pawn
        && !direct_capture
        && game_state.en_passant_square == Some(to)
        && from % 8 != to % 8;
    if is_en_passant {
        let victim = match moving_color {
            Color::White => to + 8,
            Color::Black => to - 8,
        };
        next.board[victim as usize] = None;
    }

    let promotion_row = match moving_color {
        Color::White => 0,
        Color::Black => 7,
    };
    let is_promotion = moved_piece.kind == PieceKind::Pawn && to / 8 == promotion_row;
    if promotion.is_some() && !is_promotion {
        return Err(format!("Promotion piece given for non-promoting move {from}->{to}"));
    }

    let placed_kind = if is_promotion {
        promotion.unwrap_or(PieceKind::Queen)
    } else {
        moved_piece.kind
    };
    next.board[to as usize] = Some(Piece::new(placed_kind, moving_color));
    next.board[from as usize] = None;

    // Castling is a two-file king move; relocate the rook alongside.
    if moved_piece.kind == PieceKind::King && (from % 8).abs_diff(to % 8) == 2 {
        let (rook_from, rook_to) = match (moving_color, to) {
            (Color::White, 62) => (63, 61),
            (Color::White, 58) => (56, 59),
            (Color::Black, 6) => (7, 5),
            (Color::Black, 2) => (0, 3),
            _ => return Err(format!("Invalid castling destination {to}")),
        };
        if !matches!(
            next.board[rook_from as usize],
            Some(piece) if piece.kind == PieceKind::Rook && piece.color == moving_color
        ) {
            return Err(format!("Castling rook missing from square {rook_from}"));
        }
        next.board[rook_to as usize] = next.board[rook_from as usize].take();
    }

    update_castling_rights(&mut next, moving_color, from, to, moved_piece.kind);

    next.en_passant_square = if moved_piece.kind == PieceKind::Pawn && from.abs_diff(to) == 16 {
        Some((from + to) / 2)
    } else {
        None
    };

    if moved_piece.kind == PieceKind::Pawn || direct_capture || is_en_passant {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = enemy_color;

    Ok(next)
}

/// Fill in the default queen promotion for a promoting move that arrives
/// without an explicit choice. Non-promoting moves pass through unchanged.
pub fn normalize_promotion(game_state: &GameState, chess_move: ChessMove) -> ChessMove {
    if chess_move.promotion.is_some() || chess_move.from > 63 || chess_move.to > 63 {
        return chess_move;
    }

    let Some(piece) = game_state.board[chess_move.from as usize] else {
        return chess_move;
    };
    if piece.kind != PieceKind::Pawn || piece.color != game_state.side_to_move {
        return chess_move;
    }

    let promotion_row = match piece.color {
        Color::White => 0,
        Color::Black => 7,
    };
    if chess_move.to / 8 == promotion_row {
        ChessMove::with_promotion(chess_move.from, chess_move.to, PieceKind::Queen)
    } else {
        chess_move
    }
}

// White rooks start on a1/h1 (cells 56/63), black rooks on a8/h8 (cells 0/7).
fn update_castling_rights(
    game_state: &mut GameState,
    moving_color: Color,
    from: Square,
    to: Square,
    moved_kind: PieceKind,
) {
    if moved_kind == PieceKind::King {
        if moving_color == Color::White {
            game_state.castling_rights &= !(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE);
        } else {
            game_state.castling_rights &= !(CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
        }
    }

    if moved_kind == PieceKind::Rook {
        match from {
            56 => game_state.castling_rights &= !CASTLE_WHITE_QUEENSIDE,
            63 => game_state.castling_rights &= !CASTLE_WHITE_KINGSIDE,
            0 => game_state.castling_rights &= !CASTLE_BLACK_QUEENSIDE,
            7 => game_state.castling_rights &= !CASTLE_BLACK_KINGSIDE,
            _ => {}
        }
    }

    // Capturing a rook on its original square also removes that right.
    match to {
        56 => game_state.castling_rights &= !CASTLE_WHITE_QUEENSIDE,
        63 => game_state.castling_rights &= !CASTLE_WHITE_KINGSIDE,
        0 => game_state.castling_rights &= !CASTLE_BLACK_QUEENSIDE,
        7 => game_state.castling_rights &= !CASTLE_BLACK_KINGSIDE,
        _ => {}
    }
}
