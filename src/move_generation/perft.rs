//! Perft: exhaustive move-path counting used to validate move generation.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut total = PerftCounts::default();

    for generated in root_moves {
        perft_recurse(generator, game_state, &generated, depth, 1, &mut total)?;
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    parent: &GameState,
    generated: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    if current_depth == search_depth {
        counts.nodes += 1;

        let chess_move = generated.chess_move;
        let moved = parent.board[chess_move.from as usize];
        let direct_capture = parent.board[chess_move.to as usize].is_some();
        let is_pawn = matches!(moved, Some(piece) if piece.kind == PieceKind::Pawn);
        let is_en_passant = is_pawn
            && !direct_capture
            && parent.en_passant_square == Some(chess_move.to)
            && chess_move.from % 8 != chess_move.to % 8;

        if direct_capture || is_en_passant {
            counts.captures += 1;
        }
        if is_en_passant {
            counts.en_passant += 1;
        }
        if matches!(moved, Some(piece) if piece.kind == PieceKind::King)
            && (chess_move.from % 8).abs_diff(chess_move.to % 8) == 2
        {
            counts.castles += 1;
        }
        if chess_move.promotion.is_some() {
            counts.promotions += 1;
        }

        return Ok(());
    }

    let moves = generator.generate_legal_moves(&generated.game_after_move)?;
    for child in moves {
        perft_recurse(
            generator,
            &generated.game_after_move,
            &child,
            search_depth,
            current_depth + 1,
            counts,
        )?;
    }

    Ok(())
}
