//! Fixed-depth minimax search with alpha-beta pruning, in negamax form.
//!
//! Each node iterates the legal moves of the position, recurses on the
//! already-materialized successor state at depth-1, and prunes siblings once
//! alpha meets beta. Successor states are independent values, so no branch
//! can observe another branch's mutations. Search keeps no state across
//! calls: no transposition table, no iterative deepening, no clock.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{ChessMove, MoveGenResult, MoveGenerator};
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 2 }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    pub best_score: i32,
    pub nodes: u64,
}

pub fn minimax_search<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> MoveGenResult<SearchResult> {
    if config.max_depth == 0 {
        return Ok(SearchResult {
            best_move: None,
            best_score: scorer.score(game_state),
            nodes: 1,
        });
    }

    let mut nodes = 0u64;
    let (best_move, best_score) =
        negamax_root(game_state, generator, scorer, config.max_depth, &mut nodes)?;

    Ok(SearchResult {
        best_move,
        best_score,
        nodes,
    })
}

fn negamax_root<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    depth: u8,
    nodes: &mut u64,
) -> MoveGenResult<(Option<ChessMove>, i32)> {
    let moves = generator.generate_legal_moves(game_state)?;
    if moves.is_empty() {
        *nodes += 1;
        return Ok((None, terminal_score(game_state, 0)));
    }

    let mut alpha = -MATE_SCORE;
    let beta = MATE_SCORE;
    let mut best_move = None;
    let mut best_score = -MATE_SCORE;

    for generated in moves {
        let score = -negamax(
            &generated.game_after_move,
            generator,
            scorer,
            depth.saturating_sub(1),
            -beta,
            -alpha,
            1,
            nodes,
        )?;

        if score > best_score {
            best_score = score;
            best_move = Some(generated.chess_move);
        }
        if score > alpha {
            alpha = score;
        }
    }

    Ok((best_move, best_score))
}

fn negamax<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: u8,
    nodes: &mut u64,
) -> MoveGenResult<i32> {
    *nodes += 1;

    if depth == 0 {
        // Even at the horizon, terminal positions must dominate material so
        // the search reliably walks into mating lines.
        let horizon_moves = generator.generate_legal_moves(game_state)?;
        if horizon_moves.is_empty() {
            return Ok(terminal_score(game_state, ply));
        }
        return Ok(scorer.score(game_state));
    }

    let moves = generator.generate_legal_moves(game_state)?;
    if moves.is_empty() {
        return Ok(terminal_score(game_state, ply));
    }

    let mut best = -MATE_SCORE;

    for generated in moves {
        let score = -negamax(
            &generated.game_after_move,
            generator,
            scorer,
            depth.saturating_sub(1),
            -beta,
            -alpha,
            ply.saturating_add(1),
            nodes,
        )?;

        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }

    Ok(best)
}

/// Mated positions score worse the sooner they arrive; stalemate is dead even.
fn terminal_score(game_state: &GameState, ply: u8) -> i32 {
    if is_king_in_check(game_state, game_state.side_to_move) {
        -MATE_SCORE + i32::from(ply)
    } else {
        0
    }
}
