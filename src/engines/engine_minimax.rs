//! Difficulty-keyed minimax engine, the default opponent.
//!
//! Difficulty maps onto a fixed search depth. When search yields no move but
//! legal moves exist (a defensive corner, not an expected state), the engine
//! falls back to a uniform random choice; on terminal positions it reports no
//! move and leaves game-over handling to the caller.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{ChessMove, MoveGenerator};
use crate::search::board_scoring::StandardScorer;
use crate::search::minimax::{minimax_search, SearchConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    #[inline]
    pub const fn search_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::VeryHard => 4,
        }
    }

    /// Look up a difficulty by its wire key. Unrecognized keys fall back to
    /// the medium (depth 2) setting.
    pub fn from_key(key: &str) -> Self {
        match key {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            "very_hard" => Difficulty::VeryHard,
            _ => Difficulty::Medium,
        }
    }
}

pub struct MinimaxEngine {
    difficulty: Difficulty,
    move_generator: LegalMoveGenerator,
    scorer: StandardScorer,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_difficulty(Difficulty::default())
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            move_generator: LegalMoveGenerator,
            scorer: StandardScorer,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "QuinceChess Minimax"
    }

    fn author(&self) -> &str {
        "quince_chess developers"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let depth = params.depth.unwrap_or_else(|| self.difficulty.search_depth());

        let result = minimax_search(
            game_state,
            &self.move_generator,
            &self.scorer,
            SearchConfig { max_depth: depth },
        )
        .map_err(|e| e.to_string())?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string minimax_engine depth {} nodes {} score {}",
            depth, result.nodes, result.best_score
        ));

        out.best_move = match result.best_move {
            Some(chess_move) => Some(chess_move),
            None => {
                let legal_moves = self
                    .move_generator
                    .generate_legal_moves(game_state)
                    .map_err(|e| e.to_string())?;
                if legal_moves.is_empty() {
                    None
                } else {
                    out.info_lines
                        .push("info string minimax_engine random_fallback".to_owned());
                    let mut rng = rand::rng();
                    legal_moves
                        .as_slice()
                        .choose(&mut rng)
                        .map(|generated| generated.chess_move)
                }
            }
        };

        Ok(out)
    }
}

/// Select a move for the position described by `fen`, at the strength named
/// by `difficulty` (`easy`/`medium`/`hard`/`very_hard`; anything else plays
/// at medium). Returns `Ok(None)` when the side to move has no legal moves.
pub fn select_move(fen: &str, difficulty: &str) -> Result<Option<ChessMove>, String> {
    let game_state = GameState::from_fen(fen)?;
    let mut engine = MinimaxEngine::with_difficulty(Difficulty::from_key(difficulty));
    let out = engine.choose_move(&game_state, &GoParams::default())?;
    Ok(out.best_move)
}
