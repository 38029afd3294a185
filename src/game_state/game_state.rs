//! Core board state representation.
//!
//! `GameState` is the central model for the engine: a 64-cell mailbox board
//! plus side to move, castling rights, en-passant target, and move clocks.
//! The whole state round-trips through a six-field FEN position string, which
//! is the only external representation shells are expected to persist.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::normalize_promotion;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{ChessMove, MoveGenerator};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// One chess position. Cells are ordered rank 8 down to rank 1, file a to
/// file h, so `board[0]` is a8 and `board[63]` is h1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; 64],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Read-only view of the 64-cell board, rank 8 first.
    #[inline]
    pub fn board(&self) -> &[Option<Piece>; 64] {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square as usize]
    }

    #[inline]
    pub fn is_white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    /// Apply a move in place. Returns `false` without mutating when there is
    /// no own-color piece on the from-square or the move is not legal in
    /// this position. A promoting move without an explicit promotion piece
    /// promotes to a queen.
    pub fn make_move(&mut self, chess_move: ChessMove) -> bool {
        let candidate = normalize_promotion(self, chess_move);

        let Ok(legal_moves) = LegalMoveGenerator.generate_legal_moves(self) else {
            return false;
        };

        match legal_moves
            .into_iter()
            .find(|generated| generated.chess_move == candidate)
        {
            Some(generated) => {
                *self = generated.game_after_move;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::move_generation::move_generator::ChessMove;
    use crate::utils::algebraic::algebraic_to_square;

    fn mv(from: &str, to: &str) -> ChessMove {
        ChessMove::new(
            algebraic_to_square(from).expect("from square should parse"),
            algebraic_to_square(to).expect("to square should parse"),
        )
    }

    #[test]
    fn new_game_places_pieces_in_rank_eight_first_order() {
        let game = GameState::new_game();
        assert_eq!(
            game.piece_at(0),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        assert_eq!(
            game.piece_at(60),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert!(game.is_white_to_move());
    }

    #[test]
    fn make_move_flips_side_to_move() {
        let mut game = GameState::new_game();
        assert!(game.is_white_to_move());
        assert!(game.make_move(mv("e2", "e4")));
        assert!(!game.is_white_to_move());
        assert!(game.make_move(mv("e7", "e5")));
        assert!(game.is_white_to_move());
    }

    #[test]
    fn make_move_rejects_empty_square_and_wrong_color() {
        let mut game = GameState::new_game();
        let before = game.clone();

        assert!(!game.make_move(mv("e4", "e5")), "empty from-square");
        assert!(!game.make_move(mv("e7", "e5")), "black piece on white's turn");
        assert_eq!(game, before, "rejected moves must not mutate state");
    }

    #[test]
    fn make_move_rejects_illegal_pattern() {
        let mut game = GameState::new_game();
        assert!(!game.make_move(mv("e2", "e5")), "pawn cannot triple-step");
        assert!(!game.make_move(mv("b1", "b3")), "knight cannot move straight");
    }

    #[test]
    fn fullmove_number_increments_after_black_only() {
        let mut game = GameState::new_game();
        assert!(game.make_move(mv("e2", "e4")));
        assert_eq!(game.fullmove_number, 1);
        assert!(game.make_move(mv("e7", "e5")));
        assert_eq!(game.fullmove_number, 2);
    }
}
