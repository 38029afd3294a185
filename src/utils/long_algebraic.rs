//! Long algebraic move notation (`e2e4`, `e7e8q`).

use crate::game_state::chess_types::PieceKind;
use crate::move_generation::move_generator::ChessMove;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn chess_move_to_lan(chess_move: ChessMove) -> Result<String, String> {
    let from = square_to_algebraic(chess_move.from)?;
    let to = square_to_algebraic(chess_move.to)?;
    let suffix = match chess_move.promotion {
        Some(PieceKind::Knight) => "n",
        Some(PieceKind::Bishop) => "b",
        Some(PieceKind::Rook) => "r",
        Some(PieceKind::Queen) => "q",
        Some(other) => return Err(format!("Invalid promotion piece: {other:?}")),
        None => "",
    };
    Ok(format!("{from}{to}{suffix}"))
}

pub fn lan_to_chess_move(lan: &str) -> Result<ChessMove, String> {
    if !lan.is_ascii() || !(4..=5).contains(&lan.len()) {
        return Err(format!("Invalid long algebraic move: {lan}"));
    }

    let from = algebraic_to_square(&lan[0..2])?;
    let to = algebraic_to_square(&lan[2..4])?;

    let promotion = match &lan[4..] {
        "" => None,
        "n" => Some(PieceKind::Knight),
        "b" => Some(PieceKind::Bishop),
        "r" => Some(PieceKind::Rook),
        "q" => Some(PieceKind::Queen),
        other => return Err(format!("Invalid promotion suffix: {other}")),
    };

    Ok(ChessMove {
        from,
        to,
        promotion,
    })
}

#[cfg(test)]
mod tests {
    use super::{chess_move_to_lan, lan_to_chess_move};
    use crate::game_state::chess_types::PieceKind;
    use crate::move_generation::move_generator::ChessMove;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn round_trip_quiet_move_and_promotion() {
        let quiet = lan_to_chess_move("e2e4").expect("e2e4 should parse");
        assert_eq!(quiet.from, algebraic_to_square("e2").unwrap());
        assert_eq!(quiet.to, algebraic_to_square("e4").unwrap());
        assert_eq!(quiet.promotion, None);
        assert_eq!(chess_move_to_lan(quiet).expect("LAN"), "e2e4");

        let promo = lan_to_chess_move("e7e8q").expect("e7e8q should parse");
        assert_eq!(promo.promotion, Some(PieceKind::Queen));
        assert_eq!(chess_move_to_lan(promo).expect("LAN"), "e7e8q");
    }

    #[test]
    fn rejects_malformed_notation() {
        assert!(lan_to_chess_move("e2").is_err());
        assert!(lan_to_chess_move("e2e4qq").is_err());
        assert!(lan_to_chess_move("e2e9").is_err());
        assert!(lan_to_chess_move("e7e8k").is_err());
        assert!(chess_move_to_lan(ChessMove::new(3, 64)).is_err());
    }
}
