//! Movement laws, one per piece kind.
//!
//! Every law is a pure predicate over the moving piece, whatever sits on the destination, the
//! move itself and the board (for path checks). A `false` is the only way a law says no.

use crate::{
    board::board::Board,
    consts::{PAWN_FORWARD, PAWN_START_ROW},
    moves::moves::Move,
    types::pieces::{Piece, PieceKind, Player},
};

pub type Rule = fn(Piece, Option<Piece>, Move, &Board) -> bool;

/// Ownership checks shared by every piece: there must be a piece to move, it must be the
/// player's own, and it may not land on another of the player's pieces. Whether the move exposes
/// the player's own king is not considered.
pub fn general_rules(piece: Option<Piece>, captured: Option<Piece>, player: Player) -> bool {
    let Some(piece) = piece else {
        return false;
    };
    if !piece.belongs_to(player) {
        return false;
    }
    !captured.is_some_and(|c| c.color == piece.color)
}

/// Selects the movement law for a kind of piece
pub fn rule_for(kind: PieceKind) -> Rule {
    match kind {
        PieceKind::King => king_rule,
        PieceKind::Queen => queen_rule,
        PieceKind::Rook => rook_rule,
        PieceKind::Bishop => bishop_rule,
        PieceKind::Knight => knight_rule,
        PieceKind::Pawn => pawn_rule,
    }
}

/// One cell in any direction
pub fn king_rule(_piece: Piece, _captured: Option<Piece>, m: Move, _board: &Board) -> bool {
    m.origin_square().dist(m.dest_square()) == 1
}

pub fn queen_rule(piece: Piece, captured: Option<Piece>, m: Move, board: &Board) -> bool {
    rook_rule(piece, captured, m, board) || bishop_rule(piece, captured, m, board)
}

/// Along a row or column with nothing strictly between the two ends
pub fn rook_rule(_piece: Piece, _captured: Option<Piece>, m: Move, board: &Board) -> bool {
    let straight = m.row_delta() == 0 || m.col_delta() == 0;
    straight
        && m.origin_square()
            .between(m.dest_square())
            .iter()
            .all(|&sq| board.piece_at(sq).is_none())
}

/// Any diagonal. Intervening pieces are not checked, so a bishop (and a queen moving
/// diagonally) may pass through them.
pub fn bishop_rule(_piece: Piece, _captured: Option<Piece>, m: Move, _board: &Board) -> bool {
    m.row_delta().abs() == m.col_delta().abs()
}

pub fn knight_rule(_piece: Piece, _captured: Option<Piece>, m: Move, _board: &Board) -> bool {
    matches!((m.col_delta().abs(), m.row_delta().abs()), (1, 2) | (2, 1))
}

/// Pawns only ever advance. A quiet advance goes straight ahead onto an empty cell, one row or two
/// from the starting row; a capture takes an enemy one cell diagonally ahead. The cell jumped by
/// a double step is not checked, and there is no en passant or promotion.
pub fn pawn_rule(piece: Piece, captured: Option<Piece>, m: Move, _board: &Board) -> bool {
    let forward = PAWN_FORWARD[piece.color];
    if m.row_delta().signum() != forward {
        return false;
    }

    let rows = m.row_delta().abs();
    let cols = m.col_delta().abs();
    match captured {
        None => {
            let on_start_row = m.origin_square().row() == PAWN_START_ROW[piece.color];
            cols == 0 && (rows == 1 || (rows == 2 && on_start_row))
        }
        Some(target) => target.color != piece.color && cols == 1 && rows == 1,
    }
}

#[cfg(test)]
mod rule_tests {
    use super::*;
    use crate::{
        board::fen::build_board,
        types::{pieces::Color, square::Square},
    };
    use strum::IntoEnumIterator;

    fn mv(raw: &str) -> Move {
        raw.parse().unwrap()
    }

    /// Runs the law of whatever piece stands on the origin square
    fn allowed(board: &Board, raw: &str) -> bool {
        let m = mv(raw);
        let piece = board.piece_at(m.origin_square()).unwrap();
        rule_for(piece.kind)(piece, board.piece_at(m.dest_square()), m, board)
    }

    #[test]
    fn test_general_rules() {
        let white = Piece::new(PieceKind::Knight, Color::White);
        let black = Piece::new(PieceKind::Pawn, Color::Black);
        assert!(!general_rules(None, None, Player::One));
        assert!(!general_rules(Some(white), None, Player::Two));
        assert!(!general_rules(Some(white), Some(white), Player::One));
        assert!(general_rules(Some(white), None, Player::One));
        assert!(general_rules(Some(white), Some(black), Player::One));
        assert!(general_rules(Some(black), Some(white), Player::Two));
    }

    #[test]
    fn test_general_rules_reject_friendly_capture_for_all_kinds() {
        for color in Color::iter() {
            for (a, b) in PieceKind::iter().zip(PieceKind::iter().rev()) {
                let mover = Piece::new(a, color);
                let target = Piece::new(b, color);
                assert!(!general_rules(Some(mover), Some(target), Player::from(color)));
            }
        }
    }

    #[test]
    fn test_king() {
        let board = build_board("8/8/8/3K4/8/8/8/8").unwrap();
        for dest in ["c6", "d6", "e6", "c5", "e5", "c4", "d4", "e4"] {
            assert!(allowed(&board, &format!("d5{dest}")), "{dest}");
        }
        for dest in ["d7", "b5", "f3", "b3"] {
            assert!(!allowed(&board, &format!("d5{dest}")), "{dest}");
        }
    }

    #[test]
    fn test_knight() {
        let board = build_board("8/8/8/8/8/8/PPPPPPPP/RN6").unwrap();
        assert!(allowed(&board, "b1c3"));
        assert!(allowed(&board, "b1a3"));
        assert!(allowed(&board, "b1d2"));
        assert!(!allowed(&board, "b1b3"));
        assert!(!allowed(&board, "b1d3"));
        assert!(!allowed(&board, "b1c2"));
    }

    #[test]
    fn test_rook_obstruction() {
        let board = build_board("r6r/8/8/8/P7/8/8/R3p2R").unwrap();
        // a1 up to the pawn on a4 is clear, past it is blocked
        assert!(allowed(&board, "a1a3"));
        assert!(allowed(&board, "a1a4"));
        assert!(!allowed(&board, "a1a5"));
        assert!(!allowed(&board, "a1a8"));
        // along the first rank the black pawn on e1 blocks both rooks
        assert!(allowed(&board, "a1e1"));
        assert!(!allowed(&board, "a1f1"));
        assert!(allowed(&board, "h1e1"));
        assert!(!allowed(&board, "h1d1"));
        // h-file is open edge to edge, in both directions
        assert!(allowed(&board, "h1h8"));
        assert!(allowed(&board, "h8h1"));
        assert!(allowed(&board, "a8g8"));
        assert!(!allowed(&board, "a1b2"));
    }

    #[test]
    fn test_rook_adjacent_capture() {
        let board = build_board("8/8/8/8/8/8/p7/R7").unwrap();
        assert!(allowed(&board, "a1a2"));
        assert!(allowed(&board, "a1b1"));
    }

    #[test]
    fn test_bishop_ignores_obstruction() {
        let board = build_board("8/8/8/8/8/8/1P6/2B5").unwrap();
        assert!(allowed(&board, "c1a3"));
        assert!(allowed(&board, "c1h6"));
        assert!(!allowed(&board, "c1c3"));
        assert!(!allowed(&board, "c1d3"));
    }

    #[test]
    fn test_queen_combines_rook_and_bishop() {
        let board = build_board("8/8/8/8/8/8/3P4/3Q4").unwrap();
        assert!(allowed(&board, "d1a4"));
        assert!(allowed(&board, "d1h5"));
        assert!(allowed(&board, "d1a1"));
        assert!(!allowed(&board, "d1d3"));
        assert!(!allowed(&board, "d1e3"));
    }

    #[test]
    fn test_white_pawn() {
        let board = build_board("8/8/8/3p4/4P3/8/1P6/8").unwrap();
        assert!(allowed(&board, "b2b3"));
        assert!(allowed(&board, "b2b4"));
        assert!(!allowed(&board, "b2b5"));
        assert!(!allowed(&board, "b2b1"));
        assert!(!allowed(&board, "b2c3"));
        assert!(allowed(&board, "e4e5"));
        assert!(!allowed(&board, "e4e6"));
        assert!(allowed(&board, "e4d5"));
        assert!(!allowed(&board, "e4d4"));
        assert!(!allowed(&board, "e4f5"));
        assert!(!allowed(&board, "e4e3"));
    }

    #[test]
    fn test_black_pawn() {
        let board = build_board("8/2p5/8/8/8/8/5p2/4R3").unwrap();
        assert!(allowed(&board, "c7c6"));
        assert!(allowed(&board, "c7c5"));
        assert!(!allowed(&board, "c7c8"));
        assert!(!allowed(&board, "f2f4"));
        assert!(allowed(&board, "f2f1"));
        assert!(allowed(&board, "f2e1"));
        assert!(!allowed(&board, "f2g1"));
    }

    #[test]
    fn test_pawn_blocked_straight_ahead() {
        let board = build_board("8/8/8/8/8/4p3/4P3/8").unwrap();
        assert!(!allowed(&board, "e2e3"));
    }

    #[test]
    fn test_pawn_double_step_skips_jumped_cell() {
        let board = build_board("8/8/8/8/8/4n3/4P3/8").unwrap();
        assert!(allowed(&board, "e2e4"));
    }

    #[test]
    fn test_rules_do_not_touch_board() {
        let board = build_board("8/8/8/3p4/4P3/8/8/R7").unwrap();
        let before = board.clone();
        for raw in ["e4d5", "e4e5", "a1a8", "a1h1"] {
            allowed(&board, raw);
        }
        assert_eq!(board, before);
        assert!(Square::iter().all(|sq| board.piece_at(sq) == before.piece_at(sq)));
    }
}
