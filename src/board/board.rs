use core::fmt;
use std::ops::Index;

use log::{debug, trace};
use strum::IntoEnumIterator;

use crate::{
    consts::{BOARD_SIZE, FIRST_PLAYER, PAWN_START_ROW},
    moves::{
        moves::Move,
        notation,
        rules::{general_rules, rule_for},
    },
    types::{
        pieces::{Color, Piece, PieceKind, Player},
        square::Square,
    },
};

/// Back rank from file a to file h, the same for both colors
const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Row holding each color's back rank, indexed by `Color`
const BACK_ROW: [usize; 2] = [7, 0];

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    /// Whose turn it is. Read by callers; `apply` never changes it.
    pub to_move: Player,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// The standard opening position with `FIRST_PLAYER` to move
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in Color::iter() {
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                board.place_piece(Piece::new(kind, color), Square::new(BACK_ROW[color], col));
                board.place_piece(Piece::new(PieceKind::Pawn, color), Square::new(PAWN_START_ROW[color], col));
            }
        }
        board
    }

    pub fn empty() -> Self {
        Board {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            to_move: FIRST_PLAYER,
        }
    }

    #[inline(always)]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row()][sq.col()]
    }

    #[inline(always)]
    pub fn place_piece(&mut self, piece: Piece, sq: Square) {
        self.grid[sq.row()][sq.col()] = Some(piece);
    }

    #[inline(always)]
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.grid[sq.row()][sq.col()].take()
    }

    /// Every occupied square, rank 8 first and file a first within a rank
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + Clone + '_ {
        Square::iter().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Decides whether `player` may make `m`. Ownership rules run first, then the movement law of
    /// the piece being moved. Any failure is just `false`.
    pub fn is_legal(&self, m: Move, player: Player) -> bool {
        let piece = self.piece_at(m.origin_square());
        let captured = self.piece_at(m.dest_square());

        let legal = general_rules(piece, captured, player)
            && piece.is_some_and(|piece| rule_for(piece.kind)(piece, captured, m, self));
        trace!("{m} by player {} with {piece:?}: {}", player.number(), if legal { "legal" } else { "illegal" });
        legal
    }

    /// Parses raw notation and checks it for `player`. Unreadable text is treated exactly like an
    /// illegal move.
    pub fn is_move_valid(&self, raw: &str, player: Player) -> bool {
        match notation::parse(raw) {
            Ok(m) => self.is_legal(m, player),
            Err(e) => {
                debug!("{e}");
                false
            }
        }
    }

    /// Moves whatever stands on the origin square onto the destination, replacing anything there,
    /// and empties the origin. No legality check is made: only call this after `is_legal` (or
    /// `is_move_valid`) said yes.
    pub fn apply(&mut self, m: Move) {
        let moving = self.remove_piece(m.origin_square());
        self.grid[m.dest_square().row()][m.dest_square().col()] = moving;
    }

    /// Checkmate and stalemate are never detected, so a game never ends on its own.
    pub fn is_game_over(&self) -> bool {
        false
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.grid[sq.row()][sq.col()]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut str = String::new();
        str += match self.to_move.color() {
            Color::White => "White to move\n",
            Color::Black => "Black to move\n",
        };
        str += &self.placement();
        write!(f, "{}", str)
    }
}
