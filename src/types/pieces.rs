use crate::impl_index;
use std::ops::{self, Index, IndexMut};

use phf::phf_map;
use strum_macros::EnumIter;

impl_index!(Color);
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

#[macro_export]
macro_rules! impl_index {
    ($enum_name:ident) => {
        impl<T, const N: usize> Index<$enum_name> for [T; N] {
            type Output = T;

            fn index(&self, index: $enum_name) -> &Self::Output {
                &self[index as usize]
            }
        }

        impl<T, const N: usize> IndexMut<$enum_name> for [T; N] {
            fn index_mut(&mut self, index: $enum_name) -> &mut Self::Output {
                &mut self[index as usize]
            }
        }
    };
}

impl ops::Not for Color {
    type Output = Color;
    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// The two sides as the players know them: player 1 is white, player 2 is black.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    pub fn from_number(n: u8) -> Option<Player> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn color(self) -> Color {
        match self {
            Player::One => Color::White,
            Player::Two => Color::Black,
        }
    }

    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl From<Color> for Player {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Player::One,
            Color::Black => Player::Two,
        }
    }
}

impl_index!(PieceKind);
#[derive(Debug, EnumIter, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// Uppercase letters are white, lowercase black
static SYMBOLS: phf::Map<char, Piece> = phf_map! {
    'K' => Piece::new(PieceKind::King, Color::White),
    'Q' => Piece::new(PieceKind::Queen, Color::White),
    'R' => Piece::new(PieceKind::Rook, Color::White),
    'B' => Piece::new(PieceKind::Bishop, Color::White),
    'N' => Piece::new(PieceKind::Knight, Color::White),
    'P' => Piece::new(PieceKind::Pawn, Color::White),
    'k' => Piece::new(PieceKind::King, Color::Black),
    'q' => Piece::new(PieceKind::Queen, Color::Black),
    'r' => Piece::new(PieceKind::Rook, Color::Black),
    'b' => Piece::new(PieceKind::Bishop, Color::Black),
    'n' => Piece::new(PieceKind::Knight, Color::Black),
    'p' => Piece::new(PieceKind::Pawn, Color::Black),
};

#[derive(Eq, Copy, Clone, PartialEq, Debug, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub fn from_symbol(c: char) -> Option<Piece> {
        SYMBOLS.get(&c).copied()
    }

    pub fn symbol(self) -> char {
        let c = match self.kind {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }

    pub fn is_queen(self) -> bool {
        self.kind == PieceKind::Queen
    }

    pub fn is_rook(self) -> bool {
        self.kind == PieceKind::Rook
    }

    pub fn is_bishop(self) -> bool {
        self.kind == PieceKind::Bishop
    }

    pub fn is_knight(self) -> bool {
        self.kind == PieceKind::Knight
    }

    pub fn is_pawn(self) -> bool {
        self.kind == PieceKind::Pawn
    }

    pub fn is_white(self) -> bool {
        self.color == Color::White
    }

    pub fn is_black(self) -> bool {
        self.color == Color::Black
    }

    pub fn belongs_to(self, player: Player) -> bool {
        self.color == player.color()
    }
}
