//! Move-legality engine for two-player chess.
//!
//! A [`Board`] owns the position. Callers ask it whether a move written in coordinate notation is
//! legal for a player, then tell it to apply the move:
//!
//! ```
//! use arbiter::{Board, Player};
//!
//! let mut board = Board::new();
//! assert!(board.is_move_valid("e2 e4", Player::One));
//! board.apply("e2e4".parse().unwrap());
//! assert!(!board.is_game_over());
//! ```
//!
//! Only the movement laws of each piece are enforced. Check, checkmate, castling, en passant and
//! promotion are not part of the rules.
#![allow(clippy::module_inception)]
pub mod board;
pub mod consts;
pub mod error;
pub mod moves;
pub mod types;

pub use board::{board::Board, fen::build_board};
pub use error::{Error, Result};
pub use moves::moves::Move;
pub use types::{
    pieces::{Color, Piece, PieceKind, Player},
    square::Square,
};
