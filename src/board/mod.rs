pub mod board;
pub mod fen;
