use log::debug;

use crate::{
    consts::BOARD_SIZE,
    error::{Error, Result},
    types::{
        pieces::{Piece, Player},
        square::Square,
    },
};

use super::board::Board;

/// Takes the piece placement field of a fen string, optionally followed by the side to move
/// (`w` or `b`), and returns the position it describes. Castling, en passant and clock fields are
/// not understood.
pub fn build_board(fen_string: &str) -> Result<Board> {
    build(fen_string).map_err(|e| {
        debug!("{e}");
        e
    })
}

fn build(fen_string: &str) -> Result<Board> {
    let invalid = |reason: String| Error::InvalidPlacement(reason);
    let mut fields = fen_string.split_whitespace();
    let placement = fields.next().ok_or_else(|| invalid("empty string".to_owned()))?;

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(invalid(format!("expected {BOARD_SIZE} ranks, found {}", ranks.len())));
    }

    let mut board = Board::empty();
    for (row, entry) in ranks.iter().enumerate() {
        let mut col: usize = 0;
        for c in entry.chars() {
            if let Some(run) = c.to_digit(10).filter(|&d| d > 0) {
                col += run as usize;
                continue;
            }
            let piece = Piece::from_symbol(c).ok_or_else(|| invalid(format!("unrecognized char {c:?}")))?;
            if col >= BOARD_SIZE {
                return Err(invalid(format!("rank {} is longer than {BOARD_SIZE} cells", BOARD_SIZE - row)));
            }
            board.place_piece(piece, Square::new(row, col));
            col += 1;
        }
        if col != BOARD_SIZE {
            return Err(invalid(format!("rank {} covers {col} cells", BOARD_SIZE - row)));
        }
    }

    board.to_move = match fields.next() {
        None | Some("w") => Player::One,
        Some("b") => Player::Two,
        Some(other) => return Err(invalid(format!("invalid turn {other:?}"))),
    };
    if let Some(extra) = fields.next() {
        return Err(invalid(format!("unexpected field {extra:?}")));
    }
    Ok(board)
}

impl Board {
    /// Piece placement field in fen form, the inverse of `build_board` without the turn
    pub fn placement(&self) -> String {
        let mut str = String::new();
        for row in 0..BOARD_SIZE {
            let mut empty = 0;
            for col in 0..BOARD_SIZE {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            str += &empty.to_string();
                            empty = 0;
                        }
                        str.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                str += &empty.to_string();
            }
            if row + 1 < BOARD_SIZE {
                str.push('/');
            }
        }
        str
    }
}
