use crate::types::pieces::Player;

/// Cells along each edge of the board
pub const BOARD_SIZE: usize = 8;

/// Row a pawn of each color starts on, indexed by `Color`. Only from here may it advance two rows.
pub const PAWN_START_ROW: [usize; 2] = [6, 1];

/// Row delta of a single pawn step, indexed by `Color`. White advances toward row 0.
pub const PAWN_FORWARD: [i32; 2] = [-1, 1];

/// Side that opens a fresh game
pub const FIRST_PLAYER: Player = Player::One;

/// Piece placement of the standard opening position, rank 8 first
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
