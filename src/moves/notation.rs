use crate::{
    consts::BOARD_SIZE,
    error::{Error, Result},
    moves::moves::Move,
    types::square::Square,
};

/// Converts raw coordinate notation such as `"e2e4"` or `"a2 A4"` into a `Move`.
///
/// Whitespace anywhere in the text is ignored and file letters are case-insensitive. Anything that
/// is not exactly `<file><rank><file><rank>` with both squares on the board is rejected with
/// `Error::InvalidNotation`.
pub fn parse(raw: &str) -> Result<Move> {
    let invalid = || Error::InvalidNotation(raw.to_owned());
    let vec: Vec<char> = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if vec.len() != 4 || !vec[1].is_ascii_digit() || !vec[3].is_ascii_digit() {
        return Err(invalid());
    }

    let origin = square(vec[0], vec[1]).ok_or_else(invalid)?;
    let dest = square(vec[2], vec[3]).ok_or_else(invalid)?;
    Ok(Move::new(origin, dest))
}

fn square(file: char, rank: char) -> Option<Square> {
    // Base 20 maps letters a..j (either case) to 10..19 and digits to 0..9, so anything
    // but a..h falls outside the board once shifted
    let col = file.to_digit(20)? as i32 - 10;
    let row = BOARD_SIZE as i32 - rank.to_digit(10)? as i32;
    Square::try_new(row, col)
}

#[cfg(test)]
mod notation_tests {
    use super::*;
    use itertools::iproduct;

    fn mv(origin: (usize, usize), dest: (usize, usize)) -> Move {
        Move::new(Square::new(origin.0, origin.1), Square::new(dest.0, dest.1))
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse("e2e4"), Ok(mv((6, 4), (4, 4))));
        assert_eq!(parse("a8h1"), Ok(mv((0, 0), (7, 7))));
        assert_eq!(parse("h1a8"), Ok(mv((7, 7), (0, 0))));
    }

    #[test]
    fn test_parse_whitespace_and_case() {
        assert_eq!(parse("a2 a4"), Ok(mv((6, 0), (4, 0))));
        assert_eq!(parse(" A2\tA4 "), Ok(mv((6, 0), (4, 0))));
        assert_eq!(parse("E 7 e 5"), Ok(mv((1, 4), (3, 4))));
    }

    #[test]
    fn test_round_trip_every_pair() {
        for (origin, dest) in iproduct!(Square::iter(), Square::iter()) {
            let m = Move::new(origin, dest);
            assert_eq!(parse(&m.to_notation()), Ok(m));
        }
    }

    #[test]
    fn test_reject_wrong_length() {
        for raw in ["", "   ", "e2", "e2e", "e2e4e", "e2e4q", "e2-e4"] {
            assert_eq!(parse(raw), Err(Error::InvalidNotation(raw.to_owned())), "{raw:?}");
        }
    }

    #[test]
    fn test_reject_non_digit_rank() {
        for raw in ["eee4", "e2ee", "e2e+", "22e4"] {
            assert!(parse(raw).is_err(), "{raw:?}");
        }
    }

    #[test]
    fn test_reject_out_of_board() {
        for raw in ["i2e4", "e2j4", "e9e4", "e2e0", "e0e1", "z1a1", "12a1", "a1?1", "ä2e4"] {
            assert!(parse(raw).is_err(), "{raw:?}");
        }
    }

    #[test]
    fn test_every_valid_shape_parses() {
        let files = "abcdefghABCDEFGH";
        let ranks = "12345678";
        for (f, r) in iproduct!(files.chars(), ranks.chars()) {
            let raw = format!("{f}{r}a1");
            assert!(parse(&raw).is_ok(), "{raw:?}");
        }
    }
}
