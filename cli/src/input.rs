use std::num::ParseIntError;

use sweeper_core::{Coord, Coord2};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Expected two numbers separated by a space, got {0}")]
    WrongCount(usize),
    #[error("Invalid number {token:?}: {source}")]
    NotANumber {
        token: String,
        source: ParseIntError,
    },
}

/// Parses a `row col` line as typed by the player.
pub fn parse_coords(line: &str) -> Result<Coord2, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[row, col] = tokens.as_slice() else {
        return Err(InputError::WrongCount(tokens.len()));
    };
    Ok((parse_axis(row)?, parse_axis(col)?))
}

fn parse_axis(token: &str) -> Result<Coord, InputError> {
    token
        .parse()
        .map_err(|source| InputError::NotANumber {
            token: token.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_numbers() {
        assert_eq!(parse_coords("0 3"), Ok((0, 3)));
        assert_eq!(parse_coords("  12\t7 \n"), Ok((12, 7)));
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert_eq!(parse_coords(""), Err(InputError::WrongCount(0)));
        assert_eq!(parse_coords("4"), Err(InputError::WrongCount(1)));
        assert_eq!(parse_coords("1 2 3"), Err(InputError::WrongCount(3)));
    }

    #[test]
    fn rejects_non_numeric_and_negative_tokens() {
        assert!(matches!(
            parse_coords("a 1"),
            Err(InputError::NotANumber { ref token, .. }) if token == "a"
        ));
        assert!(matches!(
            parse_coords("1 -2"),
            Err(InputError::NotANumber { ref token, .. }) if token == "-2"
        ));
    }
}
