//! Move input parsing and validation.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::games::ultimate_tic_tac_toe::UtttMove;

static CELL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-8])\s*[,\s]\s*([0-8])$").expect("CELL_RE regex should be valid")
});
static QUIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(?i)(q|quit|exit)$").expect("QUIT_RE regex should be valid"));

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}, expected `row col` with both in 0-8")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

#[derive(Debug, PartialEq)]
pub enum MoveInput {
    Cell { row: u8, col: u8 },
    Quit,
}

impl MoveInput {
    pub fn to_move(&self) -> Option<UtttMove> {
        match *self {
            MoveInput::Cell { row, col } => Some(UtttMove::new(row, col)),
            MoveInput::Quit => None,
        }
    }
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if QUIT_RE.is_match(trimmed) {
            return Ok(MoveInput::Quit);
        }

        if let Some(caps) = CELL_RE.captures(trimmed) {
            let parse = |index: usize| {
                caps[index].parse::<u8>().map_err(|_| InputError::InvalidInput {
                    input: input.to_string(),
                })
            };
            return Ok(MoveInput::Cell {
                row: parse(1)?,
                col: parse(2)?,
            });
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

/// Reads one line from `reader` and parses it. End of input counts as a
/// request to exit.
pub fn read_move_input<R: BufRead>(reader: &mut R) -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let bytes = reader
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if bytes == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}

/// Prompts on stdout and reads a move from stdin.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    print!("Enter your move (row col, or quit): ");
    io::stdout().flush().map_err(|e| InputError::IOError {
        error: format!("Failed to flush stdout: {}", e),
    })?;

    let stdin = io::stdin();
    let mut lock = stdin.lock();
    read_move_input(&mut lock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parses_cell_separators() {
        for input in ["4 5", "4,5", " 4 ,  5 ", "4\t5\n"] {
            assert_eq!(
                input.parse::<MoveInput>(),
                Ok(MoveInput::Cell { row: 4, col: 5 }),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parses_quit() {
        for input in ["q", "quit", "QUIT", "exit\n"] {
            assert_eq!(input.parse::<MoveInput>(), Ok(MoveInput::Quit));
        }
    }

    #[test]
    fn test_rejects_out_of_range_and_garbage() {
        for input in ["9 0", "0 9", "45", "a b", "", "1 2 3", "-1 2"] {
            assert!(
                matches!(
                    input.parse::<MoveInput>(),
                    Err(InputError::InvalidInput { .. })
                ),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_cell_converts_to_move() {
        let input: MoveInput = "3 7".parse().unwrap();
        assert_eq!(input.to_move(), Some(UtttMove::new(3, 7)));
        assert_eq!(MoveInput::Quit.to_move(), None);
    }

    #[test]
    fn test_reader_end_of_input_is_exit() {
        let mut reader = Cursor::new("");
        assert_eq!(read_move_input(&mut reader), Err(InputError::UserExit));
    }

    #[test]
    fn test_reader_reads_one_line_at_a_time() {
        let mut reader = Cursor::new("0 1\nnope\nquit\n");
        assert_eq!(
            read_move_input(&mut reader),
            Ok(MoveInput::Cell { row: 0, col: 1 })
        );
        assert!(read_move_input(&mut reader).is_err());
        assert_eq!(read_move_input(&mut reader), Ok(MoveInput::Quit));
    }
}
