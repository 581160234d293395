use std::io::{BufRead, Write};

use crate::error::{InputError, PlayError};
use crate::game::{Board, COLS};

/// Parse a 1-based column entry into a playable 0-based column.
pub fn parse_column(line: &str, board: &Board) -> Result<usize, InputError> {
    let trimmed = line.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if !(1..=COLS as i64).contains(&number) {
        return Err(InputError::OutOfRange(number));
    }
    let column = (number - 1) as usize;
    if board.is_column_full(column) {
        return Err(InputError::ColumnFull(number as usize));
    }
    Ok(column)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, PlayError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PlayError::InputClosed);
    }
    Ok(line)
}

/// Prompt until the player names a playable column.
pub fn read_column<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    board: &Board,
) -> Result<usize, PlayError> {
    loop {
        write!(output, "Please Enter Column: ")?;
        output.flush()?;
        let line = read_line(input)?;
        match parse_column(&line, board) {
            Ok(column) => return Ok(column),
            Err(InputError::NotANumber(_)) => writeln!(output, "Please input an integer.")?,
            Err(InputError::OutOfRange(_)) => {
                writeln!(output, "Please input an integer between 1 and {COLS}.")?
            }
            Err(InputError::ColumnFull(n)) => writeln!(
                output,
                "Column {n} is full, please input a different column."
            )?,
        }
    }
}

/// Print `prompt` and read until the answer is one of `allowed`.
pub fn read_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    allowed: &[&str],
) -> Result<String, PlayError> {
    writeln!(output, "{prompt}")?;
    loop {
        let line = read_line(input)?;
        let answer = line.trim();
        if allowed.contains(&answer) {
            return Ok(answer.to_string());
        }
        writeln!(output, "Please input a valid String {allowed:?}.")?;
    }
}
