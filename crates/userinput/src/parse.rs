//! Validation of raw input text into typed values.
//!
//! These functions are pure; [`Console`](crate::Console) pairs them with a
//! [`LineReader`](crate::LineReader). The numeric parsers skip leading ASCII
//! whitespace and reject anything after the numeral, trailing whitespace
//! included.

use core::num::IntErrorKind;

use crate::{
    buffer::{InputBuffer, Terminator},
    error::{InputError, Result},
};

/// Returns the first character of a line.
///
/// # Errors
///
/// [`InputError::EndOfStream`] if the stream ended before anything was read,
/// [`InputError::EmptyInput`] for an empty line.
pub fn parse_character(line: &InputBuffer) -> Result<char> {
    match line.first_char() {
        Some(c) => Ok(c),
        None if line.terminator() == Terminator::EndOfStream => Err(InputError::EndOfStream),
        None => Err(InputError::EmptyInput),
    }
}

/// Parses a base-10 `i32`, with an optional sign.
///
/// # Errors
///
/// [`InputError::InvalidInteger`] when the text is not a numeral,
/// [`InputError::IntegerOutOfRange`] when it is one but does not fit.
pub fn parse_integer(text: &str) -> Result<i32> {
    let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    // syntax first, so trailing garbage is never mistaken for overflow
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidInteger);
    }
    text.parse::<i32>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::IntegerOutOfRange,
        _ => InputError::InvalidInteger,
    })
}

/// Parses a decimal or scientific-notation `f64`.
///
/// Magnitudes too large for `f64` become infinite rather than failing;
/// `inf` and `nan` are accepted as written.
///
/// # Errors
///
/// [`InputError::InvalidDouble`] when the text is not a number.
pub fn parse_double(text: &str) -> Result<f64> {
    let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    text.parse::<f64>().map_err(|_| InputError::InvalidDouble)
}

/// Matches an answer against the yes/no trigger characters, ignoring case.
///
/// Returns `None` when the answer is neither.
#[must_use]
pub fn match_yes_no(answer: char, yes: char, no: char) -> Option<bool> {
    let answer = fold(answer);
    if answer == fold(yes) {
        Some(true)
    } else if answer == fold(no) {
        Some(false)
    } else {
        None
    }
}

fn fold(c: char) -> char {
    // single-char lowercase only; multi-char expansions never match a trigger
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
