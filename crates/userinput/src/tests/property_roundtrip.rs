use std::io::Cursor;

use quickcheck::QuickCheck;

use crate::{InputOptions, LineReader};

fn tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

/// Property: a line without terminator, NUL or carriage return reads back
/// unchanged, whatever the starting capacity.
#[test]
fn line_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, initial_capacity: u8) -> bool {
        let line: String = text
            .chars()
            .filter(|c| !matches!(c, '\n' | '\r' | '\0'))
            .collect();
        let input = format!("{line}\n");
        let options = InputOptions {
            initial_capacity: usize::from(initial_capacity),
            ..Default::default()
        };

        let mut reader = LineReader::with_options(Cursor::new(input.as_str()), options);
        match reader.read_line() {
            Ok(buffer) => buffer.as_bytes() == line.as_bytes() && buffer.len() == line.len(),
            Err(_) => false,
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String, u8) -> bool);
}

/// Property: multi-line reads keep everything but NUL bytes, and a capped
/// read either returns the whole text or nothing.
#[test]
fn multiline_all_or_nothing_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, cap: u8) -> bool {
        let expected: String = text.chars().filter(|&c| c != '\0').collect();
        let options = InputOptions {
            max_capacity: Some(usize::from(cap)),
            ..Default::default()
        };

        let mut reader = LineReader::with_options(Cursor::new(text.as_str()), options);
        match reader.read_multiline() {
            Ok(buffer) => buffer.as_bytes() == expected.as_bytes(),
            Err(_) => expected.len() + 1 > usize::from(cap),
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String, u8) -> bool);
}
