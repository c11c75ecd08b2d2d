#![no_main]
use std::io::Cursor;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use userinput::{Console, InputError, InputOptions, Locale, ValueKind};

#[derive(Debug, Arbitrary)]
enum Op {
    Line,
    Multiline,
    Value(Kind),
    YesNo(char, char),
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Kind {
    Character,
    Integer,
    Double,
    Boolean,
}

impl From<Kind> for ValueKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Character => ValueKind::Character,
            Kind::Integer => ValueKind::Integer,
            Kind::Double => ValueKind::Double,
            Kind::Boolean => ValueKind::Boolean,
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Session {
    initial_capacity: u8,
    max_capacity: Option<u16>,
    german: bool,
    ops: Vec<Op>,
    input: Vec<u8>,
}

fn run(session: Session) {
    let options = InputOptions {
        initial_capacity: usize::from(session.initial_capacity),
        max_capacity: session.max_capacity.map(usize::from),
        ..Default::default()
    };
    let locale = if session.german { Locale::German } else { Locale::English };
    let mut console =
        Console::with_options(Cursor::new(session.input), Vec::new(), locale, options);

    for op in session.ops {
        match op {
            Op::Line | Op::Multiline => {
                let read = if matches!(op, Op::Line) {
                    console.read_line("> ")
                } else {
                    console.read_multiline("> ")
                };
                match read {
                    Ok(buffer) => {
                        assert!(!buffer.as_bytes().contains(&0));
                        if let Some(max) = options.max_capacity {
                            assert!(buffer.is_empty() || buffer.len() < max);
                        }
                    }
                    Err(err) => assert_eq!(err, InputError::AllocationFailure),
                }
            }
            Op::Value(kind) => {
                if let Ok(value) = console.read_value("> ", kind.into()) {
                    assert_eq!(value.kind(), ValueKind::from(kind));
                }
            }
            Op::YesNo(yes, no) => {
                // must terminate: the input is finite
                let _ = console.read_yes_no("> ", yes, no);
            }
        }
    }
}

fuzz_target!(|session: Session| run(session));
