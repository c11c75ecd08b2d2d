/// The type a caller asks [`Console::read_value`](crate::Console::read_value)
/// for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A single character.
    Character,
    /// An `i32`.
    Integer,
    /// An `f64`.
    Double,
    /// A yes/no answer using the console's catalog trigger characters.
    Boolean,
}

/// A validated value produced by one typed read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedValue {
    /// See [`ValueKind::Character`].
    Character(char),
    /// See [`ValueKind::Integer`].
    Integer(i32),
    /// See [`ValueKind::Double`].
    Double(f64),
    /// See [`ValueKind::Boolean`].
    Boolean(bool),
}

impl ParsedValue {
    /// The kind this value answers.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            ParsedValue::Character(_) => ValueKind::Character,
            ParsedValue::Integer(_) => ValueKind::Integer,
            ParsedValue::Double(_) => ValueKind::Double,
            ParsedValue::Boolean(_) => ValueKind::Boolean,
        }
    }
}
