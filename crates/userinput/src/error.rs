use thiserror::Error;

/// Result type returned by every fallible read in this crate.
pub type Result<T> = core::result::Result<T, InputError>;

/// Classification of a failed read.
///
/// The taxonomy is flat: every failure path maps to exactly one variant and
/// nothing is wrapped. The `Display` text is meant for developers and logs;
/// user-facing wording comes from a [`MessageCatalog`](crate::MessageCatalog).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputError {
    /// The prompt could not be written to the output sink.
    #[error("input error")]
    General,
    /// The answer to a yes/no question matched neither trigger character.
    #[error("answer is neither the yes nor the no character")]
    InvalidYesNo,
    /// The line is not a base-10 integer.
    #[error("not a valid integer")]
    InvalidInteger,
    /// The line is an integer that does not fit in an `i32`.
    #[error("integer out of range")]
    IntegerOutOfRange,
    /// The line is not a floating-point number.
    #[error("not a valid floating-point number")]
    InvalidDouble,
    /// Growing the input buffer failed; the partial buffer was released.
    #[error("input buffer allocation failed")]
    AllocationFailure,
    /// A character was requested but the line was empty.
    #[error("empty input")]
    EmptyInput,
    /// A character was requested but the stream ended before any input.
    #[error("end of input stream")]
    EndOfStream,
}

impl InputError {
    /// Every variant, in declaration order.
    pub const ALL: [InputError; 8] = [
        InputError::General,
        InputError::InvalidYesNo,
        InputError::InvalidInteger,
        InputError::IntegerOutOfRange,
        InputError::InvalidDouble,
        InputError::AllocationFailure,
        InputError::EmptyInput,
        InputError::EndOfStream,
    ];
}
