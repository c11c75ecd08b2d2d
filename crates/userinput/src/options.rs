/// Default starting capacity of an [`InputBuffer`](crate::InputBuffer), in
/// bytes.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Configuration options for reading console input.
///
/// These options control how the line reader sizes its buffer and how it
/// treats Windows line endings. They are fixed once a
/// [`Console`](crate::Console) or [`LineReader`](crate::LineReader) is
/// constructed.
///
/// # Examples
///
/// ```rust
/// use userinput::{InputOptions, LineReader};
///
/// let options = InputOptions {
///     max_capacity: Some(4096),
///     ..Default::default()
/// };
/// let mut reader = LineReader::with_options(&b"hello\n"[..], options);
/// assert_eq!(reader.read_line().unwrap().as_str(), "hello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputOptions {
    /// Capacity reserved before the first byte is read.
    ///
    /// The buffer doubles from here whenever the next byte plus one spare slot
    /// would not fit. Values below 2 are rounded up to 2.
    ///
    /// # Default
    ///
    /// `16`
    pub initial_capacity: usize,

    /// Upper bound on the buffer capacity, in bytes.
    ///
    /// A read whose growth would exceed this bound fails with
    /// [`InputError::AllocationFailure`](crate::InputError::AllocationFailure),
    /// exactly as if the allocator had refused the request. `None` leaves
    /// growth limited only by the allocator.
    ///
    /// # Default
    ///
    /// `None`
    pub max_capacity: Option<usize>,

    /// Whether a single `\r` directly before the line terminator is dropped
    /// in single-line mode.
    ///
    /// Multi-line reads always keep their input verbatim.
    ///
    /// # Default
    ///
    /// `true`
    pub strip_carriage_return: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_capacity: None,
            strip_carriage_return: true,
        }
    }
}
