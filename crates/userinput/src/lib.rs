//! Blocking console input that comes back as validated, typed values.
//!
//! A [`LineReader`] turns any [`BufRead`](std::io::BufRead) source into owned
//! [`InputBuffer`]s, either one line at a time or everything up to
//! end-of-stream. A [`Console`] adds prompting on top and validates each line
//! into a character, an `i32`, an `f64` or a yes/no answer, reporting every
//! malformed case as a distinct [`InputError`].
//!
//! ```rust
//! use std::io::Cursor;
//! use userinput::{Console, Locale};
//!
//! let mut console = Console::new(Cursor::new("3.5\nJ\n"), Vec::new(), Locale::German);
//! assert_eq!(console.read_double("Faktor: "), Ok(3.5));
//! assert!(console.confirm("Weiter? "));
//! ```
//!
//! Buffer growth never aborts the process: a failed allocation, or one past
//! [`InputOptions::max_capacity`], releases the partial input and surfaces
//! [`InputError::AllocationFailure`].

mod buffer;
mod console;
mod error;
mod locale;
mod options;
pub mod parse;
mod reader;
mod value;
mod version;

#[cfg(test)]
mod tests;

pub use buffer::{InputBuffer, Terminator};
pub use console::Console;
pub use error::{InputError, Result};
pub use locale::{Locale, MessageCatalog, UnknownLocale};
pub use options::{DEFAULT_INITIAL_CAPACITY, InputOptions};
pub use reader::LineReader;
pub use value::{ParsedValue, ValueKind};
pub use version::{FEATURES, VersionInfo, version};
