use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{
    buffer::InputBuffer,
    error::{InputError, Result},
    locale::{Locale, MessageCatalog},
    options::InputOptions,
    parse::{match_yes_no, parse_character, parse_double, parse_integer},
    reader::LineReader,
    value::{ParsedValue, ValueKind},
};

/// Prompts on an output sink and reads typed answers from an input source.
///
/// Every accessor writes its prompt, blocks for one line (or, for
/// [`read_multiline`](Self::read_multiline), the whole stream), validates it
/// and releases the intermediate buffer before returning. Only
/// [`read_yes_no`](Self::read_yes_no) retries on its own; every other failure
/// is returned to the caller, who may simply ask again.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use userinput::{Console, InputError, Locale};
///
/// let input = Cursor::new("42\nabc\ny\n");
/// let mut console = Console::new(input, Vec::new(), Locale::English);
///
/// assert_eq!(console.read_integer("Number: "), Ok(42));
/// assert_eq!(console.read_integer("Number: "), Err(InputError::InvalidInteger));
/// assert!(console.confirm("Continue? "));
/// ```
#[derive(Debug)]
pub struct Console<R, W, C = Locale> {
    reader: LineReader<R>,
    output: W,
    catalog: C,
}

impl Console<StdinLock<'static>, Stdout, Locale> {
    /// A console on the process's standard input and output.
    ///
    /// Standard input stays locked for as long as the console lives.
    #[must_use]
    pub fn stdio(locale: Locale) -> Self {
        Console::new(io::stdin().lock(), io::stdout(), locale)
    }
}

impl<R: BufRead, W: Write, C: MessageCatalog> Console<R, W, C> {
    /// Creates a console with default [`InputOptions`].
    pub fn new(input: R, output: W, catalog: C) -> Self {
        Self::with_options(input, output, catalog, InputOptions::default())
    }

    /// Creates a console with the given options.
    pub fn with_options(input: R, output: W, catalog: C, options: InputOptions) -> Self {
        Self {
            reader: LineReader::with_options(input, options),
            output,
            catalog,
        }
    }

    /// The catalog used for messages and yes/no triggers.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Splits the console back into its input and output.
    pub fn into_parts(self) -> (R, W) {
        (self.reader.into_inner(), self.output)
    }

    /// Writes the catalog text for `error` on its own line.
    ///
    /// # Errors
    ///
    /// [`InputError::General`] if the output sink fails.
    pub fn report(&mut self, error: InputError) -> Result<()> {
        let message = self.catalog.message(error);
        writeln!(self.output, "{message}")
            .and_then(|()| self.output.flush())
            .map_err(|err| {
                tracing::warn!(%err, "could not write error message");
                InputError::General
            })
    }

    fn prompt(&mut self, prompt: &str) -> Result<()> {
        self.output
            .write_all(prompt.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|err| {
                tracing::warn!(%err, "could not write prompt");
                InputError::General
            })
    }

    /// Prompts and reads one line, without its terminator.
    ///
    /// # Errors
    ///
    /// [`InputError::General`] if the prompt cannot be written,
    /// [`InputError::AllocationFailure`] if the line does not fit.
    pub fn read_line(&mut self, prompt: &str) -> Result<InputBuffer> {
        self.prompt(prompt)?;
        self.reader.read_line()
    }

    /// Prompts and reads until end-of-stream, keeping line terminators.
    ///
    /// # Errors
    ///
    /// Same as [`read_line`](Self::read_line).
    pub fn read_multiline(&mut self, prompt: &str) -> Result<InputBuffer> {
        self.prompt(prompt)?;
        self.reader.read_multiline()
    }

    /// Prompts and returns the first character of the answer line.
    ///
    /// # Errors
    ///
    /// [`InputError::EmptyInput`] for an empty line,
    /// [`InputError::EndOfStream`] if no input is left, plus those of
    /// [`read_line`](Self::read_line).
    pub fn read_character(&mut self, prompt: &str) -> Result<char> {
        let line = self.read_line(prompt)?;
        parse_character(&line)
    }

    /// Prompts and parses the answer as an `i32`.
    ///
    /// # Errors
    ///
    /// [`InputError::InvalidInteger`] or [`InputError::IntegerOutOfRange`],
    /// plus those of [`read_line`](Self::read_line).
    pub fn read_integer(&mut self, prompt: &str) -> Result<i32> {
        let line = self.read_line(prompt)?;
        parse_integer(&line.as_str())
    }

    /// Prompts and parses the answer as an `f64`.
    ///
    /// # Errors
    ///
    /// [`InputError::InvalidDouble`], plus those of
    /// [`read_line`](Self::read_line).
    pub fn read_double(&mut self, prompt: &str) -> Result<f64> {
        let line = self.read_line(prompt)?;
        parse_double(&line.as_str())
    }

    /// Asks until the answer starts with `yes` or `no`, ignoring case.
    ///
    /// Any other answer, an empty line included, writes the catalog's
    /// [`InputError::InvalidYesNo`] text and asks again. When no answer can be
    /// obtained at all (end of input, failed output) this returns `false`.
    pub fn read_yes_no(&mut self, prompt: &str, yes: char, no: char) -> bool {
        loop {
            match self.read_character(prompt) {
                Ok(answer) => {
                    if let Some(decision) = match_yes_no(answer, yes, no) {
                        return decision;
                    }
                }
                Err(InputError::EmptyInput) => {}
                Err(err) => {
                    tracing::debug!(%err, "no answer to yes/no question, assuming no");
                    return false;
                }
            }

            tracing::debug!(yes = %yes, no = %no, "answer matched neither trigger");
            if self.report(InputError::InvalidYesNo).is_err() {
                return false;
            }
        }
    }

    /// [`read_yes_no`](Self::read_yes_no) with the catalog's trigger
    /// characters.
    pub fn confirm(&mut self, prompt: &str) -> bool {
        let (yes, no) = (self.catalog.yes_char(), self.catalog.no_char());
        self.read_yes_no(prompt, yes, no)
    }

    /// Reads a value of the requested kind.
    ///
    /// [`ValueKind::Boolean`] goes through [`confirm`](Self::confirm) and
    /// therefore never fails.
    ///
    /// # Errors
    ///
    /// Those of the matching typed accessor.
    pub fn read_value(&mut self, prompt: &str, kind: ValueKind) -> Result<ParsedValue> {
        Ok(match kind {
            ValueKind::Character => ParsedValue::Character(self.read_character(prompt)?),
            ValueKind::Integer => ParsedValue::Integer(self.read_integer(prompt)?),
            ValueKind::Double => ParsedValue::Double(self.read_double(prompt)?),
            ValueKind::Boolean => ParsedValue::Boolean(self.confirm(prompt)),
        })
    }
}
