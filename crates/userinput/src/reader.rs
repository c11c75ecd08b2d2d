use std::io::{self, BufRead};

use crate::{
    buffer::{InputBuffer, Terminator},
    error::{InputError, Result},
    options::InputOptions,
};

const NEWLINE: u8 = b'\n';
const CARRIAGE_RETURN: u8 = b'\r';

/// Where a read stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// At the first line terminator (dropped) or end-of-stream.
    Line,
    /// At end-of-stream only; terminators are kept.
    Multiline,
}

/// Turns a blocking byte source into owned [`InputBuffer`]s.
///
/// The reader keeps no state between calls besides the source itself. Read
/// errors other than [`io::ErrorKind::Interrupted`] end the current read as
/// if the stream had ended.
#[derive(Debug)]
pub struct LineReader<R> {
    source: R,
    options: InputOptions,
}

impl<R: BufRead> LineReader<R> {
    /// Creates a reader with default [`InputOptions`].
    pub fn new(source: R) -> Self {
        Self::with_options(source, InputOptions::default())
    }

    /// Creates a reader with the given options.
    pub fn with_options(source: R, options: InputOptions) -> Self {
        Self { source, options }
    }

    /// The options this reader was created with.
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Reads up to the next line terminator, which is not included.
    ///
    /// Immediate end-of-stream yields an empty buffer, not an error.
    ///
    /// # Errors
    ///
    /// [`InputError::AllocationFailure`] if the buffer cannot grow. The rest
    /// of the offending line is discarded so the next read starts fresh.
    pub fn read_line(&mut self) -> Result<InputBuffer> {
        self.read(Mode::Line)
    }

    /// Reads everything up to end-of-stream, line terminators included.
    ///
    /// # Errors
    ///
    /// [`InputError::AllocationFailure`] if the buffer cannot grow. The
    /// remaining input is discarded.
    pub fn read_multiline(&mut self) -> Result<InputBuffer> {
        self.read(Mode::Multiline)
    }

    /// Gives the source back.
    pub fn into_inner(self) -> R {
        self.source
    }

    fn read(&mut self, mode: Mode) -> Result<InputBuffer> {
        let limit = self.options.max_capacity;
        let mut buffer = InputBuffer::with_capacity(self.options.initial_capacity, limit)?;

        let terminator = loop {
            match self.next_byte() {
                None => break Terminator::EndOfStream,
                Some(NEWLINE) if mode == Mode::Line => break Terminator::Newline,
                Some(0) => {}
                Some(byte) => {
                    if let Err(err) = buffer.push(byte, limit) {
                        // the partial buffer is dropped here
                        self.discard_rest(mode);
                        return Err(err);
                    }
                }
            }
        };

        if mode == Mode::Line && self.options.strip_carriage_return {
            buffer.strip_suffix(CARRIAGE_RETURN);
        }

        let buffer = buffer.finish(terminator);
        tracing::trace!(len = buffer.len(), ?terminator, ?mode, "read input");
        Ok(buffer)
    }

    fn discard_rest(&mut self, mode: Mode) {
        loop {
            match self.next_byte() {
                None => return,
                Some(NEWLINE) if mode == Mode::Line => return,
                Some(_) => {}
            }
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        loop {
            let byte = match self.source.fill_buf() {
                Ok(available) => available.first().copied(),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    tracing::warn!(%err, "read failed, treating as end of stream");
                    return None;
                }
            };
            if byte.is_some() {
                self.source.consume(1);
            }
            return byte;
        }
    }
}
