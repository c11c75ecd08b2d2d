use std::borrow::Cow;

use bstr::{ByteSlice, ByteVec};

use crate::error::{InputError, Result};

/// How a read came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// A line terminator was consumed (single-line mode only).
    Newline,
    /// The source had no more input, or failed.
    EndOfStream,
}

/// One logical unit of text read from the console.
///
/// The buffer grows by doubling and always keeps at least one spare slot
/// beyond its contents. Each read produces a fresh buffer owned by the caller;
/// a read that fails never hands out a partial one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    bytes: Vec<u8>,
    terminator: Terminator,
}

impl InputBuffer {
    pub(crate) fn with_capacity(initial: usize, limit: Option<usize>) -> Result<Self> {
        let mut initial = initial.max(2);
        if let Some(max) = limit {
            initial = initial.min(max);
        }

        let mut bytes = Vec::new();
        bytes.try_reserve_exact(initial).map_err(|err| {
            tracing::warn!(%err, initial, "could not allocate input buffer");
            InputError::AllocationFailure
        })?;

        Ok(Self {
            bytes,
            terminator: Terminator::EndOfStream,
        })
    }

    /// Appends one byte, growing first if the byte plus a spare slot would
    /// not fit.
    pub(crate) fn push(&mut self, byte: u8, limit: Option<usize>) -> Result<()> {
        debug_assert_ne!(byte, 0, "NUL bytes are filtered by the reader");
        self.reserve_next(limit)?;
        self.bytes.push(byte);
        Ok(())
    }

    fn reserve_next(&mut self, limit: Option<usize>) -> Result<()> {
        let needed = self.bytes.len() + 2;
        let capacity = self.capacity_within(limit);
        if needed <= capacity {
            return Ok(());
        }

        let mut target = capacity.saturating_mul(2).max(needed);
        if let Some(max) = limit {
            target = target.min(max);
            if target < needed {
                tracing::warn!(len = self.bytes.len(), max, "input exceeds buffer limit");
                return Err(InputError::AllocationFailure);
            }
        }

        self.bytes
            .try_reserve_exact(target - self.bytes.len())
            .map_err(|err| {
                tracing::warn!(%err, target, "could not grow input buffer");
                InputError::AllocationFailure
            })?;
        tracing::debug!(from = capacity, to = target, "grew input buffer");
        Ok(())
    }

    fn capacity_within(&self, limit: Option<usize>) -> usize {
        match limit {
            Some(max) => self.bytes.capacity().min(max),
            None => self.bytes.capacity(),
        }
    }

    pub(crate) fn strip_suffix(&mut self, byte: u8) {
        if self.bytes.last() == Some(&byte) {
            self.bytes.pop();
        }
    }

    pub(crate) fn finish(mut self, terminator: Terminator) -> Self {
        self.terminator = terminator;
        self
    }

    /// The contents as text. Invalid UTF-8 sequences are replaced with
    /// U+FFFD.
    #[must_use]
    pub fn as_str(&self) -> Cow<'_, str> {
        self.bytes.to_str_lossy()
    }

    /// The raw bytes that were read, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The first character of the contents, if any.
    #[must_use]
    pub fn first_char(&self) -> Option<char> {
        self.bytes.chars().next()
    }

    /// Length of the contents in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether nothing but (at most) a terminator was read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Currently allocated capacity in bytes. Always at least `len() + 1`
    /// once anything has been stored.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// How the read ended.
    #[must_use]
    pub fn terminator(&self) -> Terminator {
        self.terminator
    }

    /// Consumes the buffer, returning its contents as a `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.bytes.into_string_lossy()
    }
}
