use std::io::{self, BufRead, Read, Write};

/// A source that yields `data`, then fails with `error` on every further
/// read. The first `interrupts` calls fail with `Interrupted`.
#[derive(Debug)]
pub struct FailingSource {
    data: Vec<u8>,
    pos: usize,
    error: io::ErrorKind,
    interrupts: usize,
}

impl FailingSource {
    pub fn new(data: &str, error: io::ErrorKind) -> Self {
        Self {
            data: data.as_bytes().to_vec(),
            pos: 0,
            error,
            interrupts: 0,
        }
    }

    pub fn interrupted(mut self, times: usize) -> Self {
        self.interrupts = times;
        self
    }
}

impl Read for FailingSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = {
            let available = self.fill_buf()?;
            let n = available.len().min(buf.len());
            buf[..n].copy_from_slice(&available[..n]);
            n
        };
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for FailingSource {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.interrupts > 0 {
            self.interrupts -= 1;
            return Err(io::ErrorKind::Interrupted.into());
        }
        if self.pos < self.data.len() {
            Ok(&self.data[self.pos..])
        } else {
            Err(io::Error::new(self.error, "source failed"))
        }
    }

    fn consume(&mut self, amt: usize) {
        self.pos += amt;
    }
}

/// An output sink that rejects every write.
#[derive(Debug, Default)]
pub struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
}
