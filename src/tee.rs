//! Stream tee adapter.

use std::io::{self, Read, Write};

/// Reader that copies every byte read from `R` into the side writer `W`.
///
/// Reading through the tee advances the primary consumer and the side copy
/// in lockstep, so after the inner stream is exhausted the side writer holds
/// exactly the bytes that were read, even if a later read failed.
#[derive(Debug)]
pub struct TeeReader<R, W> {
    inner: R,
    side: W,
}

impl<R, W> TeeReader<R, W> {
    /// Wrap `inner`, mirroring all bytes read into `side`.
    pub fn new(inner: R, side: W) -> Self {
        Self { inner, side }
    }

    /// The side writer seen so far.
    pub fn side(&self) -> &W {
        &self.side
    }

    /// Unwrap into the inner reader and the side writer.
    pub fn into_parts(self) -> (R, W) {
        (self.inner, self.side)
    }
}

impl<R: Read, W: Write> Read for TeeReader<R, W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.side.write_all(&buf[..n])?;
        }
        Ok(n)
    }
}
