//! Byte-level writer over any `std::io::Write` stream.

use std::io::Write;

use crate::error::{MarshalError, MarshalResult};

const ZERO_CHUNK: [u8; 64] = [0u8; 64];

/// A little-endian primitive writer.
///
/// Every write goes straight to the wrapped stream; the writer only keeps a
/// running count of bytes produced.
#[derive(Debug)]
pub struct ByteWriter<W> {
    inner: W,
    position: u64,
}

impl<W: Write> ByteWriter<W> {
    /// Creates a new `ByteWriter` wrapping `inner`.
    #[must_use]
    pub const fn new(inner: W) -> Self {
        Self { inner, position: 0 }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Unwraps the writer, returning the underlying stream.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Writes a `u8`.
    pub fn write_u8(&mut self, value: u8) -> MarshalResult<()> {
        self.write_bytes(&[value])
    }

    /// Writes an `i8`.
    pub fn write_i8(&mut self, value: i8) -> MarshalResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian `u16`.
    pub fn write_u16(&mut self, value: u16) -> MarshalResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian `i16`.
    pub fn write_i16(&mut self, value: i16) -> MarshalResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian `u32`.
    pub fn write_u32(&mut self, value: u32) -> MarshalResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian `i32`.
    pub fn write_i32(&mut self, value: i32) -> MarshalResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian `u64`.
    pub fn write_u64(&mut self, value: u64) -> MarshalResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian `i64`.
    pub fn write_i64(&mut self, value: i64) -> MarshalResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes all of `bytes` to the stream.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> MarshalResult<()> {
        let offset = self.position;
        self.inner
            .write_all(bytes)
            .map_err(|err| MarshalError::from_io(&err, bytes.len(), offset))?;
        self.position += bytes.len() as u64;
        Ok(())
    }

    /// Writes `count` zero bytes.
    pub fn write_zeros(&mut self, count: usize) -> MarshalResult<()> {
        let mut remaining = count;
        while remaining > 0 {
            let chunk = remaining.min(ZERO_CHUNK.len());
            self.write_bytes(&ZERO_CHUNK[..chunk])?;
            remaining -= chunk;
        }
        Ok(())
    }
}
