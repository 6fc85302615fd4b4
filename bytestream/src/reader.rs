//! Byte-level reader over any `std::io::Read` stream.

use std::io::{self, Read};

use crate::error::{MarshalError, MarshalResult};

/// A little-endian primitive reader.
///
/// The reader performs no buffering of its own and consumes exactly the
/// bytes each call asks for, so the stream is left positioned directly
/// after the last value read. All failures are returned as errors; the
/// reader never panics on a short or broken stream.
#[derive(Debug)]
pub struct ByteReader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> ByteReader<R> {
    /// Creates a new `ByteReader` wrapping `inner`.
    #[must_use]
    pub const fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Returns the number of bytes consumed so far.
    #[must_use]
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Unwraps the reader, returning the underlying stream.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reads a `u8`.
    pub fn read_u8(&mut self) -> MarshalResult<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Reads an `i8`.
    pub fn read_i8(&mut self) -> MarshalResult<i8> {
        Ok(i8::from_le_bytes(self.read_array::<1>()?))
    }

    /// Reads a little-endian `u16`.
    pub fn read_u16(&mut self) -> MarshalResult<u16> {
        Ok(u16::from_le_bytes(self.read_array::<2>()?))
    }

    /// Reads a little-endian `i16`.
    pub fn read_i16(&mut self) -> MarshalResult<i16> {
        Ok(i16::from_le_bytes(self.read_array::<2>()?))
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32(&mut self) -> MarshalResult<u32> {
        Ok(u32::from_le_bytes(self.read_array::<4>()?))
    }

    /// Reads a little-endian `i32`.
    pub fn read_i32(&mut self) -> MarshalResult<i32> {
        Ok(i32::from_le_bytes(self.read_array::<4>()?))
    }

    /// Reads a little-endian `u64`.
    pub fn read_u64(&mut self) -> MarshalResult<u64> {
        Ok(u64::from_le_bytes(self.read_array::<8>()?))
    }

    /// Reads a little-endian `i64`.
    pub fn read_i64(&mut self) -> MarshalResult<i64> {
        Ok(i64::from_le_bytes(self.read_array::<8>()?))
    }

    /// Fills `buf` completely from the stream.
    pub fn read_exact_into(&mut self, buf: &mut [u8]) -> MarshalResult<()> {
        let offset = self.position;
        self.inner
            .read_exact(buf)
            .map_err(|err| MarshalError::from_io(&err, buf.len(), offset))?;
        self.position += buf.len() as u64;
        Ok(())
    }

    /// Reads exactly `len` bytes into a new buffer.
    ///
    /// Callers are expected to bound `len` before calling; the buffer is
    /// allocated up front.
    pub fn read_vec(&mut self, len: usize) -> MarshalResult<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.read_exact_into(&mut buf)?;
        Ok(buf)
    }

    /// Discards exactly `count` bytes.
    ///
    /// A stream that ends before `count` bytes were discarded is an error;
    /// the position still reflects the bytes that were consumed.
    pub fn skip(&mut self, count: u64) -> MarshalResult<()> {
        let offset = self.position;
        let copied = io::copy(&mut self.inner.by_ref().take(count), &mut io::sink())
            .map_err(|err| MarshalError::from_io(&err, usize_saturating(count), offset))?;
        self.position += copied;
        if copied < count {
            return Err(MarshalError::UnexpectedEof {
                requested: usize_saturating(count),
                offset,
            });
        }
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> MarshalResult<[u8; N]> {
        let mut out = [0u8; N];
        self.read_exact_into(&mut out)?;
        Ok(out)
    }
}

fn usize_saturating(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reader() {
        let reader = ByteReader::new(&[][..]);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = ByteReader::new(&[][..]);
        let result = reader.read_u8();
        assert!(matches!(
            result,
            Err(MarshalError::UnexpectedEof {
                requested: 1,
                offset: 0
            })
        ));
    }

    #[test]
    fn read_little_endian_integers() {
        let bytes = [
            0x01, // u8
            0xFF, // i8
            0x34, 0x12, // u16
            0xFE, 0xFF, // i16
            0x78, 0x56, 0x34, 0x12, // u32
            0x00, 0x00, 0x00, 0x80, // i32
        ];
        let mut reader = ByteReader::new(&bytes[..]);
        assert_eq!(reader.read_u8().unwrap(), 1);
        assert_eq!(reader.read_i8().unwrap(), -1);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_i16().unwrap(), -2);
        assert_eq!(reader.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(reader.read_i32().unwrap(), i32::MIN);
        assert_eq!(reader.position(), bytes.len() as u64);
    }

    #[test]
    fn read_64_bit_integers() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&u64::MAX.to_le_bytes());
        bytes.extend_from_slice(&(-42i64).to_le_bytes());
        let mut reader = ByteReader::new(&bytes[..]);
        assert_eq!(reader.read_u64().unwrap(), u64::MAX);
        assert_eq!(reader.read_i64().unwrap(), -42);
    }

    #[test]
    fn short_read_reports_offset() {
        let mut reader = ByteReader::new(&[0xAA, 0xBB, 0xCC][..]);
        assert_eq!(reader.read_u16().unwrap(), 0xBBAA);
        let err = reader.read_u32().unwrap_err();
        assert_eq!(
            err,
            MarshalError::UnexpectedEof {
                requested: 4,
                offset: 2
            }
        );
    }

    #[test]
    fn read_vec_exact() {
        let mut reader = ByteReader::new(&b"hello world"[..]);
        assert_eq!(reader.read_vec(5).unwrap(), b"hello");
        assert_eq!(reader.position(), 5);
    }

    #[test]
    fn read_vec_zero_len() {
        let mut reader = ByteReader::new(&[][..]);
        assert!(reader.read_vec(0).unwrap().is_empty());
    }

    #[test]
    fn skip_discards_exact_count() {
        let mut reader = ByteReader::new(&[1, 2, 3, 4, 5][..]);
        reader.skip(3).unwrap();
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.read_u8().unwrap(), 4);
    }

    #[test]
    fn skip_past_end_fails() {
        let mut reader = ByteReader::new(&[1, 2][..]);
        let err = reader.skip(5).unwrap_err();
        assert_eq!(
            err,
            MarshalError::UnexpectedEof {
                requested: 5,
                offset: 0
            }
        );
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn into_inner_leaves_remaining_bytes() {
        let bytes = [1u8, 2, 3];
        let mut reader = ByteReader::new(&bytes[..]);
        reader.read_u8().unwrap();
        let rest = reader.into_inner();
        assert_eq!(rest, &[2, 3]);
    }
}
