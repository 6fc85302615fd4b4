//! Unsigned length prefixes for variable-length data and group counts.

use std::fmt;
use std::io::{Read, Write};

use bytestream::{ByteReader, ByteWriter};

use crate::error::{WireError, WireResult};

/// Width of an unsigned length or count prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthPrefix {
    U8,
    U16,
    U32,
}

impl LengthPrefix {
    /// Encoded size of the prefix in bytes.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }

    /// Largest length the prefix can carry.
    #[must_use]
    pub const fn max_length(self) -> u64 {
        match self {
            Self::U8 => u8::MAX as u64,
            Self::U16 => u16::MAX as u64,
            Self::U32 => u32::MAX as u64,
        }
    }

    /// Writes `length` in this prefix width.
    pub fn write_length<W: Write>(
        self,
        writer: &mut ByteWriter<W>,
        length: usize,
    ) -> WireResult<()> {
        let overflow = || WireError::LengthOverflow {
            length,
            prefix: self,
            max: self.max_length(),
        };
        match self {
            Self::U8 => writer.write_u8(u8::try_from(length).map_err(|_| overflow())?)?,
            Self::U16 => writer.write_u16(u16::try_from(length).map_err(|_| overflow())?)?,
            Self::U32 => writer.write_u32(u32::try_from(length).map_err(|_| overflow())?)?,
        }
        Ok(())
    }

    /// Reads a length in this prefix width.
    pub fn read_length<R: Read>(self, reader: &mut ByteReader<R>) -> WireResult<u32> {
        let length = match self {
            Self::U8 => u32::from(reader.read_u8()?),
            Self::U16 => u32::from(reader.read_u16()?),
            Self::U32 => reader.read_u32()?,
        };
        Ok(length)
    }
}

impl fmt::Display for LengthPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
        };
        write!(f, "{name}")
    }
}
