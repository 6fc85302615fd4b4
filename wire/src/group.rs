//! Repeating group dimension framing.

use std::io::{Read, Write};

use bytestream::{ByteReader, ByteWriter};

use crate::error::WireResult;
use crate::length::LengthPrefix;

/// The dimension that precedes the entries of a repeating group.
///
/// On the wire this is a `u16` entry block length followed by the entry
/// count in the group's declared count width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupDimension {
    /// Byte length of each entry's fixed block, as written by the producer.
    pub block_length: u16,
    /// Number of entries that follow.
    pub num_in_group: u32,
}

impl GroupDimension {
    /// Creates a new dimension.
    #[must_use]
    pub const fn new(block_length: u16, num_in_group: u32) -> Self {
        Self {
            block_length,
            num_in_group,
        }
    }

    /// Encoded size of a dimension whose count uses `count` width.
    #[must_use]
    pub const fn encoded_size(count: LengthPrefix) -> usize {
        2 + count.size()
    }
}

/// Writes a group dimension for `num_in_group` entries.
pub fn encode_group_dimension<W: Write>(
    block_length: u16,
    num_in_group: usize,
    count: LengthPrefix,
    writer: &mut ByteWriter<W>,
) -> WireResult<()> {
    writer.write_u16(block_length)?;
    count.write_length(writer, num_in_group)
}

/// Reads a group dimension whose count uses `count` width.
pub fn decode_group_dimension<R: Read>(
    count: LengthPrefix,
    reader: &mut ByteReader<R>,
) -> WireResult<GroupDimension> {
    let block_length = reader.read_u16()?;
    let num_in_group = count.read_length(reader)?;
    Ok(GroupDimension {
        block_length,
        num_in_group,
    })
}
