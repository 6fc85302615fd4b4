//! Message header types and codec.

use std::io::{Read, Write};

use bytestream::{ByteReader, ByteWriter};

use crate::error::WireResult;

/// Header size in bytes (8 total).
pub const HEADER_SIZE: usize = 2 + 2 + 2 + 2;

/// Schema version of the header composite itself.
///
/// Every header field is present since this version, so the header is never
/// version gated.
pub const HEADER_SINCE_VERSION: u16 = 0;

/// The preamble that precedes every message body.
///
/// Fields are encoded as four little-endian `u16` values in declaration
/// order: block length, template id, schema id, version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageHeader {
    /// Byte length of the fixed block that follows, as written by the producer.
    pub block_length: u16,
    /// Identifies the message type within the schema.
    pub template_id: u16,
    /// Identifies the schema the message belongs to.
    pub schema_id: u16,
    /// Schema version the producer encoded with (the acting version).
    pub version: u16,
}

impl MessageHeader {
    /// Creates a new header.
    #[must_use]
    pub const fn new(block_length: u16, template_id: u16, schema_id: u16, version: u16) -> Self {
        Self {
            block_length,
            template_id,
            schema_id,
            version,
        }
    }
}

/// Writes a message header.
pub fn encode_header<W: Write>(
    header: &MessageHeader,
    writer: &mut ByteWriter<W>,
) -> WireResult<()> {
    writer.write_u16(header.block_length)?;
    writer.write_u16(header.template_id)?;
    writer.write_u16(header.schema_id)?;
    writer.write_u16(header.version)?;
    Ok(())
}

/// Reads a message header.
pub fn decode_header<R: Read>(reader: &mut ByteReader<R>) -> WireResult<MessageHeader> {
    let block_length = reader.read_u16()?;
    let template_id = reader.read_u16()?;
    let schema_id = reader.read_u16()?;
    let version = reader.read_u16()?;
    Ok(MessageHeader {
        block_length,
        template_id,
        schema_id,
        version,
    })
}
