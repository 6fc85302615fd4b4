//! Header-framed message encoding/decoding and template dispatch.

use std::io::{Read, Write};

use bytestream::{ByteReader, ByteWriter};
use schema::{MessageDef, SchemaDef};
use tracing::debug;
use wire::{decode_header, encode_header, Limits, MessageHeader};

use crate::body::{decode_body, write_block};
use crate::error::{CodecError, CodecResult};
use crate::range::check_block;
use crate::value::Block;

/// A message decoded from the wire along with the header that framed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub header: MessageHeader,
    pub message: &'static MessageDef,
    pub block: Block,
}

impl DecodedMessage {
    /// The schema version the producer encoded with.
    #[must_use]
    pub const fn acting_version(&self) -> u16 {
        self.header.version
    }
}

/// Writes the header for `def` followed by its body.
///
/// The header always carries this schema's id and version and the
/// message's own block length. With `do_range_check`, validation runs
/// before the header is written.
pub fn encode_message<W: Write>(
    schema: &SchemaDef,
    def: &MessageDef,
    block: &Block,
    writer: &mut ByteWriter<W>,
    do_range_check: bool,
) -> CodecResult<()> {
    if do_range_check {
        check_block(schema, def.name, &def.block, block, schema.version)?;
    }
    encode_header(&schema.header_for(def), writer)?;
    write_block(def.name, &def.block, block, writer)
}

/// Reads a header and dispatches to the body codec of its template.
///
/// The header's version becomes the body's acting version and its block
/// length tells the body codec how many fixed-block bytes were written.
pub fn decode_message<R: Read>(
    schema: &SchemaDef,
    reader: &mut ByteReader<R>,
    do_range_check: bool,
    limits: &Limits,
) -> CodecResult<DecodedMessage> {
    let header = decode_header(reader)?;
    let message = resolve(schema, &header)?;
    debug!(
        template_id = header.template_id,
        message = message.name,
        version = header.version,
        block_length = header.block_length,
        "decoding message"
    );
    let block = decode_body(
        schema,
        &message.block,
        reader,
        header.version,
        header.block_length,
        do_range_check,
        limits,
    )?;
    Ok(DecodedMessage {
        header,
        message,
        block,
    })
}

/// Resolves the message definition a header refers to.
pub fn resolve(schema: &SchemaDef, header: &MessageHeader) -> CodecResult<&'static MessageDef> {
    if header.schema_id != schema.id {
        return Err(CodecError::SchemaMismatch {
            expected: schema.id,
            found: header.schema_id,
        });
    }
    schema
        .message(header.template_id)
        .ok_or(CodecError::UnknownTemplate {
            schema_id: header.schema_id,
            template_id: header.template_id,
        })
}
