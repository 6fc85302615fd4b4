//! Enumeration codec and ordinal range check.

use std::io::{Read, Write};

use bytestream::{ByteReader, ByteWriter};
use schema::{EnumType, SchemaVersion};

use crate::error::{CodecError, CodecResult, RangeCheckKind, ValueReason};
use crate::scalar::{read_raw, to_raw, write_raw};

/// Writes `ordinal` verbatim in the enum's encoding. No membership check.
pub fn encode_enum<W: Write>(
    enum_type: &EnumType,
    ordinal: u64,
    field: &'static str,
    writer: &mut ByteWriter<W>,
) -> CodecResult<()> {
    let raw = to_raw(enum_type.encoding, i128::from(ordinal)).ok_or(CodecError::InvalidValue {
        field,
        reason: ValueReason::NotRepresentable {
            encoding: enum_type.encoding,
            value: i128::from(ordinal),
        },
    })?;
    write_raw(enum_type.encoding, raw, writer)?;
    Ok(())
}

/// Reads an ordinal verbatim. Validation is deferred to the range check.
pub fn decode_enum<R: Read>(enum_type: &EnumType, reader: &mut ByteReader<R>) -> CodecResult<u64> {
    Ok(read_raw(enum_type.encoding, reader)?)
}

/// Checks `ordinal` against the enum's closed set.
///
/// Payloads from a producer newer than `schema_version` may carry ordinals
/// this schema does not name, so the check is skipped when
/// `acting_version > schema_version`.
pub fn enum_range_check(
    enum_type: &EnumType,
    ordinal: u64,
    acting_version: SchemaVersion,
    schema_version: SchemaVersion,
) -> Result<(), RangeCheckKind> {
    if acting_version > schema_version || enum_type.is_declared(ordinal) {
        return Ok(());
    }
    Err(RangeCheckKind::UnknownEnumValue {
        type_name: enum_type.name,
        ordinal,
    })
}
