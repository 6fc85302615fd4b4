//! Message body encoding/decoding.
//!
//! A body is laid out as the fixed block (fields in declared order, constants
//! omitted), then each repeating group (dimension followed by entries), then
//! each var-data field (length prefix followed by bytes).

use std::io::{Read, Write};

use bytestream::{ByteReader, ByteWriter};
use schema::{BlockDef, FieldDef, FieldKind, PrimitiveType, SchemaDef, SchemaVersion};
use tracing::trace;
use wire::{decode_group_dimension, encode_group_dimension, Limits};

use crate::choice::{decode_choice, encode_choice};
use crate::enums::{decode_enum, encode_enum};
use crate::error::{CodecError, CodecResult, LimitKind, ValueReason};
use crate::range::{check_block, check_shape};
use crate::scalar::{read_raw, to_raw, to_value, write_raw};
use crate::value::{expected_kind_name, scalar_from_raw, Block, FieldValue};

/// Encodes a body at the schema's own version.
///
/// With `do_range_check`, the block is validated as an instance of the
/// current schema before any byte is written.
pub fn encode_body<W: Write>(
    schema: &SchemaDef,
    def: &BlockDef,
    block: &Block,
    writer: &mut ByteWriter<W>,
    do_range_check: bool,
) -> CodecResult<()> {
    if do_range_check {
        check_block(schema, "body", def, block, schema.version)?;
    }
    write_block("body", def, block, writer)
}

/// Decodes a body written under `acting_version` with a fixed block of
/// `block_length` bytes.
///
/// Members introduced after `acting_version` take their null values and
/// consume no bytes. When the producer is newer than this schema and its
/// fixed block is longer, the unknown trailing bytes are skipped so the
/// stream stays aligned.
pub fn decode_body<R: Read>(
    schema: &SchemaDef,
    def: &BlockDef,
    reader: &mut ByteReader<R>,
    acting_version: SchemaVersion,
    block_length: u16,
    do_range_check: bool,
    limits: &Limits,
) -> CodecResult<Block> {
    let ctx = DecodeContext {
        schema,
        acting_version,
        limits,
    };
    let block = ctx.read_block("body", def, reader, block_length)?;
    if do_range_check {
        check_block(schema, "body", def, &block, acting_version)?;
    }
    Ok(block)
}

pub(crate) fn write_block<W: Write>(
    name: &'static str,
    def: &BlockDef,
    block: &Block,
    writer: &mut ByteWriter<W>,
) -> CodecResult<()> {
    check_shape(name, def, block)?;

    for (field, value) in def.fields.iter().zip(&block.fields) {
        if !field.is_constant() {
            write_field(field, value, writer)?;
        }
    }

    for (group, entries) in def.groups.iter().zip(&block.groups) {
        encode_group_dimension(group.block.block_length(), entries.len(), group.count, writer)?;
        for entry in entries {
            write_block(group.name, &group.block, entry, writer)?;
        }
    }

    for (data_def, bytes) in def.data.iter().zip(&block.data) {
        data_def.length.write_length(writer, bytes.len())?;
        writer.write_bytes(bytes)?;
    }
    Ok(())
}

fn write_field<W: Write>(
    field: &FieldDef,
    value: &FieldValue,
    writer: &mut ByteWriter<W>,
) -> CodecResult<()> {
    match (field.kind, value) {
        (FieldKind::Scalar(ty), FieldValue::Int(v)) if ty.is_signed() => {
            write_element(field, ty, i128::from(*v), writer)
        }
        (FieldKind::Scalar(ty), FieldValue::UInt(v)) if !ty.is_signed() => {
            write_element(field, ty, i128::from(*v), writer)
        }
        (FieldKind::Array(ty, len), FieldValue::IntArray(values)) if ty.is_signed() => {
            check_array_len(field, len, values.len())?;
            values
                .iter()
                .try_for_each(|&v| write_element(field, ty, i128::from(v), writer))
        }
        (FieldKind::Array(ty, len), FieldValue::UIntArray(values)) if !ty.is_signed() => {
            check_array_len(field, len, values.len())?;
            values
                .iter()
                .try_for_each(|&v| write_element(field, ty, i128::from(v), writer))
        }
        (FieldKind::Enum(enum_type), FieldValue::Enum(ordinal)) => {
            encode_enum(enum_type, *ordinal, field.name, writer)
        }
        (FieldKind::Choice(choice_type), FieldValue::Choice(set)) => {
            encode_choice(choice_type, set, field.name, writer)
        }
        _ => Err(CodecError::InvalidValue {
            field: field.name,
            reason: ValueReason::TypeMismatch {
                expected: expected_kind_name(field.kind),
                found: value.kind_name(),
            },
        }),
    }
}

fn write_element<W: Write>(
    field: &FieldDef,
    ty: PrimitiveType,
    value: i128,
    writer: &mut ByteWriter<W>,
) -> CodecResult<()> {
    let raw = to_raw(ty, value).ok_or(CodecError::InvalidValue {
        field: field.name,
        reason: ValueReason::NotRepresentable {
            encoding: ty,
            value,
        },
    })?;
    write_raw(ty, raw, writer)?;
    Ok(())
}

fn check_array_len(field: &FieldDef, len: u16, actual: usize) -> CodecResult<()> {
    let expected = usize::from(len);
    if expected == actual {
        return Ok(());
    }
    Err(CodecError::InvalidValue {
        field: field.name,
        reason: ValueReason::ArrayLength { expected, actual },
    })
}

struct DecodeContext<'a> {
    schema: &'a SchemaDef,
    acting_version: SchemaVersion,
    limits: &'a Limits,
}

impl DecodeContext<'_> {
    fn read_block<R: Read>(
        &self,
        name: &'static str,
        def: &BlockDef,
        reader: &mut ByteReader<R>,
        block_length: u16,
    ) -> CodecResult<Block> {
        let mut fields = Vec::with_capacity(def.fields.len());
        for field in def.fields {
            let value = if field.is_constant() || !field.in_acting_version(self.acting_version) {
                FieldValue::null_for(field)
            } else {
                read_field(field, reader)?
            };
            fields.push(value);
        }

        let own_length = def.block_length();
        if self.acting_version > self.schema.version && block_length > own_length {
            let skip = block_length - own_length;
            trace!(block = name, skip, "skipping unknown fixed-block bytes");
            reader.skip(u64::from(skip))?;
        }

        let mut groups = Vec::with_capacity(def.groups.len());
        for group in def.groups {
            if !group.in_acting_version(self.acting_version) {
                groups.push(Vec::new());
                continue;
            }
            let dim = decode_group_dimension(group.count, reader)?;
            let count = dim.num_in_group as usize;
            trace!(
                group = group.name,
                block_length = dim.block_length,
                count,
                "group dimension"
            );
            if count > self.limits.max_group_entries {
                return Err(CodecError::LimitsExceeded {
                    kind: LimitKind::GroupEntries,
                    limit: self.limits.max_group_entries,
                    actual: count,
                });
            }
            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                entries.push(self.read_block(group.name, &group.block, reader, dim.block_length)?);
            }
            groups.push(entries);
        }

        let mut data = Vec::with_capacity(def.data.len());
        for data_def in def.data {
            if !data_def.in_acting_version(self.acting_version) {
                data.push(Vec::new());
                continue;
            }
            let len = data_def.length.read_length(reader)? as usize;
            if len > self.limits.max_var_data_len {
                return Err(CodecError::LimitsExceeded {
                    kind: LimitKind::VarDataLength,
                    limit: self.limits.max_var_data_len,
                    actual: len,
                });
            }
            data.push(reader.read_vec(len)?);
        }

        Ok(Block {
            fields,
            groups,
            data,
        })
    }
}

fn read_field<R: Read>(field: &FieldDef, reader: &mut ByteReader<R>) -> CodecResult<FieldValue> {
    Ok(match field.kind {
        FieldKind::Scalar(ty) => scalar_from_raw(ty, read_raw(ty, reader)?),
        FieldKind::Array(ty, len) => {
            let mut values = Vec::with_capacity(usize::from(len));
            for _ in 0..len {
                values.push(to_value(ty, read_raw(ty, reader)?));
            }
            array_from_values(ty, &values)
        }
        FieldKind::Enum(enum_type) => FieldValue::Enum(decode_enum(enum_type, reader)?),
        FieldKind::Choice(choice_type) => FieldValue::Choice(decode_choice(choice_type, reader)?),
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn array_from_values(ty: PrimitiveType, values: &[i128]) -> FieldValue {
    if ty.is_signed() {
        FieldValue::IntArray(values.iter().map(|&v| v as i64).collect())
    } else {
        FieldValue::UIntArray(values.iter().map(|&v| v as u64).collect())
    }
}
