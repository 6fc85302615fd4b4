//! Introspection and debugging tools for the sbe codec.
//!
//! This crate provides utilities for inspecting and understanding captured
//! messages:
//!
//! - Summarize the header and compare block lengths against the schema
//! - Decode bodies into JSON with enum and choice names resolved
//! - Decode framed messages nested inside opaque var data
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

use std::fmt::Write as _;

use anyhow::{bail, Context, Result};
use bytestream::ByteReader;
use codec::{decode_message, Block, ChoiceSet, FieldValue, Limits};
use schema::{BlockDef, FieldDef, FieldKind, SchemaDef, VarDataDef};
use serde::Serialize;
use serde_json::{Map, Value};
use wire::{decode_header, MessageHeader, HEADER_SIZE};

/// Header-level summary of one captured message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub header: MessageHeader,
    /// Resolved message name, if the schema knows the template.
    pub message: Option<&'static str>,
    /// Fixed block length this schema declares for the template.
    pub schema_block_length: Option<u16>,
    /// Total capture size in bytes.
    pub total_len: usize,
}

impl InspectReport {
    /// Bytes following the header.
    #[must_use]
    pub const fn body_len(&self) -> usize {
        self.total_len.saturating_sub(HEADER_SIZE)
    }

    /// Whether the producer wrote a fixed block of a different length.
    #[must_use]
    pub fn block_length_differs(&self) -> bool {
        self.schema_block_length
            .is_some_and(|len| len != self.header.block_length)
    }
}

/// Reads the header of `bytes` and resolves it against `schema` without
/// decoding the body.
pub fn inspect_message(bytes: &[u8], schema: &SchemaDef) -> Result<InspectReport> {
    let header = decode_header(&mut ByteReader::new(bytes)).context("decode header")?;
    let def = (header.schema_id == schema.id)
        .then(|| schema.message(header.template_id))
        .flatten();
    Ok(InspectReport {
        header,
        message: def.map(|def| def.name),
        schema_block_length: def.map(schema::MessageDef::block_length),
        total_len: bytes.len(),
    })
}

/// A fully decoded message rendered for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedJson {
    pub message: &'static str,
    pub header: MessageHeader,
    /// Bytes consumed by header and body.
    pub consumed: u64,
    /// Trailing bytes not claimed by the message.
    pub trailing: usize,
    pub body: Value,
    /// Positional decoded form, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Block>,
}

/// Options for [`decode_message_json`].
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub range_check: bool,
    /// Attempt to decode non-text var data as framed messages of the same schema.
    pub nested: bool,
    /// Include the positional [`Block`] alongside the named JSON body.
    pub raw: bool,
    pub limits: Limits,
}

/// Decodes one framed message from the start of `bytes`.
pub fn decode_message_json(
    bytes: &[u8],
    schema: &SchemaDef,
    options: &DecodeOptions,
) -> Result<DecodedJson> {
    let mut reader = ByteReader::new(bytes);
    let decoded = decode_message(schema, &mut reader, options.range_check, &options.limits)
        .context("decode message")?;
    let consumed = reader.position();
    let body = block_to_json(schema, &decoded.message.block, &decoded.block, options);
    Ok(DecodedJson {
        message: decoded.message.name,
        header: decoded.header,
        consumed,
        trailing: bytes.len().saturating_sub(usize::try_from(consumed)?),
        body,
        raw: options.raw.then_some(decoded.block),
    })
}

/// Renders a block as a JSON object keyed by member name.
pub fn block_to_json(
    schema: &SchemaDef,
    def: &BlockDef,
    block: &Block,
    options: &DecodeOptions,
) -> Value {
    let mut object = Map::new();
    for (field, value) in def.fields.iter().zip(&block.fields) {
        object.insert(field.name.to_string(), field_to_json(field, value));
    }
    for (group, entries) in def.groups.iter().zip(&block.groups) {
        let entries = entries
            .iter()
            .map(|entry| block_to_json(schema, &group.block, entry, options))
            .collect();
        object.insert(group.name.to_string(), Value::Array(entries));
    }
    for (data_def, bytes) in def.data.iter().zip(&block.data) {
        object.insert(
            data_def.name.to_string(),
            data_to_json(schema, data_def, bytes, options),
        );
    }
    Value::Object(object)
}

fn field_to_json(field: &FieldDef, value: &FieldValue) -> Value {
    let is_null = !field.is_constant() && *value == FieldValue::null_for(field);
    match (field.kind, value) {
        (FieldKind::Choice(choice_type), FieldValue::Choice(set)) => choice_to_json(choice_type, set),
        (_, _) if is_null => Value::Null,
        (FieldKind::Enum(enum_type), FieldValue::Enum(ordinal)) => enum_type
            .name_of(*ordinal)
            .map_or_else(|| Value::from(*ordinal), Value::from),
        (_, FieldValue::Int(v)) => Value::from(*v),
        (_, FieldValue::UInt(v)) | (_, FieldValue::Enum(v)) => Value::from(*v),
        (_, FieldValue::IntArray(values)) => Value::from(values.clone()),
        (_, FieldValue::UIntArray(values)) => Value::from(values.clone()),
        (_, FieldValue::Choice(set)) => Value::from(set.iter_set().collect::<Vec<_>>()),
    }
}

fn choice_to_json(choice_type: &schema::ChoiceSetType, set: &ChoiceSet) -> Value {
    set.iter_set()
        .map(|bit| {
            u8::try_from(bit)
                .ok()
                .and_then(|bit| choice_type.name_of(bit))
                .map_or_else(|| Value::from(bit), Value::from)
        })
        .collect()
}

fn data_to_json(
    schema: &SchemaDef,
    def: &VarDataDef,
    bytes: &[u8],
    options: &DecodeOptions,
) -> Value {
    if def.is_utf8() {
        if let Ok(text) = std::str::from_utf8(bytes) {
            return Value::from(text);
        }
    } else if options.nested && bytes.len() >= HEADER_SIZE {
        let inner = DecodeOptions {
            raw: false,
            ..options.clone()
        };
        if let Ok(decoded) = decode_message_json(bytes, schema, &inner) {
            if decoded.trailing == 0 {
                let mut object = Map::new();
                object.insert("message".to_string(), Value::from(decoded.message));
                object.insert("body".to_string(), decoded.body);
                return Value::Object(object);
            }
        }
    }
    Value::from(to_hex(bytes))
}

/// Formats bytes as lowercase hex without separators.
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Parses hex text, ignoring whitespace and an optional `0x` prefix per token.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let digits: String = text
        .split_whitespace()
        .map(|token| token.trim_start_matches("0x"))
        .collect();
    if !digits.is_ascii() {
        bail!("non-ASCII characters in hex input");
    }
    if digits.len() % 2 != 0 {
        bail!("odd number of hex digits ({})", digits.len());
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .with_context(|| format!("invalid hex byte {:?}", &digits[i..i + 2]))
        })
        .collect()
}

/// Renders a decoded message as indented `name: value` lines.
#[must_use]
pub fn format_decode_pretty(decoded: &DecodedJson) -> String {
    let header = decoded.header;
    let mut out = format!(
        "{} (template {}, schema {} v{}, block {} bytes, {} bytes consumed)\n",
        decoded.message,
        header.template_id,
        header.schema_id,
        header.version,
        header.block_length,
        decoded.consumed
    );
    if decoded.trailing > 0 {
        let _ = writeln!(out, "trailing: {} bytes", decoded.trailing);
    }
    write_pretty(&mut out, &decoded.body, 1);
    out
}

fn write_pretty(out: &mut String, value: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(object) => {
            for (name, member) in object {
                match member {
                    Value::Object(_) => {
                        let _ = writeln!(out, "{indent}{name}:");
                        write_pretty(out, member, depth + 1);
                    }
                    Value::Array(entries) if entries.iter().all(Value::is_object) => {
                        let _ = writeln!(out, "{indent}{name}: [{}]", entries.len());
                        for (i, entry) in entries.iter().enumerate() {
                            let _ = writeln!(out, "{indent}  [{i}]");
                            write_pretty(out, entry, depth + 2);
                        }
                    }
                    _ => {
                        let _ = writeln!(out, "{indent}{name}: {member}");
                    }
                }
            }
        }
        other => {
            let _ = writeln!(out, "{indent}{other}");
        }
    }
}
