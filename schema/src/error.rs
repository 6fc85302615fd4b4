//! Schema validation errors.

use thiserror::Error;

use crate::{FieldId, PrimitiveType, SchemaVersion, TemplateId};

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur when validating a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// Two messages share a template id.
    #[error("duplicate template id {id}")]
    DuplicateTemplateId { id: TemplateId },

    /// Two members of one block share an id.
    #[error("duplicate id {id} in block of {block}")]
    DuplicateFieldId { block: &'static str, id: FieldId },

    /// The fixed block does not fit the header's `u16` block length.
    #[error("block of {block} is {length} bytes, exceeding {max}")]
    BlockTooLong {
        block: &'static str,
        length: usize,
        max: usize,
    },

    /// A range override is empty or outside the encoding.
    #[error("field {field}: invalid bounds [{min}, {max}]")]
    InvalidBounds {
        field: &'static str,
        min: i128,
        max: i128,
    },

    /// Enumerations must use an unsigned encoding.
    #[error("enum {name}: invalid encoding {encoding}")]
    InvalidEnumEncoding {
        name: &'static str,
        encoding: PrimitiveType,
    },

    /// An ordinal does not fit the encoding or collides with the null ordinal.
    #[error("enum {name}: ordinal {ordinal} not representable")]
    EnumOrdinalOutOfRange { name: &'static str, ordinal: u64 },

    /// Two enum values share an ordinal.
    #[error("enum {name}: duplicate ordinal {ordinal}")]
    DuplicateEnumOrdinal { name: &'static str, ordinal: u64 },

    /// Choice sets must use an unsigned encoding.
    #[error("choice set {name}: invalid encoding {encoding}")]
    InvalidChoiceEncoding {
        name: &'static str,
        encoding: PrimitiveType,
    },

    /// A flag bit lies outside the encoding width.
    #[error("choice set {name}: bit {bit} outside width {width}")]
    ChoiceBitOutOfRange { name: &'static str, bit: u8, width: u32 },

    /// Two flags share a bit.
    #[error("choice set {name}: duplicate bit {bit}")]
    DuplicateChoiceBit { name: &'static str, bit: u8 },

    /// A constant does not fit its field or is not a declared enum value.
    #[error("field {field}: invalid constant {value}")]
    InvalidConstant { field: &'static str, value: i128 },

    /// Arrays must hold at least one element.
    #[error("field {field}: zero-length array")]
    ZeroLengthArray { field: &'static str },

    /// A member claims a version newer than the schema itself.
    #[error("{name}: since version {since} is newer than schema version {schema}")]
    SinceVersionTooNew {
        name: &'static str,
        since: SchemaVersion,
        schema: SchemaVersion,
    },

    /// A field is deprecated before it exists or after the schema's version.
    #[error("field {field}: deprecated in {deprecated}, since {since}, schema version {schema}")]
    InvalidDeprecation {
        field: &'static str,
        deprecated: SchemaVersion,
        since: SchemaVersion,
        schema: SchemaVersion,
    },
}
