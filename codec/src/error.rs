//! Error types for codec operations.

use bytestream::MarshalError;
use schema::{PrimitiveType, SchemaId, TemplateId};
use thiserror::Error;
use wire::WireError;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during message encoding/decoding.
///
/// Every error is terminal for the call that produced it. A failed decode
/// leaves no usable partial message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CodecError {
    /// Primitive read or write failed.
    #[error("marshal error: {0}")]
    Marshal(#[from] MarshalError),

    /// Header, group dimension or length prefix framing failed.
    #[error("wire error: {0}")]
    Wire(#[from] WireError),

    /// A field value violated its declared range.
    #[error("range check failed: {0}")]
    RangeCheck(#[from] RangeCheckError),

    /// The header names a template this schema does not define.
    #[error("unknown template id {template_id} in schema {schema_id}")]
    UnknownTemplate {
        schema_id: SchemaId,
        template_id: TemplateId,
    },

    /// The header belongs to a different schema.
    #[error("schema id mismatch: expected {expected}, found {found}")]
    SchemaMismatch { expected: SchemaId, found: SchemaId },

    /// A value cannot be encoded into its field.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: ValueReason,
    },

    /// A block instance does not match its descriptor.
    #[error("{block}: expected {expected} {kind}, found {actual}")]
    InvalidShape {
        block: &'static str,
        kind: ShapeKind,
        expected: usize,
        actual: usize,
    },

    /// A decoded count exceeded the configured limit.
    #[error("{kind} limit exceeded: {actual} > {limit}")]
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

impl CodecError {
    /// Returns `true` if the error came from the underlying stream.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Marshal(_) | Self::Wire(WireError::Marshal(_)))
    }
}

/// A field that failed its range check. Only the first violation is
/// reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field {field}: {kind}")]
pub struct RangeCheckError {
    pub field: &'static str,
    pub kind: RangeCheckKind,
}

/// What a range check rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeCheckKind {
    /// A numeric value lies outside `[min, max]`.
    #[error("value {value} outside [{min}, {max}]")]
    OutOfRange { value: i128, min: i128, max: i128 },

    /// An enum ordinal is not in the type's closed set.
    #[error("unknown {type_name} ordinal {ordinal}")]
    UnknownEnumValue {
        type_name: &'static str,
        ordinal: u64,
    },

    /// Text data is not valid UTF-8.
    #[error("invalid UTF-8 after {valid_up_to} bytes")]
    InvalidUtf8 { valid_up_to: usize },

    /// A var-data length or group count does not fit its prefix.
    #[error("length {length} exceeds prefix maximum {max}")]
    LengthOverflow { length: usize, max: u64 },

    /// A choice set raises a flag beyond the encoding's width.
    #[error("flag {bit} set outside width {width}")]
    ChoiceBitOutOfRange { bit: usize, width: u32 },
}

/// Why a value could not be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueReason {
    /// The value's kind does not match the field's kind.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The value does not fit the field's encoding.
    #[error("{value} not representable as {encoding}")]
    NotRepresentable {
        encoding: PrimitiveType,
        value: i128,
    },

    /// An array holds the wrong number of elements.
    #[error("array length {actual}, expected {expected}")]
    ArrayLength { expected: usize, actual: usize },

    /// A choice set sets a flag beyond the type's width.
    #[error("flag {bit} set outside width {width}")]
    ChoiceBitOutOfRange { bit: usize, width: u32 },
}

/// Which member list of a block mismatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeKind {
    #[error("fields")]
    Fields,
    #[error("groups")]
    Groups,
    #[error("var data fields")]
    Data,
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LimitKind {
    #[error("group entries")]
    GroupEntries,
    #[error("var data length")]
    VarDataLength,
}
