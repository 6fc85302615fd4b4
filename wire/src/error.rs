//! Error types for wire framing operations.

use bytestream::MarshalError;
use thiserror::Error;

use crate::length::LengthPrefix;

/// Result type for wire framing operations.
pub type WireResult<T> = Result<T, WireError>;

/// Errors that can occur while framing headers, group dimensions and
/// length prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum WireError {
    /// Underlying primitive read or write failed.
    #[error("marshal error: {0}")]
    Marshal(#[from] MarshalError),

    /// A length or count does not fit the declared prefix width.
    #[error("length {length} does not fit a {prefix} prefix (max {max})")]
    LengthOverflow {
        length: usize,
        prefix: LengthPrefix,
        max: u64,
    },
}
