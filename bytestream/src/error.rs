//! Error types for primitive marshalling.

use std::io;

use thiserror::Error;

/// Result type for marshalling operations.
pub type MarshalResult<T> = Result<T, MarshalError>;

/// Errors that can occur while reading or writing primitives.
///
/// Both variants carry the stream offset at which the failing operation
/// started, so a caller can tell how far into a message the failure was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarshalError {
    /// The stream ended before the requested number of bytes was available.
    #[error("unexpected end of stream at offset {offset}: needed {requested} bytes")]
    UnexpectedEof {
        /// Number of bytes requested by the operation.
        requested: usize,
        /// Stream offset at which the operation started.
        offset: u64,
    },

    /// The underlying stream failed.
    #[error("stream error at offset {offset}: {kind}")]
    Io {
        /// Kind of the underlying I/O failure.
        kind: io::ErrorKind,
        /// Stream offset at which the operation started.
        offset: u64,
    },
}

impl MarshalError {
    /// Classifies a `std::io::Error` raised while moving `requested` bytes.
    pub(crate) fn from_io(err: &io::Error, requested: usize, offset: u64) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Self::UnexpectedEof { requested, offset },
            kind => Self::Io { kind, offset },
        }
    }

    /// Returns the stream offset at which the failing operation started.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        match self {
            Self::UnexpectedEof { offset, .. } | Self::Io { offset, .. } => *offset,
        }
    }
}
