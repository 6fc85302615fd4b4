//! Message header, group dimension and length-prefix framing for the sbe codec.
//!
//! This crate handles the framing that surrounds message bodies: the 8-byte
//! message header, repeating group dimensions, and length prefixes for
//! variable-length data. It knows nothing about the fields inside a block.
//!
//! # Design Principles
//!
//! - **Stable wire format** - Header layout is fixed and never version gated.
//! - **Bounded decoding** - Length fields are checked against [`Limits`] by the caller before allocating.
//! - **No domain knowledge** - This crate handles framing, not message semantics.

mod error;
mod group;
mod header;
mod length;
mod limits;

pub use error::{WireError, WireResult};
pub use group::{decode_group_dimension, encode_group_dimension, GroupDimension};
pub use header::{decode_header, encode_header, MessageHeader, HEADER_SINCE_VERSION, HEADER_SIZE};
pub use length::LengthPrefix;
pub use limits::Limits;
