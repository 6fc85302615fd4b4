//! Versioned message encoding/decoding for the sbe codec.
//!
//! This is the main codec crate that ties together bytestream, wire, and
//! schema to encode and decode messages described by `const` schema tables.
//!
//! # Features
//!
//! - Scalar, array, enum and choice-set fields under the null/range policy
//! - Per-field version gating against the producer's acting version
//! - Forward-compatible skipping of unknown fixed-block bytes
//! - Repeating groups and variable-length data
//! - Fail-fast range checking
//!
//! # Design Principles
//!
//! - **One generic codec** - message layouts are data, not code.
//! - **No partial success** - a call either yields a whole message or an error.
//! - **Bounded decoding** - group counts and data lengths are checked against
//!   [`Limits`] before allocating.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter};
//! use codec::{decode_message, encode_message, Block, FieldValue, Limits};
//! use schema::{BlockDef, FieldDef, MessageDef, PrimitiveType, SchemaDef};
//!
//! const TICK: MessageDef = MessageDef::new(
//!     "Tick",
//!     1,
//!     BlockDef::fields(&[FieldDef::scalar("price", 1, PrimitiveType::Int64)]),
//! );
//! const SCHEMA: SchemaDef = SchemaDef::new(1, 0, "0.1", &[&TICK]);
//!
//! let block = Block {
//!     fields: vec![FieldValue::Int(1_000)],
//!     ..Block::default()
//! };
//! let mut writer = ByteWriter::new(Vec::new());
//! encode_message(&SCHEMA, &TICK, &block, &mut writer, true).unwrap();
//! let bytes = writer.into_inner();
//!
//! let mut reader = ByteReader::new(&bytes[..]);
//! let decoded = decode_message(&SCHEMA, &mut reader, true, &Limits::default()).unwrap();
//! assert_eq!(decoded.message.name, "Tick");
//! assert_eq!(decoded.block, block);
//! ```

mod body;
mod choice;
mod enums;
mod error;
mod message;
mod range;
mod scalar;
mod value;

pub use body::{decode_body, encode_body};
pub use choice::{decode_choice, encode_choice, ChoiceSet};
pub use enums::{decode_enum, encode_enum, enum_range_check};
pub use error::{
    CodecError, CodecResult, LimitKind, RangeCheckError, RangeCheckKind, ShapeKind, ValueReason,
};
pub use message::{decode_message, encode_message, resolve, DecodedMessage};
pub use range::range_check;
pub use value::{Block, FieldValue};
pub use wire::Limits;
