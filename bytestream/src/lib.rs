//! Fixed-width primitive marshalling for the sbe codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`], thin wrappers over
//! `std::io::Write` and `std::io::Read` that move signed and unsigned
//! integers (8 to 64 bits) and raw byte runs in one fixed byte order.
//!
//! # Design Principles
//!
//! - **One byte order** - Every value is little-endian; there is no per-call choice.
//! - **No alignment padding** - Values are packed back to back.
//! - **No domain knowledge** - Null sentinels and ranges live in higher layers.
//! - **Explicit errors** - Short reads and stream failures return [`MarshalError`].
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new(Vec::new());
//! writer.write_u16(15).unwrap();
//! writer.write_i64(-7).unwrap();
//!
//! let bytes = writer.into_inner();
//!
//! let mut reader = ByteReader::new(&bytes[..]);
//! assert_eq!(reader.read_u16().unwrap(), 15);
//! assert_eq!(reader.read_i64().unwrap(), -7);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{MarshalError, MarshalResult};
pub use reader::ByteReader;
pub use writer::ByteWriter;
