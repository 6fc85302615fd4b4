//! Primitive read/write by declared encoding.
//!
//! Values travel as raw bit patterns zero-extended to `u64` and are widened
//! to `i128` (sign-extended for signed encodings) only when compared against
//! bounds or handed to the caller.

use std::io::{Read, Write};

use bytestream::{ByteReader, ByteWriter, MarshalResult};
use schema::PrimitiveType;

const fn mask(ty: PrimitiveType) -> u64 {
    if ty.bits() == 64 {
        u64::MAX
    } else {
        (1 << ty.bits()) - 1
    }
}

/// Reads one element of `ty` as its raw bit pattern.
pub(crate) fn read_raw<R: Read>(ty: PrimitiveType, reader: &mut ByteReader<R>) -> MarshalResult<u64> {
    Ok(match ty.size() {
        1 => u64::from(reader.read_u8()?),
        2 => u64::from(reader.read_u16()?),
        4 => u64::from(reader.read_u32()?),
        _ => reader.read_u64()?,
    })
}

/// Writes the low `ty.size()` bytes of `raw`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn write_raw<W: Write>(
    ty: PrimitiveType,
    raw: u64,
    writer: &mut ByteWriter<W>,
) -> MarshalResult<()> {
    match ty.size() {
        1 => writer.write_u8(raw as u8),
        2 => writer.write_u16(raw as u16),
        4 => writer.write_u32(raw as u32),
        _ => writer.write_u64(raw),
    }
}

/// Interprets a raw bit pattern as a value of `ty`.
pub(crate) const fn to_value(ty: PrimitiveType, raw: u64) -> i128 {
    let raw = raw & mask(ty);
    if ty.is_signed() {
        let shift = 128 - ty.bits();
        ((raw as i128) << shift) >> shift
    } else {
        raw as i128
    }
}

/// Converts a value to the bit pattern of `ty`, or `None` if it does not fit.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub(crate) const fn to_raw(ty: PrimitiveType, value: i128) -> Option<u64> {
    if ty.can_hold(value) {
        Some((value as u64) & mask(ty))
    } else {
        None
    }
}
