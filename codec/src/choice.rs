//! Choice-set (bitset) values and codec.

use std::hash::{Hash, Hasher};
use std::io::{Read, Write};

use bytestream::{ByteReader, ByteWriter};
use schema::ChoiceSetType;

use crate::error::{CodecError, CodecResult, ValueReason};
use crate::scalar::{read_raw, write_raw};

/// An ordered set of boolean flags indexed by bit position.
///
/// Equality and hashing look only at the raised flags. A set grown with
/// [`ChoiceSet::insert`] equals the full-width set decoded from the same
/// wire integer.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChoiceSet {
    flags: Vec<bool>,
}

impl ChoiceSet {
    /// Creates a set with no flags raised.
    #[must_use]
    pub fn empty(width: u32) -> Self {
        Self {
            flags: vec![false; width as usize],
        }
    }

    /// Creates a set for `choice_type` with no flags raised.
    #[must_use]
    pub fn empty_for(choice_type: &ChoiceSetType) -> Self {
        Self::empty(choice_type.width())
    }

    /// Expands a wire integer into one flag per bit in `0..width`.
    #[must_use]
    pub fn from_raw(raw: u64, width: u32) -> Self {
        Self {
            flags: (0..width).map(|bit| (raw >> bit) & 1 == 1).collect(),
        }
    }

    /// Builds a set from explicit flags, lowest bit first.
    #[must_use]
    pub fn from_flags(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    /// Builds a set for `choice_type` with the named flags raised.
    ///
    /// Returns `None` if a name is not declared by the type.
    #[must_use]
    pub fn from_names(choice_type: &ChoiceSetType, names: &[&str]) -> Option<Self> {
        let mut set = Self::empty_for(choice_type);
        for name in names {
            set.insert(usize::from(choice_type.bit_of(name)?));
        }
        Some(set)
    }

    /// Number of flag positions.
    #[must_use]
    pub fn width(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn contains(&self, bit: usize) -> bool {
        self.flags.get(bit).copied().unwrap_or(false)
    }

    /// Raises the flag at `bit`, growing the set if needed.
    pub fn insert(&mut self, bit: usize) {
        if bit >= self.flags.len() {
            self.flags.resize(bit + 1, false);
        }
        self.flags[bit] = true;
    }

    /// Clears the flag at `bit`.
    pub fn remove(&mut self, bit: usize) {
        if let Some(flag) = self.flags.get_mut(bit) {
            *flag = false;
        }
    }

    #[must_use]
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Bit positions of the raised flags, ascending.
    pub fn iter_set(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(bit, &flag)| flag.then_some(bit))
    }

    /// Names of the raised flags declared by `choice_type`, by bit position.
    #[must_use]
    pub fn names(&self, choice_type: &ChoiceSetType) -> Vec<&'static str> {
        self.iter_set()
            .filter_map(|bit| u8::try_from(bit).ok())
            .filter_map(|bit| choice_type.name_of(bit))
            .collect()
    }

    /// ORs `1 << bit` for every raised flag.
    pub fn to_raw(&self, width: u32) -> Result<u64, ValueReason> {
        let mut raw = 0u64;
        for bit in self.iter_set() {
            if bit >= width as usize {
                return Err(ValueReason::ChoiceBitOutOfRange { bit, width });
            }
            raw |= 1 << bit;
        }
        Ok(raw)
    }
}

impl PartialEq for ChoiceSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter_set().eq(other.iter_set())
    }
}

impl Eq for ChoiceSet {}

impl Hash for ChoiceSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for bit in self.iter_set() {
            bit.hash(state);
        }
    }
}

/// Writes `set` in the width of `choice_type`'s encoding.
pub fn encode_choice<W: Write>(
    choice_type: &ChoiceSetType,
    set: &ChoiceSet,
    field: &'static str,
    writer: &mut ByteWriter<W>,
) -> CodecResult<()> {
    let raw = set
        .to_raw(choice_type.width())
        .map_err(|reason| CodecError::InvalidValue { field, reason })?;
    write_raw(choice_type.encoding, raw, writer)?;
    Ok(())
}

/// Reads a set in the width of `choice_type`'s encoding. Every bit pattern
/// is legal.
pub fn decode_choice<R: Read>(
    choice_type: &ChoiceSetType,
    reader: &mut ByteReader<R>,
) -> CodecResult<ChoiceSet> {
    let raw = read_raw(choice_type.encoding, reader)?;
    Ok(ChoiceSet::from_raw(raw, choice_type.width()))
}
