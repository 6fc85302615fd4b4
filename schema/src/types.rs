//! Enumeration and choice-set type definitions.

use crate::primitive::PrimitiveType;

/// Symbolic name used for the null ordinal of every enumeration.
pub const ENUM_NULL_NAME: &str = "NULL_VAL";

/// Symbolic name used for the non-representable ordinal.
pub const ENUM_NON_REPRESENTABLE_NAME: &str = "NON_REPRESENTABLE";

/// One named value of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
    pub name: &'static str,
    pub ordinal: u64,
}

impl EnumValue {
    #[must_use]
    pub const fn new(name: &'static str, ordinal: u64) -> Self {
        Self { name, ordinal }
    }
}

/// A closed mapping from symbolic names to ordinals of a fixed width.
///
/// Besides the declared values, two ordinals are always legal on the wire:
/// the null ordinal (the encoding's null sentinel) and, when declared, the
/// non-representable ordinal meaning "a value exists but this schema version
/// has no name for it".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumType {
    pub name: &'static str,
    pub encoding: PrimitiveType,
    pub values: &'static [EnumValue],
    pub non_representable: Option<u64>,
}

impl EnumType {
    /// Creates an enumeration without a non-representable ordinal.
    #[must_use]
    pub const fn new(
        name: &'static str,
        encoding: PrimitiveType,
        values: &'static [EnumValue],
    ) -> Self {
        Self {
            name,
            encoding,
            values,
            non_representable: None,
        }
    }

    /// Declares the non-representable ordinal.
    #[must_use]
    pub const fn with_non_representable(mut self, ordinal: u64) -> Self {
        self.non_representable = Some(ordinal);
        self
    }

    /// The ordinal meaning "absent".
    #[must_use]
    pub const fn null_ordinal(&self) -> u64 {
        self.encoding.null_value() as u64
    }

    /// Returns `true` if `ordinal` is a declared value, the non-representable
    /// ordinal, or the null ordinal.
    #[must_use]
    pub fn is_declared(&self, ordinal: u64) -> bool {
        ordinal == self.null_ordinal()
            || self.non_representable == Some(ordinal)
            || self.values.iter().any(|value| value.ordinal == ordinal)
    }

    /// Looks up the symbolic name of `ordinal`.
    #[must_use]
    pub fn name_of(&self, ordinal: u64) -> Option<&'static str> {
        if let Some(value) = self.values.iter().find(|value| value.ordinal == ordinal) {
            return Some(value.name);
        }
        if self.non_representable == Some(ordinal) {
            return Some(ENUM_NON_REPRESENTABLE_NAME);
        }
        (ordinal == self.null_ordinal()).then_some(ENUM_NULL_NAME)
    }

    /// Looks up the ordinal of a declared value by name.
    #[must_use]
    pub fn ordinal_of(&self, name: &str) -> Option<u64> {
        self.values
            .iter()
            .find(|value| value.name == name)
            .map(|value| value.ordinal)
    }
}

/// One named flag of a choice set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub name: &'static str,
    pub bit: u8,
}

impl Choice {
    #[must_use]
    pub const fn new(name: &'static str, bit: u8) -> Self {
        Self { name, bit }
    }
}

/// A fixed-width bitmask of independent named flags.
///
/// The width comes from the declared encoding. Every bit pattern is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceSetType {
    pub name: &'static str,
    pub encoding: PrimitiveType,
    pub choices: &'static [Choice],
}

impl ChoiceSetType {
    #[must_use]
    pub const fn new(
        name: &'static str,
        encoding: PrimitiveType,
        choices: &'static [Choice],
    ) -> Self {
        Self {
            name,
            encoding,
            choices,
        }
    }

    /// Number of flag positions in the encoding.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.encoding.bits()
    }

    /// Looks up the bit position of a named flag.
    #[must_use]
    pub fn bit_of(&self, name: &str) -> Option<u8> {
        self.choices
            .iter()
            .find(|choice| choice.name == name)
            .map(|choice| choice.bit)
    }

    /// Looks up the flag name at `bit`.
    #[must_use]
    pub fn name_of(&self, bit: u8) -> Option<&'static str> {
        self.choices
            .iter()
            .find(|choice| choice.bit == bit)
            .map(|choice| choice.name)
    }
}
