//! Primitive encoding types and their null/range policy.

use std::fmt;

/// A fixed-width integer encoding.
///
/// Each type reserves one bit pattern as its null sentinel: the type minimum
/// for signed types and the type maximum for unsigned types. The remaining
/// values form the legal range `[min_value, max_value]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
}

impl PrimitiveType {
    /// Encoded size in bytes.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 => 2,
            Self::Int32 | Self::UInt32 => 4,
            Self::Int64 | Self::UInt64 => 8,
        }
    }

    /// Width in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        (self.size() * 8) as u32
    }

    /// Returns `true` for the signed encodings.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Smallest value the encoding can physically hold.
    #[must_use]
    pub const fn type_min(self) -> i128 {
        match self {
            Self::Int8 => i8::MIN as i128,
            Self::Int16 => i16::MIN as i128,
            Self::Int32 => i32::MIN as i128,
            Self::Int64 => i64::MIN as i128,
            Self::UInt8 | Self::UInt16 | Self::UInt32 | Self::UInt64 => 0,
        }
    }

    /// Largest value the encoding can physically hold.
    #[must_use]
    pub const fn type_max(self) -> i128 {
        match self {
            Self::Int8 => i8::MAX as i128,
            Self::Int16 => i16::MAX as i128,
            Self::Int32 => i32::MAX as i128,
            Self::Int64 => i64::MAX as i128,
            Self::UInt8 => u8::MAX as i128,
            Self::UInt16 => u16::MAX as i128,
            Self::UInt32 => u32::MAX as i128,
            Self::UInt64 => u64::MAX as i128,
        }
    }

    /// Smallest legal (non-null) value.
    #[must_use]
    pub const fn min_value(self) -> i128 {
        if self.is_signed() {
            self.type_min() + 1
        } else {
            0
        }
    }

    /// Largest legal (non-null) value.
    #[must_use]
    pub const fn max_value(self) -> i128 {
        if self.is_signed() {
            self.type_max()
        } else {
            self.type_max() - 1
        }
    }

    /// The sentinel meaning "absent".
    #[must_use]
    pub const fn null_value(self) -> i128 {
        if self.is_signed() {
            self.type_min()
        } else {
            self.type_max()
        }
    }

    /// Default bounds derived from the null/range policy.
    #[must_use]
    pub const fn bounds(self) -> Bounds {
        Bounds {
            min: self.min_value(),
            max: self.max_value(),
            null: self.null_value(),
        }
    }

    /// Returns `true` if `value` fits the encoding's physical width.
    #[must_use]
    pub const fn can_hold(self, value: i128) -> bool {
        value >= self.type_min() && value <= self.type_max()
    }

    /// Schema name of the encoding.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt8 => "uint8",
            Self::UInt16 => "uint16",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Legal range and null sentinel of a numeric field.
///
/// Values are widened to `i128` so signed and unsigned encodings compare in
/// one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min: i128,
    pub max: i128,
    pub null: i128,
}

impl Bounds {
    /// Returns `true` if `value` lies in `[min, max]`.
    #[must_use]
    pub const fn contains(&self, value: i128) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns `true` if `value` is the null sentinel.
    #[must_use]
    pub const fn is_null(&self, value: i128) -> bool {
        value == self.null
    }
}
