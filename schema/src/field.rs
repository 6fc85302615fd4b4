//! Field definitions: kind, presence, version gating and bounds.

use crate::primitive::{Bounds, PrimitiveType};
use crate::types::{ChoiceSetType, EnumType};
use crate::{FieldId, SchemaVersion};

/// The encoding category of a fixed-block field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A single integer.
    Scalar(PrimitiveType),

    /// A fixed number of consecutive integers.
    Array(PrimitiveType, u16),

    /// An enumeration ordinal.
    Enum(&'static EnumType),

    /// A bitmask of named flags.
    Choice(&'static ChoiceSetType),
}

impl FieldKind {
    /// The primitive each element is encoded as.
    #[must_use]
    pub const fn encoding(self) -> PrimitiveType {
        match self {
            Self::Scalar(ty) | Self::Array(ty, _) => ty,
            Self::Enum(enum_type) => enum_type.encoding,
            Self::Choice(choice_type) => choice_type.encoding,
        }
    }

    /// Encoded length in bytes when the field is written.
    #[must_use]
    pub const fn encoded_length(self) -> usize {
        match self {
            Self::Array(ty, len) => ty.size() * len as usize,
            _ => self.encoding().size(),
        }
    }

}

/// A compile-time constant value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstValue {
    Int(i64),
    UInt(u64),
}

impl ConstValue {
    /// Widens the constant for comparison against bounds.
    #[must_use]
    pub const fn as_i128(self) -> i128 {
        match self {
            Self::Int(value) => value as i128,
            Self::UInt(value) => value as i128,
        }
    }
}

/// Whether a field may be absent, must be present, or is fixed by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// The null sentinel is not a legal value.
    Required,

    /// The null sentinel is a legal value meaning "not set".
    Optional,

    /// The value is fixed by the schema and occupies no bytes on the wire.
    Constant(ConstValue),
}

impl Presence {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Constant(_) => "constant",
        }
    }
}

/// Descriptive attributes attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttribute {
    Epoch,
    TimeUnit,
    SemanticType,
    Presence,
}

/// Field definition within a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub id: FieldId,
    pub kind: FieldKind,
    pub presence: Presence,
    /// Schema version the field was introduced in.
    pub since_version: SchemaVersion,
    /// Schema version the field was deprecated in (0 = never).
    pub deprecated: SchemaVersion,
    /// Optional `(min, max)` override of the null/range policy.
    pub range: Option<(i128, i128)>,
    pub semantic_type: Option<&'static str>,
    pub time_unit: Option<&'static str>,
    pub epoch: Option<&'static str>,
}

impl FieldDef {
    /// Creates a required field present since version 0.
    #[must_use]
    pub const fn new(name: &'static str, id: FieldId, kind: FieldKind) -> Self {
        Self {
            name,
            id,
            kind,
            presence: Presence::Required,
            since_version: 0,
            deprecated: 0,
            range: None,
            semantic_type: None,
            time_unit: None,
            epoch: None,
        }
    }

    /// Creates a required scalar field.
    #[must_use]
    pub const fn scalar(name: &'static str, id: FieldId, ty: PrimitiveType) -> Self {
        Self::new(name, id, FieldKind::Scalar(ty))
    }

    /// Creates a required fixed-length array field.
    #[must_use]
    pub const fn array(name: &'static str, id: FieldId, ty: PrimitiveType, len: u16) -> Self {
        Self::new(name, id, FieldKind::Array(ty, len))
    }

    /// Creates an enumeration field.
    #[must_use]
    pub const fn enumeration(name: &'static str, id: FieldId, ty: &'static EnumType) -> Self {
        Self::new(name, id, FieldKind::Enum(ty))
    }

    /// Creates a choice-set field.
    #[must_use]
    pub const fn choice(name: &'static str, id: FieldId, ty: &'static ChoiceSetType) -> Self {
        Self::new(name, id, FieldKind::Choice(ty))
    }

    /// Marks the field optional: the null sentinel becomes a legal value.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    /// Fixes the field to a constant; it occupies no bytes on the wire.
    #[must_use]
    pub const fn constant(mut self, value: ConstValue) -> Self {
        self.presence = Presence::Constant(value);
        self
    }

    /// Sets the schema version the field was introduced in.
    #[must_use]
    pub const fn since(mut self, version: SchemaVersion) -> Self {
        self.since_version = version;
        self
    }

    /// Sets the schema version the field was deprecated in.
    #[must_use]
    pub const fn deprecated_since(mut self, version: SchemaVersion) -> Self {
        self.deprecated = version;
        self
    }

    /// Narrows the legal range of a numeric field.
    #[must_use]
    pub const fn with_range(mut self, min: i128, max: i128) -> Self {
        self.range = Some((min, max));
        self
    }

    #[must_use]
    pub const fn with_semantic_type(mut self, semantic_type: &'static str) -> Self {
        self.semantic_type = Some(semantic_type);
        self
    }

    #[must_use]
    pub const fn with_time_unit(mut self, time_unit: &'static str) -> Self {
        self.time_unit = Some(time_unit);
        self
    }

    #[must_use]
    pub const fn with_epoch(mut self, epoch: &'static str) -> Self {
        self.epoch = Some(epoch);
        self
    }

    /// Returns `true` if the field exists in payloads written under
    /// `acting_version`.
    #[must_use]
    pub const fn in_acting_version(&self, acting_version: SchemaVersion) -> bool {
        acting_version >= self.since_version
    }

    /// Returns `true` if the field is deprecated as of `version`. Deprecated
    /// fields keep their place on the wire.
    #[must_use]
    pub const fn is_deprecated_in(&self, version: SchemaVersion) -> bool {
        self.deprecated != 0 && version >= self.deprecated
    }

    /// Returns `true` if the field is fixed by the schema.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self.presence, Presence::Constant(_))
    }

    /// Returns `true` if the null sentinel is a legal value.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self.presence, Presence::Optional)
    }

    /// Bytes the field occupies in the fixed block.
    #[must_use]
    pub const fn encoded_length(&self) -> usize {
        if self.is_constant() {
            0
        } else {
            self.kind.encoded_length()
        }
    }

    /// Legal range and null sentinel for numeric fields.
    ///
    /// Returns `None` for enumerations and choice sets, which have their own
    /// validity rules.
    #[must_use]
    pub const fn bounds(&self) -> Option<Bounds> {
        let ty = match self.kind {
            FieldKind::Scalar(ty) | FieldKind::Array(ty, _) => ty,
            FieldKind::Enum(_) | FieldKind::Choice(_) => return None,
        };
        let mut bounds = ty.bounds();
        if let Some((min, max)) = self.range {
            bounds.min = min;
            bounds.max = max;
        }
        Some(bounds)
    }

    /// Returns a descriptive attribute, or `""` when unset.
    #[must_use]
    pub const fn meta_attribute(&self, attribute: MetaAttribute) -> &'static str {
        let value = match attribute {
            MetaAttribute::Epoch => self.epoch,
            MetaAttribute::TimeUnit => self.time_unit,
            MetaAttribute::SemanticType => self.semantic_type,
            MetaAttribute::Presence => Some(self.presence.name()),
        };
        match value {
            Some(value) => value,
            None => "",
        }
    }
}
