//! Decoded message values.

use schema::{BlockDef, ConstValue, FieldDef, FieldKind, Presence, PrimitiveType};

use crate::choice::ChoiceSet;
use crate::scalar::{to_raw, to_value};

/// A fixed-block field value in decoded form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldValue {
    /// A signed scalar.
    Int(i64),
    /// An unsigned scalar.
    UInt(u64),
    /// A fixed-length array of signed elements.
    IntArray(Vec<i64>),
    /// A fixed-length array of unsigned elements.
    UIntArray(Vec<u64>),
    /// An enumeration ordinal.
    Enum(u64),
    /// A choice set.
    Choice(ChoiceSet),
}

impl FieldValue {
    /// Short name of the value's kind for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::IntArray(_) => "int array",
            Self::UIntArray(_) => "uint array",
            Self::Enum(_) => "enum",
            Self::Choice(_) => "choice set",
        }
    }

    /// Element count for arrays, `None` otherwise.
    #[must_use]
    pub fn array_len(&self) -> Option<usize> {
        match self {
            Self::IntArray(values) => Some(values.len()),
            Self::UIntArray(values) => Some(values.len()),
            _ => None,
        }
    }

    /// Returns the scalar widened to `i128`, or `None` for non-scalars.
    #[must_use]
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Self::Int(value) => Some(i128::from(value)),
            Self::UInt(value) | Self::Enum(value) => Some(i128::from(value)),
            _ => None,
        }
    }

    /// Builds a scalar value of `ty` from a widened integer.
    ///
    /// Returns `None` if `value` does not fit the encoding.
    #[must_use]
    pub fn scalar(ty: PrimitiveType, value: i128) -> Option<Self> {
        let raw = to_raw(ty, value)?;
        Some(scalar_from_raw(ty, raw))
    }

    /// The value a field takes when it is absent from the payload: its
    /// constant if it has one, otherwise its null sentinel.
    #[must_use]
    pub fn null_for(field: &FieldDef) -> Self {
        if let Presence::Constant(value) = field.presence {
            return constant_value(field, value);
        }
        match field.kind {
            FieldKind::Scalar(ty) => scalar_from_raw(ty, null_raw(ty)),
            FieldKind::Array(ty, len) => array_of(ty, null_raw(ty), len),
            FieldKind::Enum(enum_type) => Self::Enum(enum_type.null_ordinal()),
            FieldKind::Choice(choice_type) => Self::Choice(ChoiceSet::empty_for(choice_type)),
        }
    }
}

fn null_raw(ty: PrimitiveType) -> u64 {
    to_raw(ty, ty.null_value()).unwrap_or(0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
/// The [`FieldValue::kind_name`] a value of `kind` must report.
pub(crate) const fn expected_kind_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Scalar(ty) if ty.is_signed() => "int",
        FieldKind::Scalar(_) => "uint",
        FieldKind::Array(ty, _) if ty.is_signed() => "int array",
        FieldKind::Array(..) => "uint array",
        FieldKind::Enum(_) => "enum",
        FieldKind::Choice(_) => "choice set",
    }
}

pub(crate) fn scalar_from_raw(ty: PrimitiveType, raw: u64) -> FieldValue {
    let value = to_value(ty, raw);
    if ty.is_signed() {
        FieldValue::Int(value as i64)
    } else {
        FieldValue::UInt(value as u64)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn array_of(ty: PrimitiveType, raw: u64, len: u16) -> FieldValue {
    let value = to_value(ty, raw);
    let len = usize::from(len);
    if ty.is_signed() {
        FieldValue::IntArray(vec![value as i64; len])
    } else {
        FieldValue::UIntArray(vec![value as u64; len])
    }
}

fn constant_value(field: &FieldDef, value: ConstValue) -> FieldValue {
    let ty = field.kind.encoding();
    let raw = to_raw(ty, value.as_i128()).unwrap_or(0);
    match field.kind {
        FieldKind::Scalar(_) => scalar_from_raw(ty, raw),
        FieldKind::Array(_, len) => array_of(ty, raw, len),
        FieldKind::Enum(_) => FieldValue::Enum(raw),
        FieldKind::Choice(choice_type) => {
            FieldValue::Choice(ChoiceSet::from_raw(raw, choice_type.width()))
        }
    }
}

/// The decoded contents of a message body or group entry, in declared
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    /// One value per declared field.
    pub fields: Vec<FieldValue>,
    /// One entry list per declared group.
    pub groups: Vec<Vec<Block>>,
    /// One byte string per declared var-data field.
    pub data: Vec<Vec<u8>>,
}

impl Block {
    /// Builds an instance with every field null (constants set), every group
    /// empty and every var-data field empty.
    #[must_use]
    pub fn null_for(def: &BlockDef) -> Self {
        Self {
            fields: def.fields.iter().map(FieldValue::null_for).collect(),
            groups: vec![Vec::new(); def.groups.len()],
            data: vec![Vec::new(); def.data.len()],
        }
    }

    /// Looks up a field value by name.
    #[must_use]
    pub fn field(&self, def: &BlockDef, name: &str) -> Option<&FieldValue> {
        self.fields.get(def.field_index(name)?)
    }

    /// Looks up a mutable field value by name.
    pub fn field_mut(&mut self, def: &BlockDef, name: &str) -> Option<&mut FieldValue> {
        self.fields.get_mut(def.field_index(name)?)
    }

    /// Replaces a field value by name. Returns `false` if no such field.
    pub fn set_field(&mut self, def: &BlockDef, name: &str, value: FieldValue) -> bool {
        self.field_mut(def, name)
            .map(|slot| *slot = value)
            .is_some()
    }

    /// Looks up a group's entries by name.
    #[must_use]
    pub fn group(&self, def: &BlockDef, name: &str) -> Option<&[Block]> {
        self.groups.get(def.group_index(name)?).map(Vec::as_slice)
    }

    /// Looks up mutable group entries by name.
    pub fn group_mut(&mut self, def: &BlockDef, name: &str) -> Option<&mut Vec<Block>> {
        self.groups.get_mut(def.group_index(name)?)
    }

    /// Looks up var data by name.
    #[must_use]
    pub fn data(&self, def: &BlockDef, name: &str) -> Option<&[u8]> {
        self.data.get(def.data_index(name)?).map(Vec::as_slice)
    }

    /// Looks up mutable var data by name.
    pub fn data_mut(&mut self, def: &BlockDef, name: &str) -> Option<&mut Vec<u8>> {
        self.data.get_mut(def.data_index(name)?)
    }
}
