//! Schema definitions and validation.

use std::collections::HashSet;

use wire::MessageHeader;

use crate::error::{SchemaError, SchemaResult};
use crate::field::{ConstValue, FieldDef, FieldKind, Presence};
use crate::message::{BlockDef, MessageDef};
use crate::types::{ChoiceSetType, EnumType};
use crate::{SchemaId, SchemaVersion, TemplateId};

/// A set of message definitions sharing one schema identity.
///
/// The identity triple is compiled in and never mutated. `version` is the
/// version this process encodes with and the upper bound it fully
/// understands when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaDef {
    pub id: SchemaId,
    pub version: SchemaVersion,
    pub semantic_version: &'static str,
    pub messages: &'static [&'static MessageDef],
}

impl SchemaDef {
    #[must_use]
    pub const fn new(
        id: SchemaId,
        version: SchemaVersion,
        semantic_version: &'static str,
        messages: &'static [&'static MessageDef],
    ) -> Self {
        Self {
            id,
            version,
            semantic_version,
            messages,
        }
    }

    /// Looks up a message by template id.
    #[must_use]
    pub fn message(&self, template_id: TemplateId) -> Option<&'static MessageDef> {
        self.messages
            .iter()
            .copied()
            .find(|message| message.template_id == template_id)
    }

    /// Looks up a message by name.
    #[must_use]
    pub fn message_by_name(&self, name: &str) -> Option<&'static MessageDef> {
        self.messages
            .iter()
            .copied()
            .find(|message| message.name == name)
    }

    /// The header this schema writes in front of `message`.
    #[must_use]
    pub const fn header_for(&self, message: &MessageDef) -> MessageHeader {
        MessageHeader::new(
            message.block_length(),
            message.template_id,
            self.id,
            self.version,
        )
    }

    /// Validates schema invariants.
    pub fn validate(&self) -> SchemaResult<()> {
        let mut template_ids = HashSet::new();
        for message in self.messages {
            if !template_ids.insert(message.template_id) {
                return Err(SchemaError::DuplicateTemplateId {
                    id: message.template_id,
                });
            }
            self.validate_block(message.name, &message.block)?;
        }
        Ok(())
    }

    fn validate_block(&self, name: &'static str, block: &BlockDef) -> SchemaResult<()> {
        let length = block.encoded_block_len();
        if length > usize::from(u16::MAX) {
            return Err(SchemaError::BlockTooLong {
                block: name,
                length,
                max: usize::from(u16::MAX),
            });
        }

        let mut ids = HashSet::new();
        for field in block.fields {
            if !ids.insert(field.id) {
                return Err(SchemaError::DuplicateFieldId {
                    block: name,
                    id: field.id,
                });
            }
            self.check_since(field.name, field.since_version)?;
            self.check_deprecated(field)?;
            validate_field(field)?;
        }
        for group in block.groups {
            if !ids.insert(group.id) {
                return Err(SchemaError::DuplicateFieldId {
                    block: name,
                    id: group.id,
                });
            }
            self.check_since(group.name, group.since_version)?;
            self.validate_block(group.name, &group.block)?;
        }
        for data in block.data {
            if !ids.insert(data.id) {
                return Err(SchemaError::DuplicateFieldId {
                    block: name,
                    id: data.id,
                });
            }
            self.check_since(data.name, data.since_version)?;
        }
        Ok(())
    }

    fn check_deprecated(&self, field: &FieldDef) -> SchemaResult<()> {
        let deprecated = field.deprecated;
        if deprecated != 0 && (deprecated <= field.since_version || deprecated > self.version) {
            return Err(SchemaError::InvalidDeprecation {
                field: field.name,
                deprecated,
                since: field.since_version,
                schema: self.version,
            });
        }
        Ok(())
    }

    fn check_since(&self, name: &'static str, since: SchemaVersion) -> SchemaResult<()> {
        if since > self.version {
            return Err(SchemaError::SinceVersionTooNew {
                name,
                since,
                schema: self.version,
            });
        }
        Ok(())
    }
}

fn validate_field(field: &FieldDef) -> SchemaResult<()> {
    match field.kind {
        FieldKind::Scalar(_) => {}
        FieldKind::Array(_, len) => {
            if len == 0 {
                return Err(SchemaError::ZeroLengthArray { field: field.name });
            }
        }
        FieldKind::Enum(enum_type) => validate_enum(enum_type)?,
        FieldKind::Choice(choice_type) => validate_choice_set(choice_type)?,
    }

    if let Some((min, max)) = field.range {
        let ty = field.kind.encoding();
        let null = ty.null_value();
        if min > max || !ty.can_hold(min) || !ty.can_hold(max) || (min..=max).contains(&null) {
            return Err(SchemaError::InvalidBounds {
                field: field.name,
                min,
                max,
            });
        }
    }

    if let Presence::Constant(value) = field.presence {
        validate_constant(field, value)?;
    }
    Ok(())
}

fn validate_constant(field: &FieldDef, value: ConstValue) -> SchemaResult<()> {
    let raw = value.as_i128();
    let valid = match field.kind {
        FieldKind::Scalar(_) => field.bounds().is_some_and(|bounds| bounds.contains(raw)),
        FieldKind::Array(ty, _) => ty.can_hold(raw),
        FieldKind::Enum(enum_type) => u64::try_from(raw)
            .is_ok_and(|ordinal| enum_type.values.iter().any(|v| v.ordinal == ordinal)),
        FieldKind::Choice(choice_type) => choice_type.encoding.can_hold(raw),
    };
    if valid {
        Ok(())
    } else {
        Err(SchemaError::InvalidConstant {
            field: field.name,
            value: raw,
        })
    }
}

/// Validates an enumeration's encoding and ordinals.
pub fn validate_enum(enum_type: &EnumType) -> SchemaResult<()> {
    let encoding = enum_type.encoding;
    if encoding.is_signed() {
        return Err(SchemaError::InvalidEnumEncoding {
            name: enum_type.name,
            encoding,
        });
    }

    let mut ordinals = HashSet::new();
    let reserved = enum_type.non_representable.into_iter();
    for ordinal in enum_type.values.iter().map(|v| v.ordinal).chain(reserved) {
        if i128::from(ordinal) > encoding.max_value() {
            return Err(SchemaError::EnumOrdinalOutOfRange {
                name: enum_type.name,
                ordinal,
            });
        }
        if !ordinals.insert(ordinal) {
            return Err(SchemaError::DuplicateEnumOrdinal {
                name: enum_type.name,
                ordinal,
            });
        }
    }
    Ok(())
}

/// Validates a choice set's encoding and bit positions.
pub fn validate_choice_set(choice_type: &ChoiceSetType) -> SchemaResult<()> {
    let encoding = choice_type.encoding;
    if encoding.is_signed() {
        return Err(SchemaError::InvalidChoiceEncoding {
            name: choice_type.name,
            encoding,
        });
    }

    let width = choice_type.width();
    let mut bits = HashSet::new();
    for choice in choice_type.choices {
        if u32::from(choice.bit) >= width {
            return Err(SchemaError::ChoiceBitOutOfRange {
                name: choice_type.name,
                bit: choice.bit,
                width,
            });
        }
        if !bits.insert(choice.bit) {
            return Err(SchemaError::DuplicateChoiceBit {
                name: choice_type.name,
                bit: choice.bit,
            });
        }
    }
    Ok(())
}
