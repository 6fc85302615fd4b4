//! Range validation over decoded or about-to-be-encoded blocks.

use schema::{BlockDef, FieldDef, FieldKind, SchemaDef, SchemaVersion, VarDataDef};
use wire::LengthPrefix;

use crate::enums::enum_range_check;
use crate::error::{
    CodecError, CodecResult, RangeCheckError, RangeCheckKind, ShapeKind, ValueReason,
};
use crate::value::{expected_kind_name, Block, FieldValue};

/// Checks every present field of `block` against its declared range.
///
/// Fields, groups and var data absent under `acting_version` hold
/// sentinels and are exempt. Groups are checked entry by entry. The first
/// violation is returned.
pub fn range_check(
    schema: &SchemaDef,
    def: &BlockDef,
    block: &Block,
    acting_version: SchemaVersion,
) -> CodecResult<()> {
    check_block(schema, "block", def, block, acting_version)
}

pub(crate) fn check_block(
    schema: &SchemaDef,
    name: &'static str,
    def: &BlockDef,
    block: &Block,
    acting_version: SchemaVersion,
) -> CodecResult<()> {
    check_shape(name, def, block)?;

    for (field, value) in def.fields.iter().zip(&block.fields) {
        if field.is_constant() || !field.in_acting_version(acting_version) {
            continue;
        }
        check_value_kind(field, value)?;
        check_field(field, value, acting_version, schema.version)
            .map_err(|kind| RangeCheckError {
                field: field.name,
                kind,
            })?;
    }

    for (group, entries) in def.groups.iter().zip(&block.groups) {
        if !group.in_acting_version(acting_version) {
            continue;
        }
        check_length(group.name, entries.len(), group.count)?;
        for entry in entries {
            check_block(schema, group.name, &group.block, entry, acting_version)?;
        }
    }

    for (data_def, bytes) in def.data.iter().zip(&block.data) {
        if data_def.in_acting_version(acting_version) {
            check_data(data_def, bytes)?;
        }
    }
    Ok(())
}

/// Verifies member counts match the descriptor.
pub(crate) fn check_shape(name: &'static str, def: &BlockDef, block: &Block) -> CodecResult<()> {
    let counts = [
        (ShapeKind::Fields, def.fields.len(), block.fields.len()),
        (ShapeKind::Groups, def.groups.len(), block.groups.len()),
        (ShapeKind::Data, def.data.len(), block.data.len()),
    ];
    for (kind, expected, actual) in counts {
        if expected != actual {
            return Err(CodecError::InvalidShape {
                block: name,
                kind,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Rejects a value whose kind or array length does not match the field.
fn check_value_kind(field: &FieldDef, value: &FieldValue) -> CodecResult<()> {
    let expected = expected_kind_name(field.kind);
    let reason = match (field.kind, value.array_len()) {
        _ if expected != value.kind_name() => ValueReason::TypeMismatch {
            expected,
            found: value.kind_name(),
        },
        (FieldKind::Array(_, len), Some(actual)) if usize::from(len) != actual => {
            ValueReason::ArrayLength {
                expected: usize::from(len),
                actual,
            }
        }
        _ => return Ok(()),
    };
    Err(CodecError::InvalidValue {
        field: field.name,
        reason,
    })
}

fn check_field(
    field: &FieldDef,
    value: &FieldValue,
    acting_version: SchemaVersion,
    schema_version: SchemaVersion,
) -> Result<(), RangeCheckKind> {
    match (field.kind, value) {
        (FieldKind::Enum(enum_type), FieldValue::Enum(ordinal)) => {
            enum_range_check(enum_type, *ordinal, acting_version, schema_version)
        }
        (FieldKind::Choice(choice_type), FieldValue::Choice(set)) => {
            let width = choice_type.width();
            match set.iter_set().find(|&bit| bit >= width as usize) {
                Some(bit) => Err(RangeCheckKind::ChoiceBitOutOfRange { bit, width }),
                None => Ok(()),
            }
        }
        (_, FieldValue::IntArray(values)) => values
            .iter()
            .try_for_each(|&v| check_numeric(field, i128::from(v))),
        (_, FieldValue::UIntArray(values)) => values
            .iter()
            .try_for_each(|&v| check_numeric(field, i128::from(v))),
        (_, value) => match value.as_i128() {
            Some(v) => check_numeric(field, v),
            None => Ok(()),
        },
    }
}

fn check_numeric(field: &FieldDef, value: i128) -> Result<(), RangeCheckKind> {
    let Some(bounds) = field.bounds() else {
        return Ok(());
    };
    if bounds.contains(value) || (field.is_optional() && bounds.is_null(value)) {
        return Ok(());
    }
    Err(RangeCheckKind::OutOfRange {
        value,
        min: bounds.min,
        max: bounds.max,
    })
}

fn check_length(name: &'static str, length: usize, prefix: LengthPrefix) -> CodecResult<()> {
    let max = prefix.max_length();
    if u64::try_from(length).map_or(true, |len| len > max) {
        return Err(RangeCheckError {
            field: name,
            kind: RangeCheckKind::LengthOverflow { length, max },
        }
        .into());
    }
    Ok(())
}

fn check_data(def: &VarDataDef, bytes: &[u8]) -> CodecResult<()> {
    check_length(def.name, bytes.len(), def.length)?;
    if !def.is_utf8() {
        return Ok(());
    }
    std::str::from_utf8(bytes).map_err(|err| RangeCheckError {
        field: def.name,
        kind: RangeCheckKind::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        },
    })?;
    Ok(())
}
