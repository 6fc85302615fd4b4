//! Message schema descriptors for the sbe codec.
//!
//! This crate describes message layouts as data:
//! - Primitive encodings and their null/range policy
//! - Enumerations and choice sets
//! - Fields, repeating groups, variable-length data and messages
//! - Schema identity and validation
//!
//! # Design Principles
//!
//! - **Declarative** - every message is a `const` table interpreted by one
//!   generic codec; there is no per-message code.
//! - **Immutable** - descriptors reference `'static` data and are never
//!   mutated at run time.
//! - **Version aware** - every field, group and var-data member carries the
//!   schema version it was introduced in.

mod error;
mod field;
mod message;
mod primitive;
mod schema;
mod types;

pub use error::{SchemaError, SchemaResult};
pub use field::{ConstValue, FieldDef, FieldKind, MetaAttribute, Presence};
pub use message::{BlockDef, GroupDef, MessageDef, VarDataDef, UTF8_ENCODING};
pub use primitive::{Bounds, PrimitiveType};
pub use schema::{validate_choice_set, validate_enum, SchemaDef};
pub use types::{
    Choice, ChoiceSetType, EnumType, EnumValue, ENUM_NON_REPRESENTABLE_NAME, ENUM_NULL_NAME,
};

/// Identifies a schema on the wire.
pub type SchemaId = u16;

/// A schema version number.
pub type SchemaVersion = u16;

/// Identifies a message type within a schema.
pub type TemplateId = u16;

/// Identifies a field, group or var-data member within a block.
pub type FieldId = u16;
