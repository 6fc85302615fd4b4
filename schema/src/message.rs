//! Block, repeating group, variable-length data and message definitions.

use wire::LengthPrefix;

use crate::field::FieldDef;
use crate::{FieldId, SchemaVersion, TemplateId};

/// Character encoding name that triggers UTF-8 validation.
pub const UTF8_ENCODING: &str = "UTF-8";

/// A variable-length data field: a length prefix followed by raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarDataDef {
    pub name: &'static str,
    pub id: FieldId,
    pub since_version: SchemaVersion,
    pub length: LengthPrefix,
    pub character_encoding: Option<&'static str>,
}

impl VarDataDef {
    /// Creates a raw byte field present since version 0.
    #[must_use]
    pub const fn new(name: &'static str, id: FieldId, length: LengthPrefix) -> Self {
        Self {
            name,
            id,
            since_version: 0,
            length,
            character_encoding: None,
        }
    }

    /// Declares the bytes as UTF-8 text.
    #[must_use]
    pub const fn utf8(mut self) -> Self {
        self.character_encoding = Some(UTF8_ENCODING);
        self
    }

    #[must_use]
    pub const fn since(mut self, version: SchemaVersion) -> Self {
        self.since_version = version;
        self
    }

    #[must_use]
    pub const fn in_acting_version(&self, acting_version: SchemaVersion) -> bool {
        acting_version >= self.since_version
    }

    /// Returns `true` if the bytes must be valid UTF-8.
    #[must_use]
    pub fn is_utf8(&self) -> bool {
        self.character_encoding
            .is_some_and(|encoding| encoding.eq_ignore_ascii_case(UTF8_ENCODING))
    }
}

/// The layout shared by message bodies and group entries: fixed-block
/// fields, then repeating groups, then variable-length data, each in
/// declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDef {
    pub fields: &'static [FieldDef],
    pub groups: &'static [GroupDef],
    pub data: &'static [VarDataDef],
}

impl BlockDef {
    /// Creates a block of fixed fields only.
    #[must_use]
    pub const fn fields(fields: &'static [FieldDef]) -> Self {
        Self {
            fields,
            groups: &[],
            data: &[],
        }
    }

    #[must_use]
    pub const fn with_groups(mut self, groups: &'static [GroupDef]) -> Self {
        self.groups = groups;
        self
    }

    #[must_use]
    pub const fn with_data(mut self, data: &'static [VarDataDef]) -> Self {
        self.data = data;
        self
    }

    /// Byte length of the fixed block: the sum of every declared field's
    /// encoded length.
    #[must_use]
    pub const fn encoded_block_len(&self) -> usize {
        let mut total = 0;
        let mut idx = 0;
        while idx < self.fields.len() {
            total += self.fields[idx].encoded_length();
            idx += 1;
        }
        total
    }

    /// Fixed block length as carried on the wire, saturating at `u16::MAX`.
    ///
    /// Schema validation rejects blocks longer than `u16::MAX`.
    #[must_use]
    pub const fn block_length(&self) -> u16 {
        let len = self.encoded_block_len();
        if len > u16::MAX as usize {
            u16::MAX
        } else {
            len as u16
        }
    }

    /// Index of the field named `name`.
    #[must_use]
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Index of the group named `name`.
    #[must_use]
    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|group| group.name == name)
    }

    /// Index of the variable-length data field named `name`.
    #[must_use]
    pub fn data_index(&self, name: &str) -> Option<usize> {
        self.data.iter().position(|data| data.name == name)
    }
}

/// A repeating group: a dimension header followed by entries, each laid out
/// as a [`BlockDef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDef {
    pub name: &'static str,
    pub id: FieldId,
    pub since_version: SchemaVersion,
    /// Width of the entry count in the dimension header.
    pub count: LengthPrefix,
    pub block: BlockDef,
}

impl GroupDef {
    #[must_use]
    pub const fn new(name: &'static str, id: FieldId, count: LengthPrefix, block: BlockDef) -> Self {
        Self {
            name,
            id,
            since_version: 0,
            count,
            block,
        }
    }

    #[must_use]
    pub const fn since(mut self, version: SchemaVersion) -> Self {
        self.since_version = version;
        self
    }

    #[must_use]
    pub const fn in_acting_version(&self, acting_version: SchemaVersion) -> bool {
        acting_version >= self.since_version
    }
}

/// A message type, identified by its template id within a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDef {
    pub name: &'static str,
    pub template_id: TemplateId,
    pub semantic_type: Option<&'static str>,
    pub block: BlockDef,
}

impl MessageDef {
    #[must_use]
    pub const fn new(name: &'static str, template_id: TemplateId, block: BlockDef) -> Self {
        Self {
            name,
            template_id,
            semantic_type: None,
            block,
        }
    }

    #[must_use]
    pub const fn with_semantic_type(mut self, semantic_type: &'static str) -> Self {
        self.semantic_type = Some(semantic_type);
        self
    }

    /// Fixed block length this reader was compiled with.
    #[must_use]
    pub const fn block_length(&self) -> u16 {
        self.block.block_length()
    }
}
