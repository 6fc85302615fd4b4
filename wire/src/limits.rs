//! Configurable limits for bounded decoding.

/// Wire-level limits for message decoding.
///
/// These limits are enforced while decoding variable-length sections, before
/// any buffer is allocated, so a hostile length prefix cannot force an
/// unbounded allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Maximum number of entries in a single repeating group.
    pub max_group_entries: usize,

    /// Maximum length of a single variable-length data field in bytes.
    pub max_var_data_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Exchange snapshots carry a few thousand symbols at most
            max_group_entries: 64 * 1024,
            max_var_data_len: 64 * 1024,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_group_entries: 64,
            max_var_data_len: 1024,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_group_entries: usize::MAX,
            max_var_data_len: usize::MAX,
        }
    }
}
