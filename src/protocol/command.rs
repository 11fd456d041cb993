//! # Command Table
//!
//! Immutable bidirectional mapping between message names and u16 command
//! ids. Built once at process start and read-only afterwards, so concurrent
//! lookups from any number of threads or tasks need no synchronization.

use crate::error::{ProtocolError, Result};
use crate::protocol::ids::COMMANDS;
use std::collections::HashMap;

/// Name ⇄ id lookup table with O(1) resolution in both directions.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    by_name: HashMap<&'static str, u16>,
    by_id: HashMap<u16, &'static str>,
}

impl CommandTable {
    /// Command id reserved for "no command".
    pub const NONE: u16 = 0;

    /// Build the table from the builtin command enumeration.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        for &(name, id) in COMMANDS {
            table.by_name.insert(name, id);
            table.by_id.insert(id, name);
        }
        table
    }

    /// Build a table from arbitrary pairs, rejecting duplicates.
    ///
    /// Used for custom or fake tables in tests; the builtin enumeration is
    /// covered by its own uniqueness test.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'static str, u16)>,
    {
        let mut table = Self::default();
        for (name, id) in pairs {
            if table.by_name.insert(name, id).is_some() {
                return Err(ProtocolError::RegistryLoad(format!(
                    "duplicate command name: {name}"
                )));
            }
            if table.by_id.insert(id, name).is_some() {
                return Err(ProtocolError::RegistryLoad(format!(
                    "duplicate command id: {id}"
                )));
            }
        }
        Ok(table)
    }

    /// Resolve a message name to its command id.
    #[inline]
    pub fn resolve_id(&self, name: &str) -> Option<u16> {
        self.by_name.get(name).copied()
    }

    /// Resolve a command id to its message name.
    #[inline]
    pub fn resolve_name(&self, id: u16) -> Option<&'static str> {
        self.by_id.get(&id).copied()
    }

    /// The table's own `'static` spelling of a name, if present.
    ///
    /// Lets callers key by the table's string without allocating.
    #[inline]
    pub fn canonical_name(&self, name: &str) -> Option<&'static str> {
        self.by_name.get_key_value(name).map(|(k, _)| *k)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
