//! FILENAME: engine/src/region.rs
//! PURPOSE: Manages the NOC-to-region mapping table.
//! CONTEXT: This file defines the `RegionTable` struct which holds the
//! country-code normalization data. Lookups for unknown NOC codes return
//! None rather than failing; some committees genuinely have no mapping.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One mapping entry: the canonical region name and the optional free-text
/// note carried by the source mapping file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub region: Option<String>,
    pub notes: Option<String>,
}

/// The NOC → region mapping table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionTable {
    entries: HashMap<String, RegionEntry>,
}

impl RegionTable {
    /// Creates a new, empty table.
    pub fn new() -> Self {
        RegionTable {
            entries: HashMap::new(),
        }
    }

    /// Inserts or replaces the entry for a NOC code.
    pub fn insert(&mut self, noc: String, region: Option<String>, notes: Option<String>) {
        self.entries.insert(noc, RegionEntry { region, notes });
    }

    /// Returns the canonical region for a NOC code, if one is mapped.
    pub fn region_of(&self, noc: &str) -> Option<&str> {
        self.entries.get(noc).and_then(|entry| entry.region.as_deref())
    }

    /// Returns the full entry for a NOC code.
    pub fn get(&self, noc: &str) -> Option<&RegionEntry> {
        self.entries.get(noc)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
