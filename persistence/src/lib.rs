//! FILENAME: persistence/src/lib.rs
//! Results Persistence Module
//!
//! Handles loading the participation table and the NOC → region mapping
//! from delimited text files, and assembling the normalized dataset the
//! query engines run against.

mod csv_reader;
mod error;

pub use csv_reader::{load_participation, load_regions};
pub use error::PersistenceError;

use engine::{normalize, NormalizedRecord, RegionTable};
use std::path::Path;

// ============================================================================
// DATASET
// ============================================================================

/// The fully-loaded, normalized dataset. Loaded once and treated as
/// read-only for the process lifetime; every query recomputes from it.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// The normalized base table, one row per input row.
    pub records: Vec<NormalizedRecord>,

    /// The region mapping the table was normalized with.
    pub regions: RegionTable,
}

/// Loads both source files and runs normalization.
pub fn load_dataset(events_path: &Path, regions_path: &Path) -> Result<Dataset, PersistenceError> {
    let rows = load_participation(events_path)?;
    let regions = load_regions(regions_path)?;
    let records = normalize(rows, &regions);

    Ok(Dataset { records, regions })
}
