//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the results data model.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod normalize;
pub mod record;
pub mod region;

// Re-export commonly used types at the crate root
pub use normalize::normalize;
pub use record::{Medal, NormalizedRecord, ParticipationRecord, Season, Sex};
pub use region::{RegionEntry, RegionTable};
