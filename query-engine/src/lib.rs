//! FILENAME: query-engine/src/lib.rs
//! Query subsystem for the Olympic results table.
//!
//! This crate provides the aggregation engines as a standalone module,
//! separate from the data model. It depends on `engine` only for shared
//! types (NormalizedRecord, Medal, RegionTable).
//!
//! Layers:
//! - `definition`: Serializable query parameters (what the caller ASKS)
//! - `key`: Row-key machinery (HOW rows are de-duplicated)
//! - `view`: Result tables (WHAT we return)
//! - `tally`, `series`, `crosstab`, `leaderboard`, `athletes`: the engines
//!
//! Every engine is a pure function of the immutable base table and its
//! parameters: no shared mutable state, no side effects beyond the returned
//! table, safely callable from any number of threads.

pub mod athletes;
pub mod crosstab;
pub mod definition;
pub mod key;
pub mod leaderboard;
pub mod series;
pub mod tally;
pub mod view;

pub use definition::*;
pub use key::{distinct, key_part, row_key, KeyPart, RowKey};
pub use view::*;

pub use athletes::{
    age_distribution, age_distribution_by_sport, sex_participation_over_time, weight_vs_height,
};
pub use crosstab::{event_count_by_sport_year, medal_count_by_sport_year};
pub use leaderboard::{top_athletes, top_athletes_for_country};
pub use series::{count_distinct_per_edition, dataset_summary};
pub use tally::medal_tally;
