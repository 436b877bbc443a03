//! FILENAME: query-engine/src/definition.rs
//! Query Definitions - The serializable parameter types.
//!
//! This module contains all the types needed to DESCRIBE a query.
//! These structures are designed to be:
//! - Serializable (for IPC bridges and saved views)
//! - Immutable snapshots of caller intent
//!
//! The presentation layer builds its selector widgets from the `*_options`
//! helpers and hands the chosen filter back through these enums; the literal
//! "Overall" entry it displays is the `Overall` variant here.

use engine::NormalizedRecord;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

// ============================================================================
// FILTERS
// ============================================================================

/// Edition (year) filter supplied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EditionFilter {
    #[default]
    Overall,
    Year(u16),
}

impl EditionFilter {
    pub fn matches(&self, year: u16) -> bool {
        match self {
            EditionFilter::Overall => true,
            EditionFilter::Year(y) => *y == year,
        }
    }
}

/// Region (country) filter supplied by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RegionFilter {
    #[default]
    Overall,
    Region(String),
}

impl RegionFilter {
    pub fn matches(&self, region: Option<&str>) -> bool {
        match self {
            RegionFilter::Overall => true,
            RegionFilter::Region(r) => region == Some(r.as_str()),
        }
    }
}

/// Sport filter supplied by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SportFilter {
    #[default]
    Overall,
    Sport(String),
}

impl SportFilter {
    pub fn matches(&self, sport: &str) -> bool {
        match self {
            SportFilter::Overall => true,
            SportFilter::Sport(s) => s == sport,
        }
    }
}

// ============================================================================
// COLUMN SELECTORS
// ============================================================================

/// Column selectors used to build de-duplication and grouping keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Team,
    Noc,
    Games,
    Year,
    Season,
    City,
    Sport,
    Event,
    Athlete,
    Sex,
    Medal,
    Region,
}

/// The key that collapses the athlete rows sharing one team medal (relays,
/// team sports) into a single counted row.
pub const TEAM_MEDAL_KEY: &[Column] = &[
    Column::Team,
    Column::Noc,
    Column::Year,
    Column::Games,
    Column::Sport,
    Column::City,
    Column::Event,
    Column::Medal,
];

/// The key identifying one athlete-country pairing. The same athlete under
/// two team affiliations is two distinct entries.
pub const ATHLETE_KEY: &[Column] = &[Column::Athlete, Column::Region];

// ============================================================================
// PRESENTATION CONSTANTS
// ============================================================================

/// Default row cap for the global athlete leaderboard.
pub const TOP_ATHLETES_LIMIT: usize = 15;

/// Default row cap for the per-country athlete leaderboard.
pub const COUNTRY_TOP_ATHLETES_LIMIT: usize = 10;

/// Curated sport list for the gold-medalist age panels. Membership is a
/// product decision, not derived from the data.
pub const FAMOUS_SPORTS: &[&str] = &[
    "Basketball",
    "Judo",
    "Football",
    "Tug-Of-War",
    "Athletics",
    "Swimming",
    "Badminton",
    "Sailing",
    "Gymnastics",
    "Art Competitions",
    "Handball",
    "Weightlifting",
    "Wrestling",
    "Water Polo",
    "Hockey",
    "Rowing",
    "Fencing",
    "Shooting",
    "Boxing",
    "Taekwondo",
    "Cycling",
    "Diving",
    "Canoeing",
    "Tennis",
    "Golf",
    "Softball",
    "Archery",
    "Volleyball",
    "Synchronized Swimming",
    "Table Tennis",
    "Baseball",
    "Rhythmic Gymnastics",
    "Rugby Sevens",
    "Beach Volleyball",
    "Triathlon",
    "Rugby",
    "Polo",
    "Ice Hockey",
];

// ============================================================================
// SELECTOR LISTS
// ============================================================================

/// Distinct years present in the table, ascending.
pub fn edition_options(records: &[NormalizedRecord]) -> Vec<u16> {
    let years: FxHashSet<u16> = records.iter().map(|r| r.year).collect();
    let mut years: Vec<u16> = years.into_iter().collect();
    years.sort_unstable();
    years
}

/// Distinct regions present in the table, sorted ascending. Rows with no
/// region mapping contribute nothing.
pub fn region_options(records: &[NormalizedRecord]) -> Vec<String> {
    let regions: FxHashSet<&str> = records.iter().filter_map(|r| r.region.as_deref()).collect();
    let mut regions: Vec<String> = regions.into_iter().map(str::to_string).collect();
    regions.sort_unstable();
    regions
}

/// Distinct sports present in the table, sorted ascending.
pub fn sport_options(records: &[NormalizedRecord]) -> Vec<String> {
    let sports: FxHashSet<&str> = records.iter().map(|r| r.sport.as_str()).collect();
    let mut sports: Vec<String> = sports.into_iter().map(str::to_string).collect();
    sports.sort_unstable();
    sports
}
