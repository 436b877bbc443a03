//! FILENAME: query-engine/src/view.rs
//! Result Tables - renderable output for the presentation layer.
//!
//! Every engine returns one of these fully-formed tables; the presentation
//! layer displays them verbatim (tables) or feeds them to its chart
//! primitives (lines, heatmaps, scatter plots, density estimates). All types
//! serialize cleanly for IPC bridges.

use engine::{Medal, Sex};
use serde::{Deserialize, Serialize};

// ============================================================================
// MEDAL TALLY
// ============================================================================

/// The grouping label of a tally row: per-region for Overall queries,
/// per-edition when a specific region is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TallyGroup {
    Region(String),
    Edition(u16),
}

/// One row of a medal tally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedalTallyRow {
    pub group: TallyGroup,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,

    /// Always `gold + silver + bronze`.
    pub total: u32,
}

// ============================================================================
// TIME SERIES
// ============================================================================

/// One point of a distinct-entities-per-edition trend line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub edition: u16,
    pub count: u32,
}

/// Headline counts for the overview panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub editions: u32,
    pub cities: u32,
    pub sports: u32,
    pub events: u32,
    pub athletes: u32,
    pub nations: u32,
}

// ============================================================================
// SPORT x YEAR MATRIX
// ============================================================================

/// A dense Sport × Year matrix of counts, used for heatmaps.
/// Sports and years are sorted ascending; missing cells are zero, not null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportYearMatrix {
    /// Column labels, ascending.
    pub years: Vec<u16>,

    /// One row per sport, ascending by sport name.
    pub rows: Vec<SportYearRow>,
}

/// One matrix row: `counts[i]` is the cell for `years[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportYearRow {
    pub sport: String,
    pub counts: Vec<u32>,
}

impl SportYearMatrix {
    /// The cell at (sport, year); zero when either label is absent.
    pub fn count(&self, sport: &str, year: u16) -> u32 {
        let col = match self.years.iter().position(|&y| y == year) {
            Some(col) => col,
            None => return 0,
        };
        self.rows
            .iter()
            .find(|row| row.sport == sport)
            .map_or(0, |row| row.counts.get(col).copied().unwrap_or(0))
    }

    /// Sum over all cells.
    pub fn grand_total(&self) -> u32 {
        self.rows.iter().flat_map(|row| row.counts.iter()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ============================================================================
// LEADERBOARD
// ============================================================================

/// One athlete on a medal leaderboard, with representative descriptive
/// columns attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub name: String,
    pub medals: u32,
    pub sport: String,
    pub region: Option<String>,
}

// ============================================================================
// DEMOGRAPHICS
// ============================================================================

/// Medal outcome with the explicit "No Medal" category used as a scatter hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedalClass {
    Gold,
    Silver,
    Bronze,
    NoMedal,
}

impl MedalClass {
    /// Converts a record's medal outcome, filling absence with `NoMedal`.
    pub fn from_outcome(medal: Option<Medal>) -> Self {
        match medal {
            Some(Medal::Gold) => MedalClass::Gold,
            Some(Medal::Silver) => MedalClass::Silver,
            Some(Medal::Bronze) => MedalClass::Bronze,
            None => MedalClass::NoMedal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MedalClass::Gold => "Gold",
            MedalClass::Silver => "Silver",
            MedalClass::Bronze => "Bronze",
            MedalClass::NoMedal => "No Medal",
        }
    }
}

/// One de-duplicated athlete for the weight/height scatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyProfileRow {
    pub name: String,
    pub region: Option<String>,
    pub sport: String,
    pub sex: Sex,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub medal: MedalClass,
}

/// Distinct-athlete counts for one edition, split by sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexParticipationPoint {
    pub year: u16,
    pub male: u32,
    pub female: u32,
}

/// Raw age samples for one labelled slice. Density estimation over the
/// samples belongs to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeSeries {
    pub label: String,
    pub ages: Vec<f64>,
}
