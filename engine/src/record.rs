//! FILENAME: engine/src/record.rs
//! PURPOSE: Defines the fundamental data structures for a single participation row.
//! CONTEXT: This file contains the `ParticipationRecord` struct (one athlete
//! entered in one event at one Games edition) and its normalized counterpart.
//! It is designed to be lightweight as hundreds of thousands of these
//! instances make up the base table.

use serde::{Deserialize, Serialize};

/// Medal won in one event participation. Absence of a medal is represented
/// as `Option<Medal>::None` on the record, never as a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Returns the display label used in source data and result tables.
    pub fn label(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }
}

/// Athlete sex as recorded in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
}

/// Season of a Games edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
}

/// One row of the raw participation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipationRecord {
    /// Team name as entered (may differ from the committee's country).
    pub team: String,

    /// National Olympic Committee 3-letter code.
    pub noc: String,

    /// Games label, e.g. "2016 Summer".
    pub games: String,

    pub year: u16,
    pub season: Season,

    /// Host city of the edition.
    pub city: String,

    pub sport: String,
    pub event: String,

    /// Athlete name.
    pub name: String,

    pub sex: Sex,
    pub age: Option<f64>,

    /// Height in centimetres.
    pub height: Option<f64>,

    /// Weight in kilograms.
    pub weight: Option<f64>,

    pub medal: Option<Medal>,
}

/// A participation row after normalization: the canonical region label is
/// attached and the medal outcome is expanded into one-hot columns so that
/// tallies are sums instead of conditional counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub team: String,
    pub noc: String,
    pub games: String,
    pub year: u16,
    pub season: Season,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub name: String,
    pub sex: Sex,
    pub age: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub medal: Option<Medal>,

    /// Canonical country name resolved via the NOC mapping.
    /// None when the NOC has no mapping; the row is kept regardless.
    pub region: Option<String>,

    /// One-hot medal columns: 1 iff `medal` is the matching variant.
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl NormalizedRecord {
    /// Builds a normalized row from a raw row and its resolved region.
    pub fn from_row(row: ParticipationRecord, region: Option<String>) -> Self {
        let gold = (row.medal == Some(Medal::Gold)) as u32;
        let silver = (row.medal == Some(Medal::Silver)) as u32;
        let bronze = (row.medal == Some(Medal::Bronze)) as u32;

        NormalizedRecord {
            team: row.team,
            noc: row.noc,
            games: row.games,
            year: row.year,
            season: row.season,
            city: row.city,
            sport: row.sport,
            event: row.event,
            name: row.name,
            sex: row.sex,
            age: row.age,
            height: row.height,
            weight: row.weight,
            medal: row.medal,
            region,
            gold,
            silver,
            bronze,
        }
    }
}
