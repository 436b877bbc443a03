// FILENAME: persistence\src\csv_reader.rs

use crate::PersistenceError;
use engine::{Medal, ParticipationRecord, RegionTable, Season, Sex};
use serde::{de, Deserialize, Deserializer};
use std::path::Path;

/// Columns the participation file must carry. Extra columns (the source
/// file has a leading ID) are ignored.
const EVENT_COLUMNS: &[&str] = &[
    "Name", "Sex", "Age", "Height", "Weight", "Team", "NOC", "Games", "Year", "Season", "City",
    "Sport", "Event", "Medal",
];

/// Columns the region mapping file must carry.
const REGION_COLUMNS: &[&str] = &["NOC", "region"];

/// One participation row as it appears on disk.
#[derive(Debug, Deserialize)]
struct EventRow {
    #[serde(rename = "Team")]
    team: String,
    #[serde(rename = "NOC")]
    noc: String,
    #[serde(rename = "Games")]
    games: String,
    #[serde(rename = "Year")]
    year: u16,
    #[serde(rename = "Season")]
    season: Season,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Sport")]
    sport: String,
    #[serde(rename = "Event")]
    event: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Sex")]
    sex: Sex,
    #[serde(rename = "Age", deserialize_with = "na_f64")]
    age: Option<f64>,
    #[serde(rename = "Height", deserialize_with = "na_f64")]
    height: Option<f64>,
    #[serde(rename = "Weight", deserialize_with = "na_f64")]
    weight: Option<f64>,
    #[serde(rename = "Medal", deserialize_with = "na_medal")]
    medal: Option<Medal>,
}

impl EventRow {
    fn into_record(self) -> ParticipationRecord {
        ParticipationRecord {
            team: self.team,
            noc: self.noc,
            games: self.games,
            year: self.year,
            season: self.season,
            city: self.city,
            sport: self.sport,
            event: self.event,
            name: self.name,
            sex: self.sex,
            age: self.age,
            height: self.height,
            weight: self.weight,
            medal: self.medal,
        }
    }
}

/// One region mapping row as it appears on disk.
#[derive(Debug, Deserialize)]
struct RegionRow {
    #[serde(rename = "NOC")]
    noc: String,
    #[serde(rename = "region", default, deserialize_with = "na_string")]
    region: Option<String>,
    #[serde(rename = "notes", default, deserialize_with = "na_string")]
    notes: Option<String>,
}

/// The source files write missing values as the literal "NA" (or an empty
/// field); both decode to None.
fn na_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.is_empty() && value != "NA"))
}

fn na_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match na_string(deserializer)? {
        Some(value) => value.parse::<f64>().map(Some).map_err(de::Error::custom),
        None => Ok(None),
    }
}

fn na_medal<'de, D>(deserializer: D) -> Result<Option<Medal>, D::Error>
where
    D: Deserializer<'de>,
{
    match na_string(deserializer)?.as_deref() {
        None => Ok(None),
        Some("Gold") => Ok(Some(Medal::Gold)),
        Some("Silver") => Ok(Some(Medal::Silver)),
        Some("Bronze") => Ok(Some(Medal::Bronze)),
        Some(other) => Err(de::Error::custom(format!("unknown medal value: {}", other))),
    }
}

fn check_headers(headers: &csv::StringRecord, required: &[&str]) -> Result<(), PersistenceError> {
    for &column in required {
        if !headers.iter().any(|header| header == column) {
            return Err(PersistenceError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

/// Loads the participation table from a delimited text file with a header row.
pub fn load_participation(path: &Path) -> Result<Vec<ParticipationRecord>, PersistenceError> {
    let mut reader = csv::Reader::from_path(path)?;
    check_headers(&reader.headers()?.clone(), EVENT_COLUMNS)?;

    let mut records = Vec::new();
    for row in reader.deserialize::<EventRow>() {
        records.push(row?.into_record());
    }

    log::info!("loaded {} participation rows from {}", records.len(), path.display());
    Ok(records)
}

/// Loads the NOC → region mapping from a delimited text file with a header row.
pub fn load_regions(path: &Path) -> Result<RegionTable, PersistenceError> {
    let mut reader = csv::Reader::from_path(path)?;
    check_headers(&reader.headers()?.clone(), REGION_COLUMNS)?;

    let mut table = RegionTable::new();
    for row in reader.deserialize::<RegionRow>() {
        let row = row?;
        table.insert(row.noc, row.region, row.notes);
    }

    log::info!("loaded {} region mappings from {}", table.len(), path.display());
    Ok(table)
}
