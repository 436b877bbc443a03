//! Row Keys - the de-duplication machinery shared by every engine.
//!
//! The dataset's counting rules are defined in terms of "drop duplicate rows
//! over this column subset" operations: a team medal is eight athlete rows
//! with one (Team, NOC, Year, Games, Sport, City, Event, Medal) key, a
//! returning athlete is many rows with one (Name, Region) key. This module
//! builds hashable keys from a record and a column-selector list and keeps
//! the first row per key, preserving input order.

use engine::{Medal, NormalizedRecord, Season, Sex};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::definition::Column;

/// One component of a row key. Missing values are a distinct part so that
/// two rows lacking a value share a key (no-medal rows of one event group
/// together, as do rows with no region mapping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPart<'a> {
    Null,
    Year(u16),
    Season(Season),
    Sex(Sex),
    Medal(Medal),
    Text(&'a str),
}

/// A row key over a column subset. Inline capacity covers the widest key in
/// use, the 8-column team-medal key.
pub type RowKey<'a> = SmallVec<[KeyPart<'a>; 8]>;

/// The key component of `row` for a single column.
pub fn key_part<'a>(row: &'a NormalizedRecord, column: Column) -> KeyPart<'a> {
    match column {
        Column::Team => KeyPart::Text(&row.team),
        Column::Noc => KeyPart::Text(&row.noc),
        Column::Games => KeyPart::Text(&row.games),
        Column::Year => KeyPart::Year(row.year),
        Column::Season => KeyPart::Season(row.season),
        Column::City => KeyPart::Text(&row.city),
        Column::Sport => KeyPart::Text(&row.sport),
        Column::Event => KeyPart::Text(&row.event),
        Column::Athlete => KeyPart::Text(&row.name),
        Column::Sex => KeyPart::Sex(row.sex),
        Column::Medal => row.medal.map_or(KeyPart::Null, KeyPart::Medal),
        Column::Region => row.region.as_deref().map_or(KeyPart::Null, KeyPart::Text),
    }
}

/// Builds the key of `row` over `columns`.
pub fn row_key<'a>(row: &'a NormalizedRecord, columns: &[Column]) -> RowKey<'a> {
    columns.iter().map(|&column| key_part(row, column)).collect()
}

/// Keeps the first row for every distinct key over `columns`, preserving
/// input order. Idempotent: a second pass keeps every row.
pub fn distinct<'a, I>(rows: I, columns: &[Column]) -> Vec<&'a NormalizedRecord>
where
    I: IntoIterator<Item = &'a NormalizedRecord>,
{
    let mut seen: FxHashSet<RowKey<'a>> = FxHashSet::default();
    let mut kept = Vec::new();

    for row in rows {
        if seen.insert(row_key(row, columns)) {
            kept.push(row);
        }
    }

    kept
}
