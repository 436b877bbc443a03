//! FILENAME: query-engine/src/crosstab.rs
//! Cross-Tab Engine - Sport × Year pivots of event and medal counts.
//!
//! Both pivots return a dense matrix (missing cells are zero) with sports
//! and years sorted ascending, ready for heatmap rendering.

use engine::NormalizedRecord;
use rustc_hash::FxHashMap;

use crate::definition::{Column, TEAM_MEDAL_KEY};
use crate::key::distinct;
use crate::view::{SportYearMatrix, SportYearRow};

/// Events held per (Sport, Year). One event has many participant rows, so
/// the count runs over distinct (Year, Sport, Event) triples.
pub fn event_count_by_sport_year(records: &[NormalizedRecord]) -> SportYearMatrix {
    let rows = distinct(records, &[Column::Year, Column::Sport, Column::Event]);
    build_matrix(rows.into_iter())
}

/// Medals won by one region per (Sport, Year). Restricted to medal rows,
/// de-duplicated on the team-medal key so a relay win is one medal.
pub fn medal_count_by_sport_year(records: &[NormalizedRecord], region: &str) -> SportYearMatrix {
    let medal_rows = distinct(
        records.iter().filter(|r| r.medal.is_some()),
        TEAM_MEDAL_KEY,
    );
    build_matrix(
        medal_rows
            .into_iter()
            .filter(|r| r.region.as_deref() == Some(region)),
    )
}

fn build_matrix<'a, I>(rows: I) -> SportYearMatrix
where
    I: Iterator<Item = &'a NormalizedRecord>,
{
    let mut cells: FxHashMap<(&str, u16), u32> = FxHashMap::default();
    for row in rows {
        *cells.entry((row.sport.as_str(), row.year)).or_insert(0) += 1;
    }

    let mut sports: Vec<&str> = cells.keys().map(|&(sport, _)| sport).collect();
    sports.sort_unstable();
    sports.dedup();

    let mut years: Vec<u16> = cells.keys().map(|&(_, year)| year).collect();
    years.sort_unstable();
    years.dedup();

    let rows = sports
        .into_iter()
        .map(|sport| SportYearRow {
            sport: sport.to_string(),
            counts: years
                .iter()
                .map(|&year| cells.get(&(sport, year)).copied().unwrap_or(0))
                .collect(),
        })
        .collect();

    SportYearMatrix { years, rows }
}
