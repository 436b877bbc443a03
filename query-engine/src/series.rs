//! FILENAME: query-engine/src/series.rs
//! Time-Series Engine - distinct-entity counts per edition.
//!
//! A nation entering forty events in one Games still counts once for that
//! year, so each series de-duplicates on (Year, column) before counting.

use engine::NormalizedRecord;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::definition::Column;
use crate::key::{distinct, key_part, KeyPart};
use crate::view::{DatasetSummary, TimeSeriesPoint};

/// Counts distinct values of `column` per edition, ascending by year.
/// Rows where the value is missing (e.g. an unmapped region) do not count.
/// The output never contains a duplicate year.
pub fn count_distinct_per_edition(
    records: &[NormalizedRecord],
    column: Column,
) -> Vec<TimeSeriesPoint> {
    let mut counts: FxHashMap<u16, u32> = FxHashMap::default();

    for row in distinct(records, &[Column::Year, column]) {
        if key_part(row, column) != KeyPart::Null {
            *counts.entry(row.year).or_insert(0) += 1;
        }
    }

    let mut points: Vec<TimeSeriesPoint> = counts
        .into_iter()
        .map(|(edition, count)| TimeSeriesPoint { edition, count })
        .collect();
    points.sort_unstable_by_key(|point| point.edition);
    points
}

/// Distinct non-null values of a single column across the whole table.
fn distinct_values(records: &[NormalizedRecord], column: Column) -> u32 {
    let mut seen: FxHashSet<KeyPart<'_>> = FxHashSet::default();
    for row in records {
        let part = key_part(row, column);
        if part != KeyPart::Null {
            seen.insert(part);
        }
    }
    seen.len() as u32
}

/// Headline counts for the overview panel.
pub fn dataset_summary(records: &[NormalizedRecord]) -> DatasetSummary {
    DatasetSummary {
        // The 1906 Intercalated Games are in the data but are not an
        // official edition.
        editions: distinct_values(records, Column::Year).saturating_sub(1),
        cities: distinct_values(records, Column::City),
        sports: distinct_values(records, Column::Sport),
        events: distinct_values(records, Column::Event),
        athletes: distinct_values(records, Column::Athlete),
        nations: distinct_values(records, Column::Region),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{ParticipationRecord, Season, Sex};

    fn rec(year: u16, event: &str, name: &str, region: Option<&str>) -> NormalizedRecord {
        let row = ParticipationRecord {
            team: region.unwrap_or("Unknown").to_string(),
            noc: "XXX".to_string(),
            games: format!("{} Summer", year),
            year,
            season: Season::Summer,
            city: format!("Host {}", year),
            sport: "Athletics".to_string(),
            event: event.to_string(),
            name: name.to_string(),
            sex: Sex::M,
            age: None,
            height: None,
            weight: None,
            medal: None,
        };
        NormalizedRecord::from_row(row, region.map(str::to_string))
    }

    fn create_test_table() -> Vec<NormalizedRecord> {
        vec![
            rec(1996, "100m", "A", Some("USA")),
            rec(1996, "200m", "B", Some("USA")),
            rec(1996, "100m", "C", Some("Kenya")),
            rec(2000, "100m", "A", Some("USA")),
            rec(2000, "100m", "D", None),
        ]
    }

    #[test]
    fn test_nations_per_edition_count_once_per_year() {
        let table = create_test_table();
        let points = count_distinct_per_edition(&table, Column::Region);

        assert_eq!(
            points,
            vec![
                TimeSeriesPoint { edition: 1996, count: 2 },
                TimeSeriesPoint { edition: 2000, count: 1 },
            ]
        );
    }

    #[test]
    fn test_events_per_edition() {
        let table = create_test_table();
        let points = count_distinct_per_edition(&table, Column::Event);

        assert_eq!(
            points,
            vec![
                TimeSeriesPoint { edition: 1996, count: 2 },
                TimeSeriesPoint { edition: 2000, count: 1 },
            ]
        );
    }

    #[test]
    fn test_output_is_ascending_with_no_duplicate_years() {
        let mut table = create_test_table();
        table.insert(0, rec(2016, "100m", "E", Some("USA")));

        let points = count_distinct_per_edition(&table, Column::Region);
        let years: Vec<u16> = points.iter().map(|p| p.edition).collect();

        let mut sorted = years.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(years, sorted);
    }

    #[test]
    fn test_dataset_summary() {
        let table = create_test_table();
        let summary = dataset_summary(&table);

        // Two distinct years minus the unofficial-edition adjustment.
        assert_eq!(summary.editions, 1);
        assert_eq!(summary.cities, 2);
        assert_eq!(summary.sports, 1);
        assert_eq!(summary.events, 2);
        assert_eq!(summary.athletes, 4);
        assert_eq!(summary.nations, 2);
    }
}
