//! FILENAME: query-engine/src/leaderboard.rs
//! Leaderboard Engine - athletes ranked by medal count.
//!
//! Ranking counts medal rows per athlete name (a team medal deliberately
//! counts for every member here; it is the athlete's medal). Ties break by
//! first-encounter order, not alphabetically. Descriptive columns come from
//! the athlete's first row in the full table.

use engine::NormalizedRecord;
use rustc_hash::FxHashMap;

use crate::definition::SportFilter;
use crate::view::LeaderboardRow;

/// Top `limit` medal-winning athletes, optionally restricted to one sport.
pub fn top_athletes(
    records: &[NormalizedRecord],
    sport: &SportFilter,
    limit: usize,
) -> Vec<LeaderboardRow> {
    ranked(records, |r| sport.matches(&r.sport), limit)
}

/// Top `limit` medal-winning athletes of one region.
pub fn top_athletes_for_country(
    records: &[NormalizedRecord],
    region: &str,
    limit: usize,
) -> Vec<LeaderboardRow> {
    ranked(records, |r| r.region.as_deref() == Some(region), limit)
}

fn ranked<F>(records: &[NormalizedRecord], keep: F, limit: usize) -> Vec<LeaderboardRow>
where
    F: Fn(&NormalizedRecord) -> bool,
{
    let mut counts: FxHashMap<&str, u32> = FxHashMap::default();
    let mut order: Vec<&str> = Vec::new();

    for row in records {
        if row.medal.is_none() || !keep(row) {
            continue;
        }
        if !counts.contains_key(row.name.as_str()) {
            order.push(&row.name);
        }
        *counts.entry(&row.name).or_insert(0) += 1;
    }

    // Stable sort: equal counts keep first-encounter order.
    order.sort_by(|a, b| counts[*b].cmp(&counts[*a]));
    order.truncate(limit);

    // Representative descriptive columns: the athlete's first row in the
    // full table, medal-winning or not.
    let mut first_row: FxHashMap<&str, &NormalizedRecord> = FxHashMap::default();
    for row in records {
        first_row.entry(row.name.as_str()).or_insert(row);
    }

    order
        .into_iter()
        .map(|name| {
            let representative = first_row[name];
            LeaderboardRow {
                name: name.to_string(),
                medals: counts[name],
                sport: representative.sport.clone(),
                region: representative.region.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{COUNTRY_TOP_ATHLETES_LIMIT, TOP_ATHLETES_LIMIT};
    use engine::{Medal, ParticipationRecord, Season, Sex};

    fn rec(
        name: &str,
        sport: &str,
        year: u16,
        medal: Option<Medal>,
        region: Option<&str>,
    ) -> NormalizedRecord {
        let row = ParticipationRecord {
            team: region.unwrap_or("Unknown").to_string(),
            noc: "XXX".to_string(),
            games: format!("{} Summer", year),
            year,
            season: Season::Summer,
            city: "City".to_string(),
            sport: sport.to_string(),
            event: format!("{} Event", sport),
            name: name.to_string(),
            sex: Sex::F,
            age: None,
            height: None,
            weight: None,
            medal,
        };
        NormalizedRecord::from_row(row, region.map(str::to_string))
    }

    fn create_test_table() -> Vec<NormalizedRecord> {
        vec![
            rec("Swimmer A", "Swimming", 2004, Some(Medal::Gold), Some("USA")),
            rec("Swimmer A", "Swimming", 2008, Some(Medal::Gold), Some("USA")),
            rec("Swimmer A", "Swimming", 2012, Some(Medal::Silver), Some("USA")),
            rec("Gymnast B", "Gymnastics", 2008, Some(Medal::Gold), Some("Romania")),
            rec("Gymnast B", "Gymnastics", 2008, Some(Medal::Bronze), Some("Romania")),
            rec("Runner C", "Athletics", 2008, Some(Medal::Gold), Some("Jamaica")),
            rec("Runner C", "Athletics", 2012, Some(Medal::Gold), Some("Jamaica")),
            rec("Rower D", "Rowing", 2012, None, Some("USA")),
        ]
    }

    #[test]
    fn test_global_ranking() {
        let table = create_test_table();
        let rows = top_athletes(&table, &SportFilter::Overall, TOP_ATHLETES_LIMIT);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "Swimmer A");
        assert_eq!(rows[0].medals, 3);
        assert_eq!(rows[0].sport, "Swimming");
        assert_eq!(rows[0].region.as_deref(), Some("USA"));
    }

    #[test]
    fn test_ties_break_by_first_encounter() {
        let table = create_test_table();
        let rows = top_athletes(&table, &SportFilter::Overall, TOP_ATHLETES_LIMIT);

        // Gymnast B and Runner C both have two medals; Gymnast B appears
        // first in the input, so Gymnast B ranks first.
        assert_eq!(rows[1].name, "Gymnast B");
        assert_eq!(rows[2].name, "Runner C");
    }

    #[test]
    fn test_counts_are_non_increasing_and_names_unique() {
        let table = create_test_table();
        let rows = top_athletes(&table, &SportFilter::Overall, TOP_ATHLETES_LIMIT);

        for pair in rows.windows(2) {
            assert!(pair[0].medals >= pair[1].medals);
            assert_ne!(pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn test_limit_caps_output() {
        let table = create_test_table();
        let rows = top_athletes(&table, &SportFilter::Overall, 2);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_sport_filter() {
        let table = create_test_table();
        let rows = top_athletes(
            &table,
            &SportFilter::Sport("Gymnastics".to_string()),
            TOP_ATHLETES_LIMIT,
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Gymnast B");
        assert_eq!(rows[0].medals, 2);
    }

    #[test]
    fn test_country_variant_ignores_non_medal_rows() {
        let table = create_test_table();
        let rows = top_athletes_for_country(&table, "USA", COUNTRY_TOP_ATHLETES_LIMIT);

        // Rower D has a USA row but no medal.
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Swimmer A");
    }

    #[test]
    fn test_no_medals_returns_empty() {
        let table = vec![rec("Rower D", "Rowing", 2012, None, Some("USA"))];
        let rows = top_athletes(&table, &SportFilter::Overall, TOP_ATHLETES_LIMIT);
        assert!(rows.is_empty());
    }
}
