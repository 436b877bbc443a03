//! FILENAME: query-engine/src/tally.rs
//! Tally Engine - medal counts sliced by edition and/or region.
//!
//! Algorithm:
//! 1. De-duplicate on the team-medal key (a relay medal is one medal, not
//!    one per athlete)
//! 2. Filter by the {Overall, specific} × {Overall, specific} combination
//! 3. Specific region selected: group by Year, ascending by Year
//! 4. Region Overall: group by region, descending by Gold (ties keep
//!    first-encounter order)
//! 5. Append Total = Gold + Silver + Bronze per row

use engine::NormalizedRecord;
use rustc_hash::FxHashMap;

use crate::definition::{EditionFilter, RegionFilter, TEAM_MEDAL_KEY};
use crate::key::distinct;
use crate::view::{MedalTallyRow, TallyGroup};

/// Computes the medal tally for an edition/region filter combination.
///
/// A filter combination matching zero rows returns an empty table. Rows with
/// no medal still create zero-count groups, so every region (or edition)
/// passing the filter appears in the output.
pub fn medal_tally(
    records: &[NormalizedRecord],
    edition: &EditionFilter,
    region: &RegionFilter,
) -> Vec<MedalTallyRow> {
    let deduped = distinct(records, TEAM_MEDAL_KEY);

    let filtered = deduped
        .into_iter()
        .filter(|r| edition.matches(r.year) && region.matches(r.region.as_deref()));

    let mut rows = match region {
        RegionFilter::Region(_) => group_by_edition(filtered),
        RegionFilter::Overall => group_by_region(filtered),
    };

    for row in &mut rows {
        row.total = row.gold + row.silver + row.bronze;
    }

    rows
}

/// Per-year sums for a single region, ascending by year.
fn group_by_edition<'a, I>(rows: I) -> Vec<MedalTallyRow>
where
    I: Iterator<Item = &'a NormalizedRecord>,
{
    let mut sums: FxHashMap<u16, [u32; 3]> = FxHashMap::default();
    for row in rows {
        let cell = sums.entry(row.year).or_default();
        cell[0] += row.gold;
        cell[1] += row.silver;
        cell[2] += row.bronze;
    }

    let mut years: Vec<(u16, [u32; 3])> = sums.into_iter().collect();
    years.sort_unstable_by_key(|&(year, _)| year);

    years
        .into_iter()
        .map(|(year, [gold, silver, bronze])| MedalTallyRow {
            group: TallyGroup::Edition(year),
            gold,
            silver,
            bronze,
            total: 0,
        })
        .collect()
}

/// Per-region sums, descending by gold count. The sort is stable, so regions
/// with equal gold keep their first-encounter order from the input.
fn group_by_region<'a, I>(rows: I) -> Vec<MedalTallyRow>
where
    I: Iterator<Item = &'a NormalizedRecord>,
{
    let mut sums: FxHashMap<&str, [u32; 3]> = FxHashMap::default();
    let mut order: Vec<&str> = Vec::new();

    for row in rows {
        if let Some(region) = row.region.as_deref() {
            if !sums.contains_key(region) {
                order.push(region);
            }
            let cell = sums.entry(region).or_default();
            cell[0] += row.gold;
            cell[1] += row.silver;
            cell[2] += row.bronze;
        }
    }

    let mut tally: Vec<MedalTallyRow> = order
        .into_iter()
        .map(|region| {
            let [gold, silver, bronze] = sums[region];
            MedalTallyRow {
                group: TallyGroup::Region(region.to_string()),
                gold,
                silver,
                bronze,
                total: 0,
            }
        })
        .collect();

    tally.sort_by(|a, b| b.gold.cmp(&a.gold));
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{Medal, ParticipationRecord, Season, Sex};

    fn rec(
        team: &str,
        noc: &str,
        year: u16,
        event: &str,
        name: &str,
        medal: Option<Medal>,
        region: Option<&str>,
    ) -> NormalizedRecord {
        let row = ParticipationRecord {
            team: team.to_string(),
            noc: noc.to_string(),
            games: format!("{} Summer", year),
            year,
            season: Season::Summer,
            city: "City".to_string(),
            sport: "Athletics".to_string(),
            event: event.to_string(),
            name: name.to_string(),
            sex: Sex::M,
            age: None,
            height: None,
            weight: None,
            medal,
        };
        NormalizedRecord::from_row(row, region.map(str::to_string))
    }

    fn create_test_table() -> Vec<NormalizedRecord> {
        vec![
            // A relay gold: two athlete rows, one medal.
            rec("United States", "USA", 2000, "4x100m Relay", "Runner One", Some(Medal::Gold), Some("USA")),
            rec("United States", "USA", 2000, "4x100m Relay", "Runner Two", Some(Medal::Gold), Some("USA")),
            rec("United States", "USA", 2000, "100m", "Runner One", Some(Medal::Silver), Some("USA")),
            rec("Kenya", "KEN", 2000, "5000m", "Distance Runner", Some(Medal::Gold), Some("Kenya")),
            rec("Kenya", "KEN", 2004, "5000m", "Distance Runner", Some(Medal::Bronze), Some("Kenya")),
            // No medal: still creates a zero group for its region.
            rec("France", "FRA", 2004, "100m", "Sprinter", None, Some("France")),
        ]
    }

    #[test]
    fn test_team_medal_counted_once() {
        let table = create_test_table();
        let rows = medal_tally(
            &table,
            &EditionFilter::Year(2000),
            &RegionFilter::Region("USA".to_string()),
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].group, TallyGroup::Edition(2000));
        assert_eq!(rows[0].gold, 1);
        assert_eq!(rows[0].silver, 1);
        assert_eq!(rows[0].total, 2);
    }

    #[test]
    fn test_overall_overall_groups_by_region_gold_descending() {
        let table = create_test_table();
        let rows = medal_tally(&table, &EditionFilter::Overall, &RegionFilter::Overall);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].group, TallyGroup::Region("USA".to_string()));
        assert_eq!(rows[0].gold, 1);
        assert_eq!(rows[1].group, TallyGroup::Region("Kenya".to_string()));
        assert_eq!(rows[1].gold, 1);
        assert_eq!(rows[2].group, TallyGroup::Region("France".to_string()));
        assert_eq!(rows[2].total, 0);
    }

    #[test]
    fn test_gold_ties_keep_first_encounter_order() {
        let table = create_test_table();
        let rows = medal_tally(&table, &EditionFilter::Overall, &RegionFilter::Overall);

        // USA and Kenya both have one gold; USA appears first in the input.
        assert_eq!(rows[0].group, TallyGroup::Region("USA".to_string()));
        assert_eq!(rows[1].group, TallyGroup::Region("Kenya".to_string()));
    }

    #[test]
    fn test_specific_region_overall_edition_is_yearwise() {
        let table = create_test_table();
        let rows = medal_tally(
            &table,
            &EditionFilter::Overall,
            &RegionFilter::Region("Kenya".to_string()),
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].group, TallyGroup::Edition(2000));
        assert_eq!(rows[1].group, TallyGroup::Edition(2004));
        assert_eq!(rows[0].gold, 1);
        assert_eq!(rows[1].bronze, 1);
    }

    #[test]
    fn test_specific_year_overall_region() {
        let table = create_test_table();
        let rows = medal_tally(&table, &EditionFilter::Year(2004), &RegionFilter::Overall);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].group, TallyGroup::Region("Kenya".to_string()));
        assert_eq!(rows[0].bronze, 1);
        assert_eq!(rows[1].group, TallyGroup::Region("France".to_string()));
        assert_eq!(rows[1].total, 0);
    }

    #[test]
    fn test_total_equals_sum_of_medals_for_all_combinations() {
        let table = create_test_table();
        let filters: Vec<(EditionFilter, RegionFilter)> = vec![
            (EditionFilter::Overall, RegionFilter::Overall),
            (EditionFilter::Overall, RegionFilter::Region("USA".to_string())),
            (EditionFilter::Year(2000), RegionFilter::Overall),
            (EditionFilter::Year(2000), RegionFilter::Region("Kenya".to_string())),
        ];

        for (edition, region) in &filters {
            for row in medal_tally(&table, edition, region) {
                assert_eq!(row.total, row.gold + row.silver + row.bronze);
            }
        }
    }

    #[test]
    fn test_empty_match_returns_empty_table() {
        let table = create_test_table();
        let rows = medal_tally(
            &table,
            &EditionFilter::Year(1896),
            &RegionFilter::Region("Kenya".to_string()),
        );
        assert!(rows.is_empty());
    }
}
