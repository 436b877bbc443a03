//! FILENAME: query-engine/src/athletes.rs
//! Demographic Engine - athlete-wise distributions and participation splits.
//!
//! Every function here starts from the de-duplicated athlete table: one row
//! per (Name, Region) pairing, keeping the athlete's first appearance. The
//! same athlete under two team affiliations stays as two entries.
//!
//! All output is built on private copies; the base table is never mutated
//! (the "No Medal" fill happens on the output rows only), so concurrent and
//! repeated queries cannot observe cross-contamination.

use engine::{Medal, NormalizedRecord, Sex};
use rustc_hash::FxHashMap;

use crate::definition::{SportFilter, ATHLETE_KEY, FAMOUS_SPORTS};
use crate::key::distinct;
use crate::view::{AgeSeries, BodyProfileRow, MedalClass, SexParticipationPoint};

/// Weight/height samples per de-duplicated athlete, for the scatter plot.
/// Sport `Overall` returns the full athlete table; a specific sport returns
/// the subset whose rows carry that sport.
pub fn weight_vs_height(records: &[NormalizedRecord], sport: &SportFilter) -> Vec<BodyProfileRow> {
    distinct(records, ATHLETE_KEY)
        .into_iter()
        .filter(|r| sport.matches(&r.sport))
        .map(|r| BodyProfileRow {
            name: r.name.clone(),
            region: r.region.clone(),
            sport: r.sport.clone(),
            sex: r.sex,
            height: r.height,
            weight: r.weight,
            medal: MedalClass::from_outcome(r.medal),
        })
        .collect()
}

/// Distinct-athlete counts per edition split by sex, ascending by year.
/// Missing counts on either side are zero (full outer join of the two
/// per-sex series).
pub fn sex_participation_over_time(records: &[NormalizedRecord]) -> Vec<SexParticipationPoint> {
    let mut counts: FxHashMap<u16, [u32; 2]> = FxHashMap::default();

    for row in distinct(records, ATHLETE_KEY) {
        let slot = counts.entry(row.year).or_default();
        match row.sex {
            Sex::M => slot[0] += 1,
            Sex::F => slot[1] += 1,
        }
    }

    let mut points: Vec<SexParticipationPoint> = counts
        .into_iter()
        .map(|(year, [male, female])| SexParticipationPoint { year, male, female })
        .collect();
    points.sort_unstable_by_key(|point| point.year);
    points
}

/// Age samples for the four medal slices, in fixed label order:
/// overall, Gold, Silver, Bronze. Rows with no age are dropped per slice.
pub fn age_distribution(records: &[NormalizedRecord]) -> Vec<AgeSeries> {
    let athletes = distinct(records, ATHLETE_KEY);

    let slices: [(&str, Option<Medal>); 4] = [
        ("Overall Age", None),
        ("Gold Medalist", Some(Medal::Gold)),
        ("Silver Medalist", Some(Medal::Silver)),
        ("Bronze Medalist", Some(Medal::Bronze)),
    ];

    slices
        .iter()
        .map(|&(label, medal)| AgeSeries {
            label: label.to_string(),
            ages: athletes
                .iter()
                .filter(|r| medal.is_none() || r.medal == medal)
                .filter_map(|r| r.age)
                .collect(),
        })
        .collect()
}

/// Gold-medalist age samples per curated sport, in `FAMOUS_SPORTS` order.
/// A sport with no samples still appears, with an empty list.
pub fn age_distribution_by_sport(records: &[NormalizedRecord]) -> Vec<AgeSeries> {
    let athletes = distinct(records, ATHLETE_KEY);

    FAMOUS_SPORTS
        .iter()
        .map(|&sport| AgeSeries {
            label: sport.to_string(),
            ages: athletes
                .iter()
                .filter(|r| r.sport == sport && r.medal == Some(Medal::Gold))
                .filter_map(|r| r.age)
                .collect(),
        })
        .collect()
}
