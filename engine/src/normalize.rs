//! FILENAME: engine/src/normalize.rs
//! PURPOSE: Produces the normalized base table from raw rows and the region map.
//! CONTEXT: Runs once on load. Applies the literal data-quality patch list,
//! left-joins the region mapping on NOC, and expands the medal outcome into
//! one-hot columns. Every input row appears exactly once in the output.

use crate::record::{NormalizedRecord, ParticipationRecord};
use crate::region::RegionTable;

/// A literal one-off correction to a raw row, keyed by (Team, Games).
/// Each entry reproduces a known fix to the source dataset verbatim.
struct NocPatch {
    team: &'static str,
    games: &'static str,
    noc: &'static str,
}

/// The 1896 Singapore entry carries a wrong committee code in the source data.
const NOC_PATCHES: &[NocPatch] = &[NocPatch {
    team: "Singapore",
    games: "1896 Summer",
    noc: "SGP",
}];

/// Normalizes the raw participation table.
///
/// Unmatched NOC codes yield `region = None`; the row is never dropped, so
/// the output row count always equals the input row count.
pub fn normalize(rows: Vec<ParticipationRecord>, regions: &RegionTable) -> Vec<NormalizedRecord> {
    let mut unmapped = 0usize;

    let normalized: Vec<NormalizedRecord> = rows
        .into_iter()
        .map(|mut row| {
            for patch in NOC_PATCHES {
                if row.team == patch.team && row.games == patch.games {
                    row.noc = patch.noc.to_string();
                }
            }

            let region = regions.region_of(&row.noc).map(str::to_string);
            if region.is_none() {
                unmapped += 1;
            }

            NormalizedRecord::from_row(row, region)
        })
        .collect();

    if unmapped > 0 {
        log::debug!("normalize: {} rows have no region mapping", unmapped);
    }

    normalized
}
