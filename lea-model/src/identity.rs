//! Canonical district name resolution.
//!
//! District display names drift across reporting years (renames, merges,
//! re-spellings). One canonical name per district id is used everywhere:
//! the name on the record with the maximum year for that id.

use lea_core::record::NormalizedRecord;
use std::collections::HashMap;

/// Resolve the canonical display name for every district id.
///
/// Single fold, best-so-far per id: a record replaces the current winner
/// when its year is greater than or equal to the winner's, so among
/// records sharing the maximum year the last one in input order wins.
/// That tie-break is an accepted nondeterminism of the dataset (equal-year
/// duplicates carry no ordering of their own), kept explicit here.
pub fn resolve_names(records: &[NormalizedRecord]) -> HashMap<String, String> {
    let mut best: HashMap<String, (i32, &str)> = HashMap::new();
    for record in records {
        let replaces = match best.get(record.district_id.as_str()) {
            Some((year, _)) => record.year >= *year,
            None => true,
        };
        if replaces {
            best.insert(
                record.district_id.clone(),
                (record.year, record.district_name.as_str()),
            );
        }
    }
    best.into_iter()
        .map(|(id, (_, name))| (id, name.to_string()))
        .collect()
}
