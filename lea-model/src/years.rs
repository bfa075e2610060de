//! Global year domain: every reporting year present anywhere in the
//! dataset, ascending, deduplicated. Computed over the whole dataset
//! before any district filtering, so a district with no data for a year
//! still gets that year (as Missing) when its series is materialized.

use lea_core::record::NormalizedRecord;
use std::collections::BTreeSet;

/// Distinct years across all records, ascending.
pub fn year_domain(records: &[NormalizedRecord]) -> Vec<i32> {
    records
        .iter()
        .map(|record| record.year)
        .collect::<BTreeSet<i32>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::year_domain;
    use lea_core::record::NormalizedRecord;
    use std::collections::BTreeMap;

    fn record(id: &str, year: i32) -> NormalizedRecord {
        NormalizedRecord {
            district_id: id.to_string(),
            district_name: String::new(),
            year,
            attributes: BTreeMap::new(),
        }
    }

    #[test]
    fn sorted_and_deduplicated_across_districts() {
        let records = vec![
            record("1", 2021),
            record("2", 2019),
            record("1", 2019),
            record("2", 2020),
        ];
        assert_eq!(year_domain(&records), vec![2019, 2020, 2021]);
    }

    #[test]
    fn empty_dataset_has_empty_domain() {
        assert!(year_domain(&[]).is_empty());
    }
}
