//! Per-district record index keyed by `"{canonicalName} ({districtId})"`.

use lea_core::record::NormalizedRecord;
use std::collections::HashMap;

/// Format the unique lookup key for a district. The id suffix keeps keys
/// unique even when two districts share a display name.
pub fn district_key(canonical_name: &str, district_id: &str) -> String {
    format!("{} ({})", canonical_name, district_id)
}

/// Records grouped by district key, input order preserved per bucket.
#[derive(Debug, Clone, Default)]
pub struct DistrictIndex {
    buckets: HashMap<String, Vec<NormalizedRecord>>,
}

impl DistrictIndex {
    /// Bucket records under their district key. Every record lands in
    /// exactly one bucket; none are dropped or deduplicated, including
    /// duplicate (district, year) rows.
    ///
    /// `names` must cover every district id in `records`; ids resolve from
    /// the records themselves, so a miss would mean the caller paired this
    /// index with the wrong identity map. Such records keep their own name
    /// rather than being dropped.
    pub fn build(records: Vec<NormalizedRecord>, names: &HashMap<String, String>) -> Self {
        let mut buckets: HashMap<String, Vec<NormalizedRecord>> = HashMap::new();
        for record in records {
            let canonical = names
                .get(&record.district_id)
                .map(String::as_str)
                .unwrap_or(record.district_name.as_str());
            let key = district_key(canonical, &record.district_id);
            buckets.entry(key).or_default().push(record);
        }
        DistrictIndex { buckets }
    }

    /// Sorted district keys, the canonical browsing order for selection
    /// lists. Case-sensitive lexicographic, computed per call.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.buckets.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// All records for a district, in input order.
    pub fn records(&self, key: &str) -> Option<&[NormalizedRecord]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// The district's record for one year, if any.
    ///
    /// Duplicate (district, year) rows resolve first-in-input-order-wins;
    /// later duplicates stay in the bucket but are never read.
    pub fn record_for_year(&self, key: &str, year: i32) -> Option<&NormalizedRecord> {
        self.buckets
            .get(key)?
            .iter()
            .find(|record| record.year == year)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.buckets.contains_key(key)
    }
}
