//! The immutable in-memory model: identity map, district index, year
//! domain, and attribute set, built in one pass per CSV load.
//!
//! Reloading the source data builds a whole new [`DataModel`] and swaps it
//! in; the old value stays valid until the replacement is complete, so a
//! half-built model is never observable. All selection-time operations are
//! pure reads.

use crate::identity::resolve_names;
use crate::index::{district_key, DistrictIndex};
use crate::series::{materialize, SeriesPoint};
use crate::years::year_domain;
use lea_core::normalize::{normalize_csv, LoadWarning, NormalizeOptions};
use lea_core::record::NormalizedRecord;
use std::collections::{BTreeSet, HashMap};

/// A fully built model plus the data-integrity warnings from its load.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub model: DataModel,
    pub warnings: Vec<LoadWarning>,
}

/// Immutable browsable model of the district finance dataset.
#[derive(Debug, Clone)]
pub struct DataModel {
    names: HashMap<String, String>,
    index: DistrictIndex,
    years: Vec<i32>,
    attributes: Vec<String>,
}

impl DataModel {
    /// Normalize CSV text and build the model in one pass.
    pub fn from_csv(csv_data: &str, options: &NormalizeOptions) -> anyhow::Result<LoadedModel> {
        let outcome = normalize_csv(csv_data, options)?;
        let model = DataModel::build(outcome.records);
        log::info!(
            "model: {} districts, {} years, {} attributes",
            model.index.len(),
            model.years.len(),
            model.attributes.len()
        );
        Ok(LoadedModel {
            model,
            warnings: outcome.warnings,
        })
    }

    /// Build the model from already-normalized records.
    pub fn build(records: Vec<NormalizedRecord>) -> Self {
        let names = resolve_names(&records);
        let years = year_domain(&records);
        let attributes: Vec<String> = records
            .iter()
            .flat_map(|record| record.attributes.keys().cloned())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();
        let index = DistrictIndex::build(records, &names);
        DataModel {
            names,
            index,
            years,
            attributes,
        }
    }

    /// Sorted district keys for selection lists.
    pub fn district_keys(&self) -> Vec<&str> {
        self.index.sorted_keys()
    }

    /// Case-insensitive substring filter over the sorted district keys.
    pub fn search_districts(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        self.index
            .sorted_keys()
            .into_iter()
            .filter(|key| key.to_lowercase().contains(&query))
            .collect()
    }

    /// The global year domain, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// The most recent reporting year in the dataset, the default
    /// selection for year-bound views.
    pub fn latest_year(&self) -> Option<i32> {
        self.years.last().copied()
    }

    /// All attribute names present in the dataset, sorted.
    pub fn attribute_names(&self) -> &[String] {
        &self.attributes
    }

    pub fn district_count(&self) -> usize {
        self.index.len()
    }

    /// Resolve a user-facing district selector to a district key.
    ///
    /// Accepts either a full key (`"Alder Creek USD (100)"`) or a bare
    /// district id (`"100"`).
    pub fn resolve_key(&self, selector: &str) -> Option<String> {
        if self.index.contains_key(selector) {
            return Some(selector.to_string());
        }
        self.names
            .get(selector)
            .map(|name| district_key(name, selector))
    }

    /// Dense series for one district and attribute, one point per year of
    /// the global domain. `None` when the district key or the attribute is
    /// unknown: an empty selection is a no-op, not an error.
    pub fn series(&self, key: &str, attribute: &str) -> Option<Vec<SeriesPoint>> {
        if !self.attributes.iter().any(|a| a == attribute) {
            return None;
        }
        let records = self.index.records(key)?;
        Some(materialize(records, &self.years, attribute))
    }

    /// Two independent dense series over the same year domain, for
    /// dual-axis charts. Each attribute's Missing points are independent.
    pub fn series_pair(
        &self,
        key: &str,
        primary: &str,
        secondary: &str,
    ) -> Option<(Vec<SeriesPoint>, Vec<SeriesPoint>)> {
        Some((self.series(key, primary)?, self.series(key, secondary)?))
    }

    /// The district's record for one year. `None` means the district has
    /// no record for that year, which is distinct from a record whose
    /// attribute values are Missing.
    pub fn snapshot(&self, key: &str, year: i32) -> Option<&NormalizedRecord> {
        self.index.record_for_year(key, year)
    }
}

#[cfg(test)]
mod tests {
    use super::DataModel;
    use lea_core::normalize::NormalizeOptions;
    use lea_core::record::AttributeValue;

    const CSV: &str = "\
year,lea_id,lea_name,enrollment,rev_total
2019,100,D1,1200,14500000
2020,100,D1,1185,15100000
2021,100,D1,1210,0
2020,200,D2,640,7200000
2021,200,D2,655,7450000
";

    fn model() -> DataModel {
        DataModel::from_csv(CSV, &NormalizeOptions::none())
            .unwrap()
            .model
    }

    #[test]
    fn year_domain_is_global_not_per_district() {
        let model = model();
        assert_eq!(model.years(), &[2019, 2020, 2021]);

        // D1 has three years of data, D2 only two, but both series span
        // the full global domain.
        let d1 = model.series("D1 (100)", "enrollment").unwrap();
        assert_eq!(d1.len(), 3);
        assert_eq!(d1[0].value, AttributeValue::Value(1200.0));

        let d2 = model.series("D2 (200)", "enrollment").unwrap();
        assert_eq!(d2.len(), 3);
        assert_eq!(d2[0].year, 2019);
        assert_eq!(d2[0].value, AttributeValue::Missing);
        assert_eq!(d2[1].value, AttributeValue::Value(640.0));
    }

    #[test]
    fn empty_selection_is_a_noop() {
        let model = model();
        assert!(model.series("Nowhere (999)", "enrollment").is_none());
        assert!(model.series("D1 (100)", "not_a_column").is_none());
    }

    #[test]
    fn dual_axis_series_share_the_year_domain() {
        let model = model();
        let (enrollment, revenue) = model
            .series_pair("D1 (100)", "enrollment", "rev_total")
            .unwrap();
        assert_eq!(enrollment.len(), revenue.len());
        // 2021 rev_total is "0": Missing in one series while the other
        // holds a value for the same year.
        assert_eq!(enrollment[2].value, AttributeValue::Value(1210.0));
        assert_eq!(revenue[2].value, AttributeValue::Missing);
    }

    #[test]
    fn snapshot_distinguishes_no_record_from_missing_value() {
        let model = model();
        // D2 has no 2019 record at all.
        assert!(model.snapshot("D2 (200)", 2019).is_none());
        // D1 has a 2021 record whose rev_total is Missing.
        let record = model.snapshot("D1 (100)", 2021).unwrap();
        assert_eq!(record.attribute("rev_total"), Some(&AttributeValue::Missing));
    }

    #[test]
    fn latest_year_is_the_default_selection() {
        assert_eq!(model().latest_year(), Some(2021));
    }

    #[test]
    fn selector_resolution_accepts_key_or_id() {
        let model = model();
        assert_eq!(model.resolve_key("D1 (100)").as_deref(), Some("D1 (100)"));
        assert_eq!(model.resolve_key("200").as_deref(), Some("D2 (200)"));
        assert!(model.resolve_key("300").is_none());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let model = model();
        assert_eq!(model.search_districts("d1"), vec!["D1 (100)"]);
        assert_eq!(model.search_districts("(2"), vec!["D2 (200)"]);
        assert!(model.search_districts("zzz").is_empty());
    }

    #[test]
    fn reload_replaces_the_model_wholesale() {
        let old = model();
        let updated = "\
year,lea_id,lea_name,enrollment
2022,100,D1 Renamed,1300
";
        let new = DataModel::from_csv(updated, &NormalizeOptions::none())
            .unwrap()
            .model;
        // The old model is still fully usable after the new one is built.
        assert_eq!(old.district_count(), 2);
        assert_eq!(new.district_count(), 1);
        assert_eq!(new.district_keys(), vec!["D1 Renamed (100)"]);
    }

    #[test]
    fn sample_fixture_builds_a_model() {
        let loaded = DataModel::from_csv(
            lea_core::SAMPLE_DISTRICTS_CSV,
            &NormalizeOptions::default(),
        )
        .unwrap();
        let model = loaded.model;
        assert_eq!(model.district_count(), 3);
        assert_eq!(model.years(), &[2019, 2020, 2021]);
        // The 2021 Alder Creek row renamed the district; the canonical key
        // uses the most recent name.
        assert!(model
            .district_keys()
            .contains(&"Alder Creek USD (100)"));
        // Cedar Valley has no 2019 record; its series still spans 2019.
        let series = model
            .series("Cedar Valley High (300)", "enrollment")
            .unwrap();
        assert_eq!(series.len(), 3);
        assert!(series[0].value.is_missing());
    }
}
