//! Dense series materialization over the global year domain.

use lea_core::record::{AttributeValue, NormalizedRecord};
use serde::Serialize;

/// One point of a dense series. `Missing` covers both "the district has a
/// record for this year but no valid value" and "the district has no
/// record for this year at all"; callers that need to tell those apart
/// use the model's year snapshot instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub value: AttributeValue,
}

/// Materialize one attribute of a district over the full year domain.
///
/// Emits exactly one point per domain year, ascending, never skipping a
/// year the district lacks data for. This uniform density is what lets
/// the renderer draw a continuous axis with explicit missing-data markers
/// instead of silently compressing gaps.
///
/// Duplicate (district, year) rows resolve first-in-input-order-wins,
/// matching [`crate::index::DistrictIndex::record_for_year`].
pub fn materialize(
    district_records: &[NormalizedRecord],
    year_domain: &[i32],
    attribute: &str,
) -> Vec<SeriesPoint> {
    year_domain
        .iter()
        .map(|&year| {
            let value = district_records
                .iter()
                .find(|record| record.year == year)
                .and_then(|record| record.attribute(attribute).copied())
                .unwrap_or(AttributeValue::Missing);
            SeriesPoint { year, value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{materialize, SeriesPoint};
    use lea_core::record::{AttributeValue, NormalizedRecord};
    use std::collections::BTreeMap;

    fn record(year: i32, enrollment: AttributeValue) -> NormalizedRecord {
        let mut attributes = BTreeMap::new();
        attributes.insert("enrollment".to_string(), enrollment);
        NormalizedRecord {
            district_id: "1".to_string(),
            district_name: "Alder".to_string(),
            year,
            attributes,
        }
    }

    #[test]
    fn gap_years_appear_as_missing() {
        let records = vec![
            record(2018, AttributeValue::Value(100.0)),
            record(2020, AttributeValue::Value(120.0)),
        ];
        let series = materialize(&records, &[2018, 2019, 2020], "enrollment");
        assert_eq!(
            series,
            vec![
                SeriesPoint {
                    year: 2018,
                    value: AttributeValue::Value(100.0)
                },
                SeriesPoint {
                    year: 2019,
                    value: AttributeValue::Missing
                },
                SeriesPoint {
                    year: 2020,
                    value: AttributeValue::Value(120.0)
                },
            ]
        );
    }

    #[test]
    fn length_always_equals_year_domain_length() {
        let domain = vec![2017, 2018, 2019, 2020, 2021];
        let series = materialize(&[], &domain, "enrollment");
        assert_eq!(series.len(), domain.len());
        assert!(series.iter().all(|p| p.value.is_missing()));
    }

    #[test]
    fn record_with_missing_value_stays_missing() {
        // A record exists for 2019 but its value was normalized to Missing;
        // the point is emitted as Missing, not dropped.
        let records = vec![record(2019, AttributeValue::Missing)];
        let series = materialize(&records, &[2019], "enrollment");
        assert_eq!(series[0].value, AttributeValue::Missing);
    }

    #[test]
    fn serializes_missing_points_as_null() {
        let series = materialize(
            &[record(2020, AttributeValue::Value(7.0))],
            &[2020, 2021],
            "enrollment",
        );
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(
            json,
            r#"[{"year":2020,"value":7.0},{"year":2021,"value":null}]"#
        );
    }
}
