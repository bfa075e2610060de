use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// One numeric attribute value for a (district, year) pair.
///
/// `Missing` covers empty cells, values that fail numeric coercion, and
/// values that are zero or negative. The non-positive-is-missing rule is
/// domain policy for this dataset (a district cannot report zero total
/// revenue or negative enrollment; such cells mean "no valid figure"),
/// not a parsing artifact.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AttributeValue {
    Value(f64),
    Missing,
}

impl AttributeValue {
    /// Coerce a raw CSV cell into an attribute value.
    ///
    /// Produces `Missing` if the trimmed cell is empty, does not parse as
    /// a finite number, or parses to a value <= 0.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return AttributeValue::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 => AttributeValue::Value(v),
            _ => AttributeValue::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, AttributeValue::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Value(v) => Some(*v),
            AttributeValue::Missing => None,
        }
    }
}

/// Serialized as a plain number, or `null` for `Missing`. The chart
/// renderer treats `null` as "break the line here and mark the gap".
impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttributeValue::Value(v) => serializer.serialize_f64(*v),
            AttributeValue::Missing => serializer.serialize_none(),
        }
    }
}

/// One normalized row of the district finance dataset.
///
/// Attribute keys are sorted (`BTreeMap`) so per-year attribute listings
/// come out in a deterministic alphabetical order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub district_id: String,
    pub district_name: String,
    pub year: i32,
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl NormalizedRecord {
    /// Look up one attribute on this record. `None` means the column was
    /// not part of the dataset at all, which is distinct from a present
    /// column holding [`AttributeValue::Missing`].
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}
