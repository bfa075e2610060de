//! Row normalization: raw CSV text in, typed records plus load warnings out.
//!
//! Expected columns: `year`, one of `lea_id`/`leaid`, `lea_name`, plus an
//! open set of numeric attribute columns. Identifier columns are consumed
//! as record fields; metadata columns named by [`NormalizeOptions`] are
//! dropped; everything else becomes a numeric attribute under the
//! coercion policy of [`AttributeValue::from_raw`].

use crate::record::{AttributeValue, NormalizedRecord};
use csv::ReaderBuilder;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Primary district identifier column.
pub const DISTRICT_ID_COLUMN: &str = "lea_id";
/// Fallback district identifier column used by some dataset vintages.
pub const DISTRICT_ID_COLUMN_ALT: &str = "leaid";
/// District display name column.
pub const DISTRICT_NAME_COLUMN: &str = "lea_name";
/// Reporting year column.
pub const YEAR_COLUMN: &str = "year";

/// Caller-supplied normalization configuration.
///
/// `excluded_columns` names metadata columns that must not be treated as
/// numeric attributes. The identifier columns (`year`, `lea_id`, `leaid`,
/// `lea_name`) are always consumed as record fields and never need to be
/// listed here.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub excluded_columns: HashSet<String>,
}

impl Default for NormalizeOptions {
    /// Matches the metadata columns of the upstream NCES-derived dataset.
    fn default() -> Self {
        NormalizeOptions {
            excluded_columns: ["phone", "urban_centric_locale"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl NormalizeOptions {
    /// No excluded columns: every non-identifier column is an attribute.
    pub fn none() -> Self {
        NormalizeOptions {
            excluded_columns: HashSet::new(),
        }
    }
}

/// A recoverable data-integrity problem found during normalization.
///
/// Rows with integrity problems are skipped, not aborted on; each skip is
/// recorded here and logged so the load stays observable.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadWarning {
    /// Neither `lea_id` nor `leaid` was present and non-empty.
    MissingDistrictId { line: u64 },
    /// The `year` cell did not parse as an integer.
    InvalidYear { line: u64, raw: String },
    /// A configured excluded column does not exist in the header.
    ExcludedColumnAbsent { column: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::MissingDistrictId { line } => {
                write!(f, "line {line}: row has no district identifier, skipped")
            }
            LoadWarning::InvalidYear { line, raw } => {
                write!(f, "line {line}: year {raw:?} is not an integer, skipped")
            }
            LoadWarning::ExcludedColumnAbsent { column } => {
                write!(f, "excluded column {column:?} is not in the header")
            }
        }
    }
}

/// The result of one normalization pass.
#[derive(Debug, Clone)]
pub struct NormalizeOutcome {
    pub records: Vec<NormalizedRecord>,
    pub warnings: Vec<LoadWarning>,
}

/// Normalize CSV text into typed records, single pass.
///
/// Rows missing a district identifier or carrying a malformed year are
/// skipped with a recorded [`LoadWarning`]. Attribute cells never fail:
/// invalid or non-positive values become [`AttributeValue::Missing`].
pub fn normalize_csv(csv_data: &str, options: &NormalizeOptions) -> anyhow::Result<NormalizeOutcome> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let mut warnings: Vec<LoadWarning> = Vec::new();
    for column in &options.excluded_columns {
        if !column.is_empty() && !headers.iter().any(|h| h == column) {
            warnings.push(LoadWarning::ExcludedColumnAbsent {
                column: column.clone(),
            });
        }
    }

    let position = |name: &str| headers.iter().position(|h| h == name);
    let id_idx = position(DISTRICT_ID_COLUMN);
    let id_alt_idx = position(DISTRICT_ID_COLUMN_ALT);
    let name_idx = position(DISTRICT_NAME_COLUMN);
    let year_idx = position(YEAR_COLUMN);

    // Columns that become numeric attributes: everything that is neither
    // an identifier column nor excluded by configuration.
    let attribute_columns: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| {
            !h.is_empty()
                && h.as_str() != DISTRICT_ID_COLUMN
                && h.as_str() != DISTRICT_ID_COLUMN_ALT
                && h.as_str() != DISTRICT_NAME_COLUMN
                && h.as_str() != YEAR_COLUMN
                && !options.excluded_columns.contains(h.as_str())
        })
        .map(|(i, h)| (i, h.as_str()))
        .collect();

    let mut records: Vec<NormalizedRecord> = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i)).map(str::trim).unwrap_or("");

        let district_id = match (cell(id_idx), cell(id_alt_idx)) {
            (id, _) if !id.is_empty() => id,
            (_, alt) if !alt.is_empty() => alt,
            _ => {
                warnings.push(LoadWarning::MissingDistrictId { line });
                skipped += 1;
                continue;
            }
        };

        let year_raw = cell(year_idx);
        let year: i32 = match year_raw.parse() {
            Ok(y) => y,
            Err(_) => {
                warnings.push(LoadWarning::InvalidYear {
                    line,
                    raw: year_raw.to_string(),
                });
                skipped += 1;
                continue;
            }
        };

        let mut attributes: BTreeMap<String, AttributeValue> = BTreeMap::new();
        for (idx, name) in &attribute_columns {
            let raw = row.get(*idx).unwrap_or("");
            attributes.insert((*name).to_string(), AttributeValue::from_raw(raw));
        }

        records.push(NormalizedRecord {
            district_id: district_id.to_string(),
            district_name: cell(name_idx).to_string(),
            year,
            attributes,
        });
    }

    for warning in &warnings {
        log::warn!("normalize: {}", warning);
    }
    log::info!(
        "normalize: {} records, {} rows skipped",
        records.len(),
        skipped
    );

    Ok(NormalizeOutcome { records, warnings })
}
