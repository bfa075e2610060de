//! Chart-facing commands: dense series materialization and per-year
//! attribute snapshots.

use anyhow::{anyhow, bail};
use lea_core::record::AttributeValue;
use lea_model::model::DataModel;
use lea_model::series::SeriesPoint;

/// Materialize and print a dense series for one district.
///
/// CSV output aligns every series to the global year domain, one row per
/// year, with an empty field where the value is missing. JSON output uses
/// `null` for missing values, matching the renderer contract.
pub fn run_series(
    data_csv: &str,
    district: &str,
    attribute: &str,
    secondary: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let model = crate::load_model(data_csv)?;
    let key = resolve_district(&model, district)?;

    match secondary {
        Some(secondary) => {
            let (primary_series, secondary_series) = model
                .series_pair(&key, attribute, secondary)
                .ok_or_else(|| anyhow!("unknown attribute {attribute:?} or {secondary:?}"))?;
            if json {
                let doc = serde_json::json!({
                    "district": key,
                    attribute: primary_series,
                    secondary: secondary_series,
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                println!("year,{attribute},{secondary}");
                for (a, b) in primary_series.iter().zip(&secondary_series) {
                    println!("{},{},{}", a.year, cell(a), cell(b));
                }
            }
        }
        None => {
            let series = model
                .series(&key, attribute)
                .ok_or_else(|| anyhow!("unknown attribute {attribute:?}"))?;
            if json {
                let doc = serde_json::json!({
                    "district": key,
                    attribute: series,
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                println!("year,{attribute}");
                for point in &series {
                    println!("{},{}", point.year, cell(point));
                }
            }
        }
    }
    Ok(())
}

/// Print every attribute value a district reported in one year.
///
/// "No data for this year" (the district has no record at all) is
/// reported distinctly from a record whose individual values are missing.
pub fn run_snapshot(data_csv: &str, district: &str, year: Option<i32>) -> anyhow::Result<()> {
    let model = crate::load_model(data_csv)?;
    let key = resolve_district(&model, district)?;
    let year = match year.or_else(|| model.latest_year()) {
        Some(y) => y,
        None => bail!("dataset contains no years"),
    };

    match model.snapshot(&key, year) {
        None => println!("{key}: no data available for {year}"),
        Some(record) => {
            println!("{key}, {year}:");
            for (name, value) in &record.attributes {
                match value {
                    AttributeValue::Value(v) => println!("  {name}: {v}"),
                    AttributeValue::Missing => println!("  {name}: missing"),
                }
            }
        }
    }
    Ok(())
}

fn resolve_district(model: &DataModel, district: &str) -> anyhow::Result<String> {
    model
        .resolve_key(district)
        .ok_or_else(|| anyhow!("unknown district {district:?}"))
}

fn cell(point: &SeriesPoint) -> String {
    match point.value {
        AttributeValue::Value(v) => v.to_string(),
        AttributeValue::Missing => String::new(),
    }
}
