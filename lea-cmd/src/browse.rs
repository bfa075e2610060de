//! Browsing commands: district, year, and attribute listings.

use lea_core::terminology;
use log::info;

/// Print district keys in canonical browsing order, optionally filtered
/// by a case-insensitive substring search.
pub fn run_districts(data_csv: &str, search: Option<&str>) -> anyhow::Result<()> {
    let model = crate::load_model(data_csv)?;
    let keys = match search {
        Some(query) => model.search_districts(query),
        None => model.district_keys(),
    };
    info!("{} of {} districts listed", keys.len(), model.district_count());
    for key in keys {
        println!("{key}");
    }
    Ok(())
}

/// Print the global year domain, ascending.
pub fn run_years(data_csv: &str) -> anyhow::Result<()> {
    let model = crate::load_model(data_csv)?;
    for year in model.years() {
        println!("{year}");
    }
    Ok(())
}

/// Print attribute column names with plain-language descriptions where
/// the column is one of the well-known upstream fields.
pub fn run_attributes(data_csv: &str) -> anyhow::Result<()> {
    let model = crate::load_model(data_csv)?;
    for name in model.attribute_names() {
        match terminology::describe(name) {
            Some(description) => println!("{name}: {description}"),
            None => println!("{name}"),
        }
    }
    Ok(())
}
