//! Command implementations for the district finance explorer CLI.
//!
//! Every command loads the source CSV, builds the in-memory model, and
//! reads from it; data-integrity warnings from the load are emitted via
//! the `log` facade.

use clap::Subcommand;
use lea_core::normalize::NormalizeOptions;
use lea_model::model::DataModel;

pub mod browse;
pub mod chart;

#[derive(Subcommand)]
pub enum Command {
    /// List districts in canonical browsing order
    Districts {
        /// Path to the district finance CSV
        #[arg(short = 'd', long)]
        data_csv: String,

        /// Case-insensitive substring filter on district keys
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Print the global year domain
    Years {
        /// Path to the district finance CSV
        #[arg(short = 'd', long)]
        data_csv: String,
    },

    /// List attribute columns, with descriptions where known
    Attributes {
        /// Path to the district finance CSV
        #[arg(short = 'd', long)]
        data_csv: String,
    },

    /// Materialize a dense gap-filled series for a district and attribute
    Series {
        /// Path to the district finance CSV
        #[arg(short = 'd', long)]
        data_csv: String,

        /// District key ("Name (id)") or bare district id
        district: String,

        /// Attribute column to chart
        attribute: String,

        /// Second attribute for a dual-axis series
        #[arg(long)]
        secondary: Option<String>,

        /// Emit JSON (missing values as null) instead of CSV rows
        #[arg(long)]
        json: bool,
    },

    /// Show all attribute values for a district in one year
    Snapshot {
        /// Path to the district finance CSV
        #[arg(short = 'd', long)]
        data_csv: String,

        /// District key ("Name (id)") or bare district id
        district: String,

        /// Reporting year (defaults to the most recent year in the data)
        #[arg(short, long)]
        year: Option<i32>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Districts { data_csv, search } => {
            browse::run_districts(&data_csv, search.as_deref())
        }
        Command::Years { data_csv } => browse::run_years(&data_csv),
        Command::Attributes { data_csv } => browse::run_attributes(&data_csv),
        Command::Series {
            data_csv,
            district,
            attribute,
            secondary,
            json,
        } => chart::run_series(&data_csv, &district, &attribute, secondary.as_deref(), json),
        Command::Snapshot {
            data_csv,
            district,
            year,
        } => chart::run_snapshot(&data_csv, &district, year),
    }
}

/// Read the CSV file and build the model with the default metadata-column
/// exclusions.
pub(crate) fn load_model(data_csv: &str) -> anyhow::Result<DataModel> {
    let csv_data = std::fs::read_to_string(data_csv)?;
    let loaded = DataModel::from_csv(&csv_data, &NormalizeOptions::default())?;
    if !loaded.warnings.is_empty() {
        log::info!(
            "{}: {} rows skipped or flagged during load",
            data_csv,
            loaded.warnings.len()
        );
    }
    Ok(loaded.model)
}
