//! lea-cli - Command line tool for browsing district finance time series.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lea-cli",
    version,
    about = "School district finance time-series explorer"
)]
struct Cli {
    #[command(subcommand)]
    command: lea_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    lea_cmd::run(cli.command)
}
