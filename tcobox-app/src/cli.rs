use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// Log debug events (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare lithium, diesel, LPG and gasoline trucks and export the results.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Print the default hourly consumption per capacity class.
    #[clap(name = "presets")]
    Presets,

    /// Write a scenario file with the default inputs.
    #[clap(name = "init")]
    Init(InitArgs),
}

#[derive(Parser)]
pub struct CompareArgs {
    /// Scenario YAML file. Defaults are used when omitted.
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Capacity class in tonnes. Resets consumption to that class's preset.
    #[arg(long)]
    pub capacity: Option<f64>,

    /// Operating intensity: 1, 2 or 3 shifts (1800, 3600 or 5400 hours/year).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub shifts: Option<u8>,

    /// Operating hours per year, 1000 to 8000. Wins over `--shifts`.
    #[arg(long)]
    pub hours_per_year: Option<u32>,

    /// Project horizon in years, 2 to 10.
    #[arg(long)]
    pub years: Option<u32>,

    #[arg(long)]
    pub client: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// Parent directory of the timestamped run directory.
    #[arg(long, default_value = "runs")]
    pub output_dir: PathBuf,

    /// Only print to the terminal.
    #[arg(long)]
    pub no_export: bool,
}

#[derive(Parser)]
pub struct InitArgs {
    #[arg(long, default_value = "scenario.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}
