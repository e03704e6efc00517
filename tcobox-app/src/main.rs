use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};

mod cli;
mod config;
mod format;
mod plotting;
mod report;
mod tables;
mod workflow;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Compare(compare) => workflow::run_comparison(&compare),
        Command::Presets => {
            println!("{}", tables::build_presets_table());
            Ok(())
        }
        Command::Init(init) => config::write_default_scenario(&init.path, init.force),
    }
}

/// Diagnostics go to stderr so stdout carries only the report.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
