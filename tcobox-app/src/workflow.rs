use anyhow::{Context, Result};
use std::{fs, path::Path};
use tcobox_core::{engine::compare_all, export, scenario};
use tcobox_schemas::breakdown::ComparisonResult;
use tracing::{info, warn};

use crate::{
    cli::CompareArgs,
    config::{self, ResolvedInputs},
    plotting, report, tables,
};

const CHART_FILE: &str = "tco_chart.png";

/// Resolves the inputs, prints the comparison and, unless disabled, exports the run.
pub fn run_comparison(args: &CompareArgs) -> Result<()> {
    let inputs = config::resolve_inputs(args)?;
    let snapshot = &inputs.snapshot;
    info!(
        client = %inputs.client_name,
        capacity_ton = snapshot.capacity_ton,
        hours_per_year = snapshot.project.operating_hours_per_year,
        years = snapshot.project.project_years,
        "Running TCO comparison"
    );

    let result = compare_all(&snapshot.profiles(), &snapshot.project);

    println!("Inputs ({} t capacity class):", snapshot.capacity_ton);
    println!("{}", tables::build_inputs_table(snapshot));
    println!("\nTotal cost of ownership over {} years:", snapshot.project.project_years);
    println!("{}", tables::build_comparison_table(&result));
    report::print_summary_report(&inputs, &result);

    if args.no_export {
        return Ok(());
    }

    let run_dir = args.output_dir.join(format!(
        "TCO_{}_{}",
        file_safe(&inputs.client_name),
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));
    export_run(&run_dir, &inputs, &result)?;

    println!("\nResults are in '{}'", run_dir.display());
    Ok(())
}

fn export_run(run_dir: &Path, inputs: &ResolvedInputs, result: &ComparisonResult) -> Result<()> {
    let chart = match plotting::render_tco_chart(result, inputs.snapshot.project.project_years) {
        Ok(png) => Some(png),
        Err(e) => {
            warn!(error = %e, "Chart rendering failed, exporting without it");
            None
        }
    };
    let files = run_files(inputs, result, chart)?;

    fs::create_dir_all(run_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", run_dir))?;
    for (name, bytes) in &files {
        export::write_bytes(&run_dir.join(name), bytes)?;
    }

    info!(dir = %run_dir.display(), files = files.len(), "Exported comparison");
    Ok(())
}

/// Every file of a run directory, rendered before anything touches the disk.
fn run_files(
    inputs: &ResolvedInputs,
    result: &ComparisonResult,
    chart: Option<Vec<u8>>,
) -> Result<Vec<(&'static str, Vec<u8>)>> {
    // Keep the resolved inputs next to the results for traceability.
    let resolved = inputs.snapshot.to_scenario(&inputs.client_name, &inputs.city);
    let mut files = vec![
        ("scenario.yaml", scenario::scenario_to_yaml(&resolved)?.into_bytes()),
        ("comparison.csv", export::comparison_csv(result)?),
        ("comparison.json", export::comparison_json(result)?),
    ];

    let today = chrono::Local::now().date_naive();
    let chart_file = chart.as_ref().map(|_| CHART_FILE);
    let markdown = report::render_markdown_report(inputs, result, today, chart_file);
    if let Some(png) = chart {
        files.push((CHART_FILE, png));
    }
    files.push(("report.md", markdown.into_bytes()));
    Ok(files)
}

/// Keeps letters and digits so client names make portable directory names.
fn file_safe(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "client".to_string()
    } else {
        cleaned
    }
}
