use chrono::NaiveDate;
use tcobox_schemas::breakdown::ComparisonResult;

use crate::{
    config::ResolvedInputs,
    format::{millions, money},
};

/// Prints the headline figures after the comparison table.
pub fn print_summary_report(inputs: &ResolvedInputs, result: &ComparisonResult) {
    let years = inputs.snapshot.project.project_years;

    println!("\n--- [Results: {}] ---", inputs.client_name);
    println!("  - TCO EP Equipment:    {:>14}", millions(result.electric().net_tco));
    println!("  - TCO Diesel:          {:>14}", millions(result.baseline().net_tco));
    println!("  - Projected savings:   {:>14}", millions(result.savings));
    println!("----------------------------------------");

    if result.is_viable() {
        println!(
            "Viability confirmed: EP technology saves {} COP over {} years.",
            money(result.savings),
            years
        );
    } else {
        println!(
            "EP technology does not beat diesel over {} years (difference {} COP).",
            years,
            money(result.savings)
        );
    }
}

/// Builds the Markdown executive report exported next to the chart.
pub fn render_markdown_report(
    inputs: &ResolvedInputs,
    result: &ComparisonResult,
    generated_on: NaiveDate,
    chart_file: Option<&str>,
) -> String {
    let years = inputs.snapshot.project.project_years;
    let mut report = format!("# TCO Crystal Box analysis: {}\n\n", inputs.client_name);
    report.push_str(&format!(
        "Generated on: {} | City: {}\n\n",
        generated_on.format("%Y-%m-%d"),
        inputs.city
    ));

    if let Some(chart) = chart_file {
        report.push_str(&format!("![TCO comparison]({})\n\n", chart));
    }

    report.push_str("## Executive summary (millions COP)\n\n");
    report.push_str(&format!(
        "- Initial investment EP: {}\n",
        millions(result.electric().capex_with_tax)
    ));
    report.push_str(&format!(
        "- Energy spend over {} years (EP): {}\n",
        years,
        millions(result.electric().energy_cost)
    ));
    report.push_str(&format!(
        "- Energy spend over {} years (Diesel): {}\n\n",
        years,
        millions(result.baseline().energy_cost)
    ));
    report.push_str(&format!("**TOTAL SAVINGS: {}**\n\n", millions(result.savings)));

    report.push_str("## Cost breakdown (COP)\n\n");
    report.push_str("| Technology | Investment (CAPEX) | Energy | Maintenance | Salvage (-) | Net TCO |\n");
    report.push_str("|------------|-------------------:|-------:|------------:|------------:|--------:|\n");
    for (technology, b) in result.iter() {
        report.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            technology.label(),
            money(b.capex_with_tax),
            money(b.energy_cost),
            money(b.maintenance_cost),
            money(-b.salvage_value),
            money(b.net_tco)
        ));
    }
    report
}
