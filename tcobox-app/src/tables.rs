use comfy_table::{modifiers, presets, Attribute, Cell, CellAlignment, Color, Table};
use tcobox_core::{presets::all_presets, snapshot::InputSnapshot};
use tcobox_schemas::{breakdown::ComparisonResult, technology::Technology};

use crate::format::money;

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table
}

fn amount(value: f64) -> Cell {
    Cell::new(money(value)).set_alignment(CellAlignment::Right)
}

pub fn build_comparison_table(result: &ComparisonResult) -> Table {
    let cheapest = result.cheapest();
    let mut table = new_table();
    table.set_header(vec![
        "Technology",
        "Investment (CAPEX)",
        "Energy",
        "Maintenance",
        "Salvage (-)",
        "Net TCO",
    ]);
    for (technology, b) in result.iter() {
        let name = Cell::new(technology.label());
        table.add_row(vec![
            if technology == cheapest {
                name.add_attribute(Attribute::Bold)
            } else {
                name
            },
            amount(b.capex_with_tax),
            amount(b.energy_cost),
            amount(b.maintenance_cost),
            amount(-b.salvage_value).fg(Color::DarkGrey),
            amount(b.net_tco).fg(if technology == cheapest {
                Color::Green
            } else {
                Color::Reset
            }),
        ]);
    }
    table
}

/// The per-technology inputs as they enter the engine.
pub fn build_inputs_table(snapshot: &InputSnapshot) -> Table {
    let profiles = snapshot.profiles();
    let mut table = new_table();
    table.set_header(vec![
        "Technology",
        "Price (pre-tax)",
        "Consumption",
        "Energy price",
        "Maintenance / month",
        "Tires / year",
        "Salvage",
    ]);
    for (technology, p) in profiles.iter() {
        table.add_row(vec![
            Cell::new(technology.label()),
            amount(p.capital_price),
            Cell::new(format!("{} {}", p.hourly_consumption, technology.consumption_unit()))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{} {}", money(p.energy_unit_price), technology.energy_price_unit()))
                .set_alignment(CellAlignment::Right),
            amount(p.monthly_maintenance),
            amount(p.annual_tire_cost),
            Cell::new(format!("{}%", p.salvage_percent)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_presets_table() -> Table {
    let mut table = new_table();
    let mut header = vec!["Capacity".to_string()];
    header.extend(
        Technology::ALL.iter().map(|t| format!("{} ({})", t.label(), t.consumption_unit())),
    );
    table.set_header(header);
    for (capacity, preset) in all_presets() {
        let mut row = vec![Cell::new(format!("{:.1} t", capacity))];
        row.extend(
            preset
                .iter()
                .map(|(_, value)| Cell::new(value).set_alignment(CellAlignment::Right)),
        );
        table.add_row(row);
    }
    table
}
