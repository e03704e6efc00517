use approx::assert_relative_eq;
use tcobox_core::{
    builder::{project_parameters, SnapshotBuilder},
    engine::{compare_all, compute_breakdown, TAX_RATE},
    presets::preset_for,
};
use tcobox_schemas::{
    profile::{ProjectParameters, TechnologyProfile},
    technology::Technology,
};

fn reference_params() -> ProjectParameters {
    ProjectParameters {
        operating_hours_per_year: 3600,
        project_years: 5,
    }
}

fn base_profile() -> TechnologyProfile {
    TechnologyProfile {
        capital_price: 110_000_000.0,
        hourly_consumption: 1.05,
        energy_unit_price: 11_000.0,
        monthly_maintenance: 450_000.0,
        annual_tire_cost: 3_500_000.0,
        salvage_percent: 15.0,
    }
}

type Field = fn(&mut TechnologyProfile) -> &mut f64;

const INCREASING_FIELDS: [(&str, Field); 5] = [
    ("capital_price", |p| &mut p.capital_price),
    ("hourly_consumption", |p| &mut p.hourly_consumption),
    ("energy_unit_price", |p| &mut p.energy_unit_price),
    ("monthly_maintenance", |p| &mut p.monthly_maintenance),
    ("annual_tire_cost", |p| &mut p.annual_tire_cost),
];

#[test]
fn reference_scenario_three_ton() {
    let snapshot = SnapshotBuilder::new().build().unwrap();
    assert_eq!(snapshot.project.total_hours(), 18_000.0);
    assert_eq!(snapshot.project.total_months(), 60.0);

    let result = compare_all(&snapshot.profiles(), &snapshot.project);
    let ep = result.electric();
    assert_relative_eq!(ep.capex_with_tax, 160_650_000.0, max_relative = 1e-12);
    assert_relative_eq!(ep.energy_cost, 84_456_000.0, max_relative = 1e-12);
    assert_relative_eq!(ep.maintenance_cost, 19_000_000.0, max_relative = 1e-12);
    assert_relative_eq!(ep.salvage_value, 33_750_000.0, max_relative = 1e-12);
    assert_relative_eq!(ep.net_tco, 230_356_000.0, max_relative = 1e-12);

    // 110M * 1.19 + 1.05 * 11000 * 18000 + (450k * 60 + 3.5M * 5) - 16.5M
    let diesel = result.baseline();
    assert_relative_eq!(diesel.capex_with_tax, 130_900_000.0, max_relative = 1e-12);
    assert_relative_eq!(diesel.energy_cost, 207_900_000.0, max_relative = 1e-12);
    assert_relative_eq!(diesel.maintenance_cost, 44_500_000.0, max_relative = 1e-12);
    assert_relative_eq!(diesel.salvage_value, 16_500_000.0, max_relative = 1e-12);
    assert_relative_eq!(diesel.net_tco, 366_800_000.0, max_relative = 1e-12);

    let lpg = result.get(Technology::Lpg);
    assert_relative_eq!(lpg.energy_cost, 2.4 * 6_000.0 * 18_000.0, max_relative = 1e-12);
    let gasoline = result.get(Technology::Gasoline);
    assert_relative_eq!(gasoline.energy_cost, 1.25 * 16_500.0 * 18_000.0, max_relative = 1e-12);

    assert_relative_eq!(result.savings, 136_444_000.0, max_relative = 1e-12);
    assert!(result.is_viable());
    assert_eq!(result.cheapest(), Technology::ElectricLithium);
}

#[test]
fn capex_scales_linearly_with_price() {
    for price in [1.0, 42_000.0, 100_000_000.0, 135_000_000.0, 1e12] {
        let profile = TechnologyProfile {
            capital_price: price,
            ..base_profile()
        };
        let b = compute_breakdown(&profile, &reference_params());
        assert_relative_eq!(b.capex_with_tax, 1.19 * price, max_relative = 1e-12);
        assert_relative_eq!(b.capex_with_tax, (1.0 + TAX_RATE) * price, max_relative = 1e-15);
    }
}

#[test]
fn net_tco_grows_with_every_cost_input() {
    let params = reference_params();
    for (name, field) in INCREASING_FIELDS {
        let mut previous = f64::NEG_INFINITY;
        for value in [0.0, 0.5, 1.0, 10.0, 1_000.0, 1e6, 1e9] {
            let mut profile = base_profile();
            *field(&mut profile) = value;
            let net = compute_breakdown(&profile, &params).net_tco;
            assert!(net >= previous, "{name}: net TCO fell from {previous} to {net} at {value}");
            previous = net;
        }
    }
}

#[test]
fn net_tco_shrinks_with_salvage() {
    let params = reference_params();
    let mut previous = f64::INFINITY;
    for salvage_percent in [0.0, 5.0, 15.0, 25.0, 50.0, 100.0] {
        let profile = TechnologyProfile { salvage_percent, ..base_profile() };
        let net = compute_breakdown(&profile, &params).net_tco;
        assert!(net <= previous);
        previous = net;
    }
}

#[test]
fn comparison_order_is_fixed() {
    let snapshot = SnapshotBuilder::new().with_capacity(7.0).build().unwrap();
    let result = compare_all(&snapshot.profiles(), &snapshot.project);
    let order: Vec<_> = result.iter().map(|(t, _)| t).collect();
    assert_eq!(
        order,
        vec![Technology::ElectricLithium, Technology::Diesel, Technology::Lpg, Technology::Gasoline]
    );
    for (technology, breakdown) in result.iter() {
        let expected = compute_breakdown(snapshot.profiles().get(technology), &snapshot.project);
        assert_eq!(*breakdown, expected);
    }
}

#[test]
fn savings_is_deterministic() {
    let snapshot = SnapshotBuilder::new()
        .with_capacity(1.8)
        .with_project_years(8)
        .build()
        .unwrap();
    let first = compare_all(&snapshot.profiles(), &snapshot.project);
    let second = compare_all(&snapshot.profiles(), &snapshot.project);
    assert_eq!(first, second);
    assert_eq!(first.savings, first.baseline().net_tco - first.electric().net_tco);
}

#[test]
fn minimum_horizon_stays_finite() {
    let params = project_parameters(1000, 2).unwrap();
    assert_eq!(params.total_hours(), 2000.0);
    assert_eq!(params.total_months(), 24.0);

    let b = compute_breakdown(&base_profile(), &params);
    assert_relative_eq!(b.energy_cost, 1.05 * 11_000.0 * 2000.0, max_relative = 1e-12);
    assert_relative_eq!(
        b.maintenance_cost,
        450_000.0 * 24.0 + 3_500_000.0 * 2.0,
        max_relative = 1e-12
    );
    assert!(b.net_tco.is_finite());
}

#[test]
fn preset_feeds_consumption() {
    let preset = preset_for(3.0).unwrap();
    assert_eq!(preset.electric_lithium, 5.1);
    assert_eq!(preset.diesel, 1.05);
    assert_eq!(preset.lpg, 2.4);
    assert_eq!(preset.gasoline, 1.25);
    assert!(preset_for(4.0).is_err());
}
