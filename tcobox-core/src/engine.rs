//! The TCO arithmetic. Everything here is pure and infallible: inputs are
//! never validated and out-of-range values propagate into the result.

use tcobox_schemas::{
    breakdown::{ComparisonResult, CostBreakdown},
    profile::{ProjectParameters, TechnologyProfile},
    technology::{PerTechnology, Technology},
};

/// Sales tax applied on top of the capital price.
pub const TAX_RATE: f64 = 0.19;

/// Computes the cost components of a single technology over the project horizon.
pub fn compute_breakdown(profile: &TechnologyProfile, params: &ProjectParameters) -> CostBreakdown {
    let total_hours = params.total_hours();
    let total_months = params.total_months();
    let years = f64::from(params.project_years);

    let capex_with_tax = profile.capital_price * (1.0 + TAX_RATE);
    let energy_cost = profile.hourly_consumption * profile.energy_unit_price * total_hours;
    let maintenance_cost =
        profile.monthly_maintenance * total_months + profile.annual_tire_cost * years;
    let salvage_value = profile.capital_price * (profile.salvage_percent / 100.0);
    let net_tco = capex_with_tax + energy_cost + maintenance_cost - salvage_value;

    CostBreakdown {
        capex_with_tax,
        energy_cost,
        maintenance_cost,
        salvage_value,
        net_tco,
    }
}

/// Computes all four breakdowns and the savings of EP against the diesel baseline.
pub fn compare_all(
    profiles: &PerTechnology<TechnologyProfile>,
    params: &ProjectParameters,
) -> ComparisonResult {
    let breakdowns = Technology::ALL.map(|t| compute_breakdown(profiles.get(t), params));
    let savings = breakdowns[Technology::Diesel as usize].net_tco
        - breakdowns[Technology::ElectricLithium as usize].net_tco;

    tracing::debug!(
        hours = params.total_hours(),
        years = params.project_years,
        savings,
        "Compared technologies"
    );

    ComparisonResult { breakdowns, savings }
}
