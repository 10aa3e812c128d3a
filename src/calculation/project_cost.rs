//! Project cost assembly.
//!
//! This is the engine's entry point: it costs the labor breakdown, runs the
//! prevailing wage comparison and adds the non-labor (materials) cost.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::RateTable;
use crate::models::{ProjectCostResult, ProjectInputs};

use super::impact::compare_impact;
use super::input_coercion::{
    AMOUNT_LIMIT, OUT_OF_RANGE, coerce_non_negative, invalid_input_warning,
};

/// Watts in one kilowatt, for converting system size to material cost.
pub const WATTS_PER_KILOWATT: u32 = 1000;

/// Returns system_size_kw × 1000 × material_cost_per_watt, or `None` when
/// the product does not fit in a `Decimal`.
pub fn non_labor_cost(
    system_size_kw: Decimal,
    material_cost_per_watt: Decimal,
) -> Option<Decimal> {
    system_size_kw
        .checked_mul(Decimal::from(WATTS_PER_KILOWATT))?
        .checked_mul(material_cost_per_watt)
}

/// Calculates the total cost of a project and its prevailing wage impact.
///
/// Never fails: unknown crafts are skipped, and negative or out-of-range
/// quantities are treated as zero, each with a warning on the result. The same inputs and
/// table always produce the same result.
///
/// # Examples
///
/// ```no_run
/// use prevailing_wage_engine::calculation::assemble_project_cost;
/// use prevailing_wage_engine::config::ConfigLoader;
/// use prevailing_wage_engine::models::{ProjectInputs, WageMode, WorkItem};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/california")?;
/// let inputs = ProjectInputs {
///     region: "Los Angeles".to_string(),
///     system_size_kw: Decimal::from(50),
///     material_cost_per_watt: Decimal::from_str("1.25").unwrap(),
///     items: vec![WorkItem {
///         id: "item_001".to_string(),
///         craft: "Electrician (General)".to_string(),
///         wage_mode: WageMode::Regulated,
///         hours: Decimal::from(160),
///         crew_size: 2,
///     }],
/// };
///
/// let result = assemble_project_cost(&inputs, loader.table());
/// println!("Total: ${}", result.total_project_cost.round_dp(2));
/// # Ok::<(), prevailing_wage_engine::error::EngineError>(())
/// ```
pub fn assemble_project_cost(inputs: &ProjectInputs, table: &RateTable) -> ProjectCostResult {
    let mut warnings = Vec::new();

    let system_size = coerce_non_negative(inputs.system_size_kw, "system_size_kw", "project");
    warnings.extend(system_size.warning);
    let material_cost = coerce_non_negative(
        inputs.material_cost_per_watt,
        "material_cost_per_watt",
        "project",
    );
    warnings.extend(material_cost.warning);

    let non_labor_cost = match non_labor_cost(system_size.value, material_cost.value) {
        Some(cost) if cost <= AMOUNT_LIMIT => cost,
        _ => {
            warn!(
                system_size_kw = %system_size.value,
                material_cost_per_watt = %material_cost.value,
                "Non-labor cost out of range; treating it as zero"
            );
            warnings.push(invalid_input_warning(
                "system_size_kw",
                "project",
                OUT_OF_RANGE,
            ));
            Decimal::ZERO
        }
    };
    let comparison = compare_impact(&inputs.items, &inputs.region, table);
    let total_project_cost = non_labor_cost.saturating_add(comparison.actual.labor_total);

    debug!(
        region = %inputs.region,
        items = inputs.items.len(),
        non_labor_cost = %non_labor_cost,
        labor_total = %comparison.actual.labor_total,
        impact = %comparison.impact,
        "Assembled project cost"
    );

    ProjectCostResult {
        region: inputs.region.clone(),
        baseline_labor_total: comparison.baseline.labor_total,
        labor: comparison.actual,
        non_labor_cost,
        total_project_cost,
        prevailing_wage_impact: comparison.impact,
        warnings,
    }
}
