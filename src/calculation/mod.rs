//! Calculation logic for the Prevailing Wage Engine.
//!
//! This module contains the calculation functions for costing a labor
//! breakdown: rate resolution with regional overrides, line item costing,
//! markup stacking, batch aggregation, the all-market baseline comparison,
//! and final project cost assembly.

mod aggregation;
mod impact;
mod input_coercion;
mod line_item;
mod markups;
mod project_cost;
mod rate_resolution;

pub use aggregation::{
    UNKNOWN_REGION_CODE, WageTransform, aggregate_labor, aggregate_labor_with,
};
pub use impact::{ImpactComparison, compare_impact};
pub use input_coercion::{
    AMOUNT_LIMIT, CoercedInput, INVALID_INPUT_CODE, OUT_OF_RANGE, coerce_non_negative,
    invalid_input_warning,
};
pub use line_item::{LineItemCost, cost_line_item};
pub use markups::{MarkupResult, apply_markups, margin_rate_for};
pub use project_cost::{WATTS_PER_KILOWATT, assemble_project_cost, non_labor_cost};
pub use rate_resolution::{
    CraftRateQuote, RateResolution, provenance_note, quote_region_rates, resolve_rate,
};
