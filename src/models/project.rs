//! Project-level input and result models.
//!
//! [`ProjectInputs`] is the immutable value a caller hands to the engine for
//! one calculation; [`ProjectCostResult`] is everything the engine returns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AuditWarning, LaborSummary, WorkItem};

/// Everything needed to cost one project.
///
/// # Example
///
/// ```
/// use prevailing_wage_engine::models::{ProjectInputs, WageMode, WorkItem};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let inputs = ProjectInputs {
///     region: "Los Angeles".to_string(),
///     system_size_kw: Decimal::from_str("50").unwrap(),
///     material_cost_per_watt: Decimal::from_str("1.25").unwrap(),
///     items: vec![WorkItem {
///         id: "item_001".to_string(),
///         craft: "Laborer (General)".to_string(),
///         wage_mode: WageMode::Market,
///         hours: Decimal::from_str("80").unwrap(),
///         crew_size: 1,
///     }],
/// };
/// assert_eq!(inputs.items.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInputs {
    /// The region whose prevailing wage overrides apply.
    pub region: String,
    /// Installed system size in kilowatts.
    pub system_size_kw: Decimal,
    /// Material and other non-labor cost per watt.
    pub material_cost_per_watt: Decimal,
    /// The labor breakdown.
    pub items: Vec<WorkItem>,
}

/// The complete result of a project cost calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCostResult {
    /// The region the calculation was run for.
    pub region: String,
    /// Labor cost of the work items as configured.
    pub labor: LaborSummary,
    /// Labor total of the same items with every item at market rate.
    pub baseline_labor_total: Decimal,
    /// system_size_kw × 1000 × material_cost_per_watt.
    pub non_labor_cost: Decimal,
    /// non_labor_cost + labor total.
    pub total_project_cost: Decimal,
    /// Labor total minus the all-market baseline labor total.
    pub prevailing_wage_impact: Decimal,
    /// Warnings about project-level inputs.
    pub warnings: Vec<AuditWarning>,
}
