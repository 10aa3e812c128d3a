//! Labor summary models.
//!
//! This module contains the [`LaborSummary`] type produced by aggregating a
//! batch of work items, along with its per-item breakdown and the record of
//! items that could not be costed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AuditStep, AuditWarning, WageMode};

/// Where a resolved hourly rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// The craft's default market rate.
    Market,
    /// A region-specific prevailing wage determination.
    RegionOverride,
    /// The craft's statewide default prevailing wage.
    StatewideDefault,
}

impl RateSource {
    /// Returns the snake_case name used in audit records.
    pub fn as_str(self) -> &'static str {
        match self {
            RateSource::Market => "market",
            RateSource::RegionOverride => "region_override",
            RateSource::StatewideDefault => "statewide_default",
        }
    }
}

/// The costed form of one work item.
///
/// # Example
///
/// ```
/// use prevailing_wage_engine::models::{LineItemBreakdown, RateSource, WageMode};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = LineItemBreakdown {
///     id: "item_001".to_string(),
///     craft: "Laborer (General)".to_string(),
///     wage_mode: WageMode::Market,
///     hours: Decimal::from_str("80").unwrap(),
///     crew_size: 1,
///     rate: Decimal::from_str("25.00").unwrap(),
///     rate_source: RateSource::Market,
///     cost: Decimal::from_str("2000.00").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemBreakdown {
    /// The caller's identifier for the work item.
    pub id: String,
    /// The craft performing the work.
    pub craft: String,
    /// The wage mode the item was costed under.
    pub wage_mode: WageMode,
    /// Hours per crew member, after coercion of invalid input.
    pub hours: Decimal,
    /// Number of crew members.
    pub crew_size: u32,
    /// The resolved hourly rate.
    pub rate: Decimal,
    /// Where the hourly rate came from.
    pub rate_source: RateSource,
    /// hours × crew_size × rate.
    pub cost: Decimal,
}

/// A work item left out of the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedItem {
    /// The caller's identifier for the work item.
    pub id: String,
    /// The craft named on the work item.
    pub craft: String,
    /// Why the item was excluded.
    pub reason: String,
}

/// The aggregated labor cost of a batch of work items.
///
/// Every field is derived from the inputs; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborSummary {
    /// Sum of hours × crew size over included items.
    pub total_hours: Decimal,
    /// Sum of item costs over included items.
    pub direct_labor_cost: Decimal,
    /// Administrative burden on direct labor cost.
    pub admin_cost: Decimal,
    /// Insurance on direct labor cost.
    pub insurance_cost: Decimal,
    /// Margin on direct labor, admin and insurance.
    pub margin: Decimal,
    /// Direct labor cost plus all markups.
    pub labor_total: Decimal,
    /// The margin rate that was applied to the batch.
    pub margin_rate: Decimal,
    /// Costed items, in input order.
    pub line_items: Vec<LineItemBreakdown>,
    /// Items excluded from the totals, in input order.
    pub skipped_items: Vec<SkippedItem>,
    /// Warnings raised while aggregating.
    pub warnings: Vec<AuditWarning>,
    /// Rule applications, in the order they happened.
    pub audit_steps: Vec<AuditStep>,
}
