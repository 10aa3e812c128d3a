//! Prevailing wage impact comparison.
//!
//! The impact is the difference between the labor total of the work items as
//! configured and the labor total of the same items all costed at market
//! rate. Both runs go through the same aggregation, so the only difference
//! between them is the wage mode of each item.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::{LaborSummary, WorkItem};

use super::aggregation::{WageTransform, aggregate_labor_with};

/// The two labor runs and the difference between them.
#[derive(Debug, Clone)]
pub struct ImpactComparison {
    /// Labor summary with each item's own wage mode.
    pub actual: LaborSummary,
    /// Labor summary with every item at market rate.
    pub baseline: LaborSummary,
    /// actual.labor_total - baseline.labor_total.
    pub impact: Decimal,
}

/// Compares the configured labor cost against an all-market baseline.
///
/// The baseline also switches to the market margin, because no item in it is
/// prevailing wage work.
pub fn compare_impact(items: &[WorkItem], region: &str, table: &RateTable) -> ImpactComparison {
    let actual = aggregate_labor_with(items, region, table, WageTransform::AsConfigured);
    let baseline = aggregate_labor_with(items, region, table, WageTransform::ForceMarket);
    let impact = actual.labor_total - baseline.labor_total;

    ImpactComparison {
        actual,
        baseline,
        impact,
    }
}
