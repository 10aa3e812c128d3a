//! Labor aggregation.
//!
//! This module costs every work item in a batch, sums hours and direct
//! labor cost over the items that could be costed, and applies markups once
//! to the batch total.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::RateTable;
use crate::models::{
    AuditWarning, LaborSummary, LineItemBreakdown, SkippedItem, WageMode, WorkItem,
};

use super::input_coercion::{
    AMOUNT_LIMIT, OUT_OF_RANGE, coerce_non_negative, invalid_input_warning,
};
use super::line_item::{LineItemCost, cost_line_item};
use super::markups::apply_markups;
use super::rate_resolution::resolve_rate;

/// Warning code raised when the region is not listed in the rate table.
pub const UNKNOWN_REGION_CODE: &str = "UNKNOWN_REGION";

/// How each work item's wage mode is treated during aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WageTransform {
    /// Use each item's own wage mode.
    #[default]
    AsConfigured,
    /// Treat every item as market-rate work.
    ForceMarket,
}

impl WageTransform {
    /// Returns the wage mode to cost an item under.
    pub fn apply(self, wage_mode: WageMode) -> WageMode {
        match self {
            WageTransform::AsConfigured => wage_mode,
            WageTransform::ForceMarket => WageMode::Market,
        }
    }
}

/// Aggregates the labor cost of a batch of work items as configured.
///
/// Equivalent to [`aggregate_labor_with`] using [`WageTransform::AsConfigured`].
pub fn aggregate_labor(items: &[WorkItem], region: &str, table: &RateTable) -> LaborSummary {
    aggregate_labor_with(items, region, table, WageTransform::AsConfigured)
}

/// Aggregates the labor cost of a batch of work items.
///
/// Items whose craft is not in the rate table are left out of every total
/// and listed in `skipped_items`. Negative hours are costed as zero, as are
/// the hours of an item that would push total hours or direct cost past
/// [`AMOUNT_LIMIT`]. The margin rate is the regulated one if any included
/// item is costed as prevailing wage work after `transform` is applied.
///
/// The breakdown keeps the input order of the items.
pub fn aggregate_labor_with(
    items: &[WorkItem],
    region: &str,
    table: &RateTable,
    transform: WageTransform,
) -> LaborSummary {
    let mut step_number: u32 = 1;
    let mut line_items = Vec::with_capacity(items.len());
    let mut skipped_items = Vec::new();
    let mut warnings = Vec::new();
    let mut audit_steps = Vec::with_capacity(items.len() + 1);

    let mut total_hours = Decimal::ZERO;
    let mut direct_labor_cost = Decimal::ZERO;
    let mut any_item_regulated = false;

    if !table.is_known_region(region) {
        warnings.push(AuditWarning::new(
            UNKNOWN_REGION_CODE,
            format!(
                "Region '{}' is not in the rate table; prevailing wage work uses statewide defaults",
                region
            ),
            "low",
        ));
    }

    for item in items {
        let wage_mode = transform.apply(item.wage_mode);

        let resolution = match resolve_rate(&item.craft, region, wage_mode, table, step_number) {
            Ok(resolution) => resolution,
            Err(err) => {
                warn!(
                    item_id = %item.id,
                    craft = %item.craft,
                    error = %err,
                    "Excluding work item from labor totals"
                );
                skipped_items.push(SkippedItem {
                    id: item.id.clone(),
                    craft: item.craft.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
        };
        audit_steps.push(resolution.audit_step);
        step_number += 1;

        let context = format!("work item '{}'", item.id);
        let mut hours = coerce_non_negative(item.hours, "hours", &context);
        warnings.extend(hours.warning.take());

        let cost = match within_limits(
            cost_line_item(hours.value, item.crew_size, resolution.rate),
            total_hours,
            direct_labor_cost,
        ) {
            Some(cost) => cost,
            None => {
                warn!(
                    item_id = %item.id,
                    hours = %hours.value,
                    crew_size = item.crew_size,
                    "Work item cost out of range; costing it as zero hours"
                );
                warnings.push(invalid_input_warning("hours", &context, OUT_OF_RANGE));
                hours.value = Decimal::ZERO;
                LineItemCost::ZERO
            }
        };
        total_hours += cost.hour_contribution;
        direct_labor_cost += cost.item_cost;
        any_item_regulated |= wage_mode.is_regulated();

        line_items.push(LineItemBreakdown {
            id: item.id.clone(),
            craft: item.craft.clone(),
            wage_mode,
            hours: hours.value,
            crew_size: item.crew_size,
            rate: resolution.rate,
            rate_source: resolution.source,
            cost: cost.item_cost,
        });
    }

    let markups = apply_markups(
        direct_labor_cost,
        any_item_regulated,
        table.markups(),
        step_number,
    );
    audit_steps.push(markups.audit_step);

    debug!(
        region,
        ?transform,
        included = line_items.len(),
        skipped = skipped_items.len(),
        labor_total = %markups.labor_total,
        "Aggregated labor cost"
    );

    LaborSummary {
        total_hours,
        direct_labor_cost,
        admin_cost: markups.admin_cost,
        insurance_cost: markups.insurance_cost,
        margin: markups.margin,
        labor_total: markups.labor_total,
        margin_rate: markups.margin_rate,
        line_items,
        skipped_items,
        warnings,
        audit_steps,
    }
}

/// Admits a line item only if the batch totals stay within [`AMOUNT_LIMIT`].
fn within_limits(
    cost: Option<LineItemCost>,
    total_hours: Decimal,
    direct_labor_cost: Decimal,
) -> Option<LineItemCost> {
    let cost = cost?;
    let hours = total_hours.checked_add(cost.hour_contribution)?;
    let direct = direct_labor_cost.checked_add(cost.item_cost)?;
    (hours <= AMOUNT_LIMIT && direct <= AMOUNT_LIMIT).then_some(cost)
}
