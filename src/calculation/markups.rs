//! Markup stacking on direct labor cost.
//!
//! Administrative burden and insurance are proportional to direct labor
//! cost. Margin is taken on direct labor plus those two markups, at a rate
//! chosen once for the whole batch.

use rust_decimal::Decimal;

use crate::config::MarkupRates;
use crate::models::AuditStep;

/// The result of applying markups, including every component and the audit step.
#[derive(Debug, Clone)]
pub struct MarkupResult {
    /// direct × admin rate.
    pub admin_cost: Decimal,
    /// direct × insurance rate.
    pub insurance_cost: Decimal,
    /// (direct + admin + insurance) × margin rate.
    pub margin: Decimal,
    /// direct + admin + insurance + margin.
    pub labor_total: Decimal,
    /// The margin rate that was applied.
    pub margin_rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the margin rate for a batch.
///
/// A single prevailing wage item anywhere in the batch moves the whole batch
/// to the regulated margin; margin is never prorated per item.
pub fn margin_rate_for(any_item_regulated: bool, rates: &MarkupRates) -> Decimal {
    if any_item_regulated {
        rates.margin_regulated
    } else {
        rates.margin_market
    }
}

/// Stacks admin, insurance and margin markups onto direct labor cost.
///
/// Amounts saturate at `Decimal::MAX` instead of overflowing. A direct cost
/// within [`AMOUNT_LIMIT`](super::AMOUNT_LIMIT) under markup rates the loader
/// accepts never reaches it.
///
/// # Examples
///
/// ```
/// use prevailing_wage_engine::calculation::apply_markups;
/// use prevailing_wage_engine::config::MarkupRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = apply_markups(
///     Decimal::from_str("16400.00").unwrap(),
///     false,
///     &MarkupRates::default(),
///     1,
/// );
/// assert_eq!(result.margin_rate, Decimal::from_str("0.20").unwrap());
/// assert_eq!(result.labor_total, Decimal::from_str("23812.80").unwrap());
/// ```
pub fn apply_markups(
    direct_labor_cost: Decimal,
    any_item_regulated: bool,
    rates: &MarkupRates,
    step_number: u32,
) -> MarkupResult {
    let admin_cost = direct_labor_cost.saturating_mul(rates.admin);
    let insurance_cost = direct_labor_cost.saturating_mul(rates.insurance);
    let margin_rate = margin_rate_for(any_item_regulated, rates);
    let subtotal = direct_labor_cost
        .saturating_add(admin_cost)
        .saturating_add(insurance_cost);
    let margin = subtotal.saturating_mul(margin_rate);
    let labor_total = subtotal.saturating_add(margin);

    let audit_step = AuditStep {
        step_number,
        rule_id: "labor_markups".to_string(),
        rule_name: "Labor Markups".to_string(),
        input: serde_json::json!({
            "direct_labor_cost": direct_labor_cost.normalize().to_string(),
            "any_item_regulated": any_item_regulated,
            "admin_rate": rates.admin.normalize().to_string(),
            "insurance_rate": rates.insurance.normalize().to_string()
        }),
        output: serde_json::json!({
            "admin_cost": admin_cost.normalize().to_string(),
            "insurance_cost": insurance_cost.normalize().to_string(),
            "margin_rate": margin_rate.normalize().to_string(),
            "margin": margin.normalize().to_string(),
            "labor_total": labor_total.normalize().to_string()
        }),
        reasoning: format!(
            "${} + ${} admin + ${} insurance = ${}; x {} margin = ${}",
            direct_labor_cost.normalize(),
            admin_cost.normalize(),
            insurance_cost.normalize(),
            subtotal.normalize(),
            margin_rate.normalize(),
            labor_total.normalize()
        ),
    };

    MarkupResult {
        admin_cost,
        insurance_cost,
        margin,
        labor_total,
        margin_rate,
        audit_step,
    }
}
