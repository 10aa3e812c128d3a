//! Line item costing.

use rust_decimal::Decimal;

/// The cost of one work item and the labor hours it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItemCost {
    /// hours × crew_size.
    pub hour_contribution: Decimal,
    /// hours × crew_size × rate.
    pub item_cost: Decimal,
}

impl LineItemCost {
    /// A line item that contributes nothing.
    pub const ZERO: LineItemCost = LineItemCost {
        hour_contribution: Decimal::ZERO,
        item_cost: Decimal::ZERO,
    };
}

/// Costs a work item at a resolved hourly rate.
///
/// Zero hours or an empty crew yields zero cost; that is not an error.
/// Returns `None` when the product does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use prevailing_wage_engine::calculation::cost_line_item;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let cost = cost_line_item(Decimal::from(160), 2, Decimal::from_str("80.50").unwrap()).unwrap();
/// assert_eq!(cost.hour_contribution, Decimal::from(320));
/// assert_eq!(cost.item_cost, Decimal::from_str("25760.00").unwrap());
///
/// assert!(cost_line_item(Decimal::MAX, 10, Decimal::ONE).is_none());
/// ```
pub fn cost_line_item(hours: Decimal, crew_size: u32, rate: Decimal) -> Option<LineItemCost> {
    let hour_contribution = hours.checked_mul(Decimal::from(crew_size))?;
    Some(LineItemCost {
        hour_contribution,
        item_cost: hour_contribution.checked_mul(rate)?,
    })
}
