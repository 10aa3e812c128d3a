//! Work item model and related types.
//!
//! This module defines the WorkItem struct and WageMode enum for
//! representing the labor breakdown a contractor submits for costing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a work item's hours are billed at market rate or at the
/// government-mandated prevailing wage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageMode {
    /// Open-market hourly rate.
    #[default]
    Market,
    /// Prevailing (regulated) wage rate.
    Regulated,
}

impl WageMode {
    /// Returns true for prevailing wage work.
    pub fn is_regulated(self) -> bool {
        self == WageMode::Regulated
    }

    /// Returns the snake_case name used in audit records.
    pub fn as_str(self) -> &'static str {
        match self {
            WageMode::Market => "market",
            WageMode::Regulated => "regulated",
        }
    }
}

/// A unit of work in the labor breakdown.
///
/// `crew_size` workers each put in `hours`, all of the same craft.
///
/// # Examples
///
/// ```
/// use prevailing_wage_engine::models::{WageMode, WorkItem};
/// use rust_decimal::Decimal;
///
/// let item = WorkItem {
///     id: "item_001".to_string(),
///     craft: "Electrician (General)".to_string(),
///     wage_mode: WageMode::Regulated,
///     hours: Decimal::new(160, 0),
///     crew_size: 2,
/// };
/// assert!(item.wage_mode.is_regulated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Caller-assigned identifier, used only to correlate output lines.
    pub id: String,
    /// Name of the craft performing the work.
    pub craft: String,
    /// Whether the hours are billed at market or prevailing wage.
    #[serde(default)]
    pub wage_mode: WageMode,
    /// Hours worked by each crew member.
    pub hours: Decimal,
    /// Number of workers putting in identical hours.
    pub crew_size: u32,
}
