//! Coercion of invalid numeric input.
//!
//! Inputs arrive from live-editing forms and may be negative mid-edit. The
//! engine never rejects them: a negative quantity, or one too large to
//! calculate with, is treated as zero and a warning records the substitution.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::AuditWarning;

/// Warning code for coerced numeric input.
pub const INVALID_INPUT_CODE: &str = "INVALID_INPUT";

/// Largest amount (hours, labor cost or material cost) a calculation
/// carries: 10^18. Markups on a direct cost of this size stay far inside
/// `Decimal`'s range for any markup rate the loader accepts.
pub const AMOUNT_LIMIT: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

/// Problem text used when a quantity is too large to calculate with.
pub const OUT_OF_RANGE: &str = "amount exceeds the supported range";

/// A numeric input after coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercedInput {
    /// The value to calculate with; never negative.
    pub value: Decimal,
    /// Present when the original value had to be replaced.
    pub warning: Option<AuditWarning>,
}

/// Replaces a negative quantity with zero.
///
/// `field` names the input (e.g. "hours") and `context` says where it came
/// from (e.g. "work item 'item_001'"); both appear in the warning message.
///
/// # Examples
///
/// ```
/// use prevailing_wage_engine::calculation::coerce_non_negative;
/// use rust_decimal::Decimal;
///
/// let coerced = coerce_non_negative(Decimal::from(-8), "hours", "work item 'a'");
/// assert_eq!(coerced.value, Decimal::ZERO);
/// assert!(coerced.warning.is_some());
/// ```
pub fn coerce_non_negative(value: Decimal, field: &str, context: &str) -> CoercedInput {
    if value >= Decimal::ZERO {
        return CoercedInput {
            value,
            warning: None,
        };
    }

    debug!(field, context, value = %value, "Coercing negative input to zero");
    CoercedInput {
        value: Decimal::ZERO,
        warning: Some(invalid_input_warning(
            field,
            context,
            &format!("negative value {}", value),
        )),
    }
}

/// Builds the warning recorded when an input is replaced with zero.
pub fn invalid_input_warning(field: &str, context: &str, problem: &str) -> AuditWarning {
    AuditWarning::new(
        INVALID_INPUT_CODE,
        format!("{} for {}: {}; treated as 0", field, context, problem),
        "medium",
    )
}
