//! Request types for the Prevailing Wage Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint. Numeric fields are taken as raw JSON values so that half-typed
//! form input (empty strings, stray text, negative numbers) can be costed
//! instead of rejected.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::calculation::invalid_input_warning;
use crate::models::{AuditWarning, ProjectInputs, WageMode, WorkItem};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The region whose prevailing wage overrides apply.
    pub region: String,
    /// Installed system size in kilowatts.
    #[serde(default)]
    pub system_size_kw: Value,
    /// Material and other non-labor cost per watt.
    #[serde(default)]
    pub material_cost_per_watt: Value,
    /// The labor breakdown.
    pub items: Vec<WorkItemRequest>,
}

/// Work item information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItemRequest {
    /// Caller-assigned identifier for the item.
    pub id: String,
    /// Name of the craft performing the work.
    pub craft: String,
    /// Wage mode of the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wage_mode: Option<WageMode>,
    /// Boolean form of the wage mode; used when `wage_mode` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_prevailing_wage: Option<bool>,
    /// Hours worked by each crew member.
    #[serde(default)]
    pub hours: Value,
    /// Number of workers.
    #[serde(default)]
    pub crew_size: Value,
}

impl WorkItemRequest {
    fn wage_mode(&self) -> WageMode {
        match (self.wage_mode, self.is_prevailing_wage) {
            (Some(mode), _) => mode,
            (None, Some(true)) => WageMode::Regulated,
            (None, _) => WageMode::Market,
        }
    }
}

impl CalculationRequest {
    /// Converts the request into engine inputs.
    ///
    /// Missing or `null` numbers are read as zero. Values that cannot be
    /// read as numbers are also read as zero, with a warning for each.
    /// Negative values are passed through for the engine to coerce.
    pub fn into_inputs(self) -> (ProjectInputs, Vec<AuditWarning>) {
        let mut warnings = Vec::new();

        let system_size_kw =
            parse_decimal(&self.system_size_kw, "system_size_kw", "project", &mut warnings);
        let material_cost_per_watt = parse_decimal(
            &self.material_cost_per_watt,
            "material_cost_per_watt",
            "project",
            &mut warnings,
        );

        let items = self
            .items
            .into_iter()
            .map(|item| {
                let context = format!("work item '{}'", item.id);
                let hours = parse_decimal(&item.hours, "hours", &context, &mut warnings);
                let crew_size = parse_crew_size(&item.crew_size, &context, &mut warnings);
                WorkItem {
                    wage_mode: item.wage_mode(),
                    id: item.id,
                    craft: item.craft,
                    hours,
                    crew_size,
                }
            })
            .collect();

        let inputs = ProjectInputs {
            region: self.region,
            system_size_kw,
            material_cost_per_watt,
            items,
        };

        (inputs, warnings)
    }
}

/// Reads a JSON number or numeric string as a Decimal.
fn parse_decimal(
    value: &Value,
    field: &str,
    context: &str,
    warnings: &mut Vec<AuditWarning>,
) -> Decimal {
    let parsed = match value {
        Value::Null => return Decimal::ZERO,
        Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text))
        }
        Value::String(s) if s.trim().is_empty() => return Decimal::ZERO,
        Value::String(s) => Decimal::from_str(s.trim()),
        _ => {
            warnings.push(invalid_input_warning(field, context, "not a number"));
            return Decimal::ZERO;
        }
    };

    parsed.unwrap_or_else(|_| {
        warnings.push(invalid_input_warning(
            field,
            context,
            &format!("'{}' is not a number", value_text(value)),
        ));
        Decimal::ZERO
    })
}

/// Reads a crew size, truncating fractions toward zero.
///
/// Negative crews become zero here because crew size is unsigned.
fn parse_crew_size(value: &Value, context: &str, warnings: &mut Vec<AuditWarning>) -> u32 {
    let crew = parse_decimal(value, "crew_size", context, warnings);
    if crew < Decimal::ZERO {
        warnings.push(invalid_input_warning(
            "crew_size",
            context,
            &format!("negative value {}", crew),
        ));
        return 0;
    }

    crew.trunc().to_u32().unwrap_or_else(|| {
        warnings.push(invalid_input_warning(
            "crew_size",
            context,
            &format!("{} is out of range", crew),
        ));
        0
    })
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
