//! Hourly rate resolution.
//!
//! This module determines the effective hourly rate for a craft in a region
//! under a given wage mode, and reports where the rate came from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, RateSource, WageMode};

/// The result of a rate resolution, including the rate, its source and audit step.
#[derive(Debug, Clone)]
pub struct RateResolution {
    /// The effective hourly rate.
    pub rate: Decimal,
    /// Where the rate came from.
    pub source: RateSource,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Resolves the effective hourly rate for a craft.
///
/// The rate is chosen as follows:
/// 1. Market work uses the craft's default market rate
/// 2. Prevailing wage work uses the region's override for the craft, if one exists
/// 3. Otherwise prevailing wage work uses the craft's statewide regulated rate
///
/// A region the table does not know simply has no overrides.
///
/// # Errors
///
/// Returns `CraftNotFound` if the craft is not defined in the rate table.
///
/// # Examples
///
/// ```no_run
/// use prevailing_wage_engine::calculation::resolve_rate;
/// use prevailing_wage_engine::config::ConfigLoader;
/// use prevailing_wage_engine::models::{RateSource, WageMode};
///
/// let loader = ConfigLoader::load("./config/california")?;
/// let resolved = resolve_rate(
///     "Electrician (General)",
///     "Los Angeles",
///     WageMode::Regulated,
///     loader.table(),
///     1,
/// )?;
/// assert_eq!(resolved.source, RateSource::RegionOverride);
/// # Ok::<(), prevailing_wage_engine::error::EngineError>(())
/// ```
pub fn resolve_rate(
    craft_name: &str,
    region: &str,
    wage_mode: WageMode,
    table: &RateTable,
    step_number: u32,
) -> EngineResult<RateResolution> {
    let craft = table
        .craft(craft_name)
        .ok_or_else(|| EngineError::CraftNotFound {
            craft: craft_name.to_string(),
        })?;

    let (rate, source) = match wage_mode {
        WageMode::Market => (craft.market_rate, RateSource::Market),
        WageMode::Regulated => match table.region_override(region, craft_name) {
            Some(rate) => (rate, RateSource::RegionOverride),
            None => (craft.regulated_rate, RateSource::StatewideDefault),
        },
    };

    let reasoning = match source {
        RateSource::Market => format!("Market rate for '{}': ${}", craft_name, rate),
        RateSource::RegionOverride => format!(
            "Prevailing wage override for '{}' in {}: ${}",
            craft_name, region, rate
        ),
        RateSource::StatewideDefault => format!(
            "No override for '{}' in {}; using statewide prevailing wage ${}",
            craft_name, region, rate
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "rate_resolution".to_string(),
        rule_name: "Rate Resolution".to_string(),
        input: serde_json::json!({
            "craft": craft_name,
            "region": region,
            "wage_mode": wage_mode.as_str()
        }),
        output: serde_json::json!({
            "rate": rate.to_string(),
            "source": source.as_str()
        }),
        reasoning,
    };

    Ok(RateResolution {
        rate,
        source,
        audit_step,
    })
}

/// Default and effective rates for one craft in a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftRateQuote {
    /// The craft name.
    pub craft: String,
    /// Hourly rate on market work.
    pub market_rate: Decimal,
    /// Effective hourly rate on prevailing wage work in the region.
    pub regulated_rate: Decimal,
    /// Where the prevailing wage rate came from.
    pub regulated_source: RateSource,
    /// Human-readable provenance of the prevailing wage rate.
    pub note: String,
}

/// Quotes market and prevailing wage rates for every craft in a region.
///
/// Crafts are returned in name order.
pub fn quote_region_rates(region: &str, table: &RateTable) -> Vec<CraftRateQuote> {
    table
        .crafts()
        .map(|craft| {
            let (regulated_rate, regulated_source) =
                match table.region_override(region, &craft.name) {
                    Some(rate) => (rate, RateSource::RegionOverride),
                    None => (craft.regulated_rate, RateSource::StatewideDefault),
                };
            CraftRateQuote {
                craft: craft.name.clone(),
                market_rate: craft.market_rate,
                regulated_rate,
                regulated_source,
                note: provenance_note(regulated_source, region, &table.metadata().version),
            }
        })
        .collect()
}

/// Describes where a rate came from, for display next to the rate.
pub fn provenance_note(source: RateSource, region: &str, dataset_version: &str) -> String {
    match source {
        RateSource::Market => "Source: Market rate default.".to_string(),
        RateSource::RegionOverride => format!(
            "Source: {} specific rate ({} dataset).",
            region, dataset_version
        ),
        RateSource::StatewideDefault => format!(
            "Source: General statewide estimate. Verify with the wage authority for {}.",
            region
        ),
    }
}
