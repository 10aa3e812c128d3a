//! Configuration types for labor rate tables.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Metadata about the rate table.
///
/// Identifies the dataset the craft rates and regional overrides were
/// taken from, so results can be traced back to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTableMetadata {
    /// Human-readable name of the rate table (e.g., "California Solar Trades").
    pub name: String,
    /// Version label of the dataset (e.g., "2025-26").
    pub version: String,
    /// Date from which the rates are effective.
    pub effective_date: NaiveDate,
    /// URL to the published wage determinations.
    pub source_url: String,
}

/// A labor trade with its default wage rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Craft {
    /// The unique name of the craft (e.g., "Electrician (General)").
    pub name: String,
    /// Default hourly rate on market-rate work.
    pub market_rate: Decimal,
    /// Default hourly rate on prevailing wage work, used where no regional
    /// override exists.
    pub regulated_rate: Decimal,
}

/// Default rates for a craft as written in crafts.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct CraftRates {
    /// Default hourly rate on market-rate work.
    pub market_rate: Decimal,
    /// Default hourly rate on prevailing wage work.
    pub regulated_rate: Decimal,
}

/// Crafts configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CraftsConfig {
    /// Map of craft name to its default rates.
    pub crafts: HashMap<String, CraftRates>,
}

/// Regions configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionsConfig {
    /// Every region the rate table recognizes, whether or not it has overrides.
    pub regions: Vec<String>,
}

/// Prevailing wage overrides for one region, as written in overrides/*.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionOverrideConfig {
    /// The region these overrides apply to (e.g., "Los Angeles").
    pub region: String,
    /// Map of craft name to the regulated hourly rate in this region.
    pub rates: HashMap<String, Decimal>,
}

/// Proportional markups stacked on top of direct labor cost.
///
/// The defaults are the reference business rates: 6% administrative
/// burden, 15% insurance, and a 20% or 22% margin depending on whether the
/// batch contains prevailing wage work.
///
/// # Example
///
/// ```
/// use prevailing_wage_engine::config::MarkupRates;
/// use rust_decimal::Decimal;
///
/// let markups = MarkupRates::default();
/// assert_eq!(markups.admin, Decimal::new(6, 2));
/// assert_eq!(markups.margin_regulated, Decimal::new(22, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupRates {
    /// Administrative burden rate applied to direct labor cost.
    pub admin: Decimal,
    /// Insurance rate applied to direct labor cost.
    pub insurance: Decimal,
    /// Margin rate when no work item is billed at prevailing wage.
    pub margin_market: Decimal,
    /// Margin rate when at least one work item is billed at prevailing wage.
    pub margin_regulated: Decimal,
}

impl Default for MarkupRates {
    fn default() -> Self {
        Self {
            admin: Decimal::new(6, 2),
            insurance: Decimal::new(15, 2),
            margin_market: Decimal::new(20, 2),
            margin_regulated: Decimal::new(22, 2),
        }
    }
}

/// The complete rate table loaded from YAML files.
///
/// Crafts are keyed by name; overrides are keyed by region, then craft.
/// The table is read-only once built and is shared between calculations.
#[derive(Debug, Clone)]
pub struct RateTable {
    metadata: RateTableMetadata,
    crafts: BTreeMap<String, Craft>,
    regions: HashSet<String>,
    overrides: HashMap<String, HashMap<String, Decimal>>,
    markups: MarkupRates,
}

impl RateTable {
    /// Creates a new RateTable from its component parts.
    pub fn new(
        metadata: RateTableMetadata,
        crafts: Vec<Craft>,
        regions: Vec<String>,
        overrides: HashMap<String, HashMap<String, Decimal>>,
        markups: MarkupRates,
    ) -> Self {
        Self {
            metadata,
            crafts: crafts.into_iter().map(|c| (c.name.clone(), c)).collect(),
            regions: regions.into_iter().collect(),
            overrides,
            markups,
        }
    }

    /// Returns the rate table metadata.
    pub fn metadata(&self) -> &RateTableMetadata {
        &self.metadata
    }

    /// Looks up a craft by name.
    pub fn craft(&self, name: &str) -> Option<&Craft> {
        self.crafts.get(name)
    }

    /// Returns all crafts, ordered by name.
    pub fn crafts(&self) -> impl Iterator<Item = &Craft> {
        self.crafts.values()
    }

    /// Returns the regulated rate override for a craft in a region, if any.
    pub fn region_override(&self, region: &str, craft: &str) -> Option<Decimal> {
        self.overrides.get(region)?.get(craft).copied()
    }

    /// Returns true if the region is listed in the table.
    pub fn is_known_region(&self, region: &str) -> bool {
        self.regions.contains(region)
    }

    /// Returns the recognized regions, sorted alphabetically.
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = self.regions.iter().map(String::as_str).collect();
        regions.sort_unstable();
        regions
    }

    /// Returns the markup rates.
    pub fn markups(&self) -> &MarkupRates {
        &self.markups
    }
}
