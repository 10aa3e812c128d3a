//! Configuration loading and management for the Prevailing Wage Engine.
//!
//! This module provides functionality to load rate tables from YAML files:
//! craft default rates, per-region prevailing wage overrides, and the markup
//! rates stacked on direct labor cost.
//!
//! # Example
//!
//! ```no_run
//! use prevailing_wage_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/california").unwrap();
//! println!("Loaded rate table: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    Craft, CraftRates, CraftsConfig, MarkupRates, RateTable, RateTableMetadata,
    RegionOverrideConfig, RegionsConfig,
};
