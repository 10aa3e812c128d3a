//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate tables
//! from YAML files.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

use super::types::{
    Craft, CraftsConfig, MarkupRates, RateTable, RateTableMetadata, RegionOverrideConfig,
    RegionsConfig,
};

/// Largest accepted markup rate (1000%).
const MAX_MARKUP_RATE: Decimal = Decimal::TEN;

/// Loads and provides access to a rate table.
///
/// # Directory Structure
///
/// ```text
/// config/california/
/// ├── rate_table.yaml     # Dataset metadata
/// ├── crafts.yaml         # Craft default market and regulated rates
/// ├── markups.yaml        # Admin, insurance and margin rates
/// ├── regions.yaml        # Recognized regions
/// └── overrides/
///     └── los_angeles.yaml # Regulated rate overrides for one region
/// ```
///
/// # Example
///
/// ```no_run
/// use prevailing_wage_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/california")?;
/// let craft = loader.table().craft("Electrician (General)").unwrap();
/// println!("{}: ${}/h", craft.name, craft.market_rate);
/// # Ok::<(), prevailing_wage_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    table: RateTable,
}

impl ConfigLoader {
    /// Loads a rate table from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The files disagree with each other or carry negative rates (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RateTableMetadata>(&path.join("rate_table.yaml"))?;
        let crafts_config = Self::load_yaml::<CraftsConfig>(&path.join("crafts.yaml"))?;
        let markups = Self::load_yaml::<MarkupRates>(&path.join("markups.yaml"))?;
        let regions_config = Self::load_yaml::<RegionsConfig>(&path.join("regions.yaml"))?;
        let override_files = Self::load_overrides(&path.join("overrides"))?;

        let crafts: Vec<Craft> = crafts_config
            .crafts
            .into_iter()
            .map(|(name, rates)| Craft {
                name,
                market_rate: rates.market_rate,
                regulated_rate: rates.regulated_rate,
            })
            .collect();

        Self::validate_crafts(&crafts)?;
        Self::validate_markups(&markups)?;
        let overrides = Self::index_overrides(override_files, &crafts, &regions_config.regions)?;

        debug!(
            rate_table = %metadata.name,
            version = %metadata.version,
            crafts = crafts.len(),
            regions = regions_config.regions.len(),
            override_regions = overrides.len(),
            "Loaded rate table"
        );

        let table = RateTable::new(
            metadata,
            crafts,
            regions_config.regions,
            overrides,
            markups,
        );

        Ok(Self { table })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all override files from the overrides directory, in file name order.
    ///
    /// An empty directory is valid: every region then uses craft defaults.
    fn load_overrides(overrides_dir: &Path) -> EngineResult<Vec<RegionOverrideConfig>> {
        let dir_str = overrides_dir.display().to_string();

        let entries = fs::read_dir(overrides_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        paths
            .iter()
            .map(|path| Self::load_yaml::<RegionOverrideConfig>(path))
            .collect()
    }

    fn validate_crafts(crafts: &[Craft]) -> EngineResult<()> {
        for craft in crafts {
            if craft.market_rate < Decimal::ZERO || craft.regulated_rate < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    message: format!("negative default rate for craft '{}'", craft.name),
                });
            }
            if craft.regulated_rate < craft.market_rate {
                warn!(
                    craft = %craft.name,
                    market_rate = %craft.market_rate,
                    regulated_rate = %craft.regulated_rate,
                    "Regulated rate is below market rate; prevailing wage impact may be negative"
                );
            }
        }
        Ok(())
    }

    fn validate_markups(markups: &MarkupRates) -> EngineResult<()> {
        let rates = [
            ("admin", markups.admin),
            ("insurance", markups.insurance),
            ("margin_market", markups.margin_market),
            ("margin_regulated", markups.margin_regulated),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    message: format!("markup rate '{}' is negative: {}", name, rate),
                });
            }
            if rate > MAX_MARKUP_RATE {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "markup rate '{}' is {}, above the maximum of {}",
                        name, rate, MAX_MARKUP_RATE
                    ),
                });
            }
        }
        Ok(())
    }

    /// Checks override files against the craft and region lists and indexes
    /// them by region, then craft.
    fn index_overrides(
        files: Vec<RegionOverrideConfig>,
        crafts: &[Craft],
        regions: &[String],
    ) -> EngineResult<HashMap<String, HashMap<String, Decimal>>> {
        let mut overrides: HashMap<String, HashMap<String, Decimal>> = HashMap::new();

        for file in files {
            if !regions.contains(&file.region) {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "overrides given for region '{}' which is not listed in regions.yaml",
                        file.region
                    ),
                });
            }
            if overrides.contains_key(&file.region) {
                return Err(EngineError::InvalidConfig {
                    message: format!("duplicate overrides for region '{}'", file.region),
                });
            }

            for (craft_name, rate) in &file.rates {
                let Some(craft) = crafts.iter().find(|c| &c.name == craft_name) else {
                    return Err(EngineError::InvalidConfig {
                        message: format!(
                            "region '{}' overrides unknown craft '{}'",
                            file.region, craft_name
                        ),
                    });
                };
                if *rate < Decimal::ZERO {
                    return Err(EngineError::InvalidConfig {
                        message: format!(
                            "negative override rate for craft '{}' in region '{}'",
                            craft_name, file.region
                        ),
                    });
                }
                if *rate < craft.market_rate {
                    warn!(
                        region = %file.region,
                        craft = %craft_name,
                        override_rate = %rate,
                        market_rate = %craft.market_rate,
                        "Regional override is below market rate"
                    );
                }
            }

            overrides.insert(file.region, file.rates);
        }

        Ok(overrides)
    }

    /// Returns the loaded rate table.
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Returns the rate table metadata.
    pub fn metadata(&self) -> &RateTableMetadata {
        self.table.metadata()
    }
}
