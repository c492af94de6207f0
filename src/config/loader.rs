//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! settings and the pay plan registry from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calendar::MAX_PERIOD_COUNT;
use crate::error::{EngineError, EngineResult};
use crate::models::PayPlan;

use super::types::{EngineConfig, EngineMetadata};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml        # Engine metadata and defaults
/// └── plans/
///     └── weekly.yaml    # One pay plan per file
/// ```
///
/// A plan file without an `id` takes its file stem as the id.
///
/// # Example
///
/// ```no_run
/// use pay_cycle_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let plan = loader.get_plan("weekly_company_drivers").unwrap();
/// println!("Plan: {} ({})", plan.name, plan.frequency);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `engine.yaml` or the `plans` directory is missing
    /// - Any file contains invalid YAML
    /// - `default_period_count` is outside 1..=[`MAX_PERIOD_COUNT`]
    /// - Any plan is incomplete for its frequency
    /// - Two plan files share an id
    /// - No plan files are found
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine_path = path.join("engine.yaml");
        let metadata = Self::load_yaml::<EngineMetadata>(&engine_path)?;
        if !(1..=MAX_PERIOD_COUNT).contains(&metadata.default_period_count) {
            return Err(EngineError::ConfigParseError {
                path: engine_path.display().to_string(),
                message: format!(
                    "default_period_count must be between 1 and {}, got {}",
                    MAX_PERIOD_COUNT, metadata.default_period_count
                ),
            });
        }
        let plans = Self::load_plans(&path.join("plans"))?;

        debug!(
            config_dir = %path.display(),
            plans = plans.len(),
            "Loaded pay-cycle configuration"
        );

        Ok(Self {
            config: EngineConfig::new(metadata, plans),
        })
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

    /// Loads every plan file from the plans directory.
    fn load_plans(plans_dir: &Path) -> EngineResult<Vec<PayPlan>> {
        let plans_dir_str = plans_dir.display().to_string();

        let entries = fs::read_dir(plans_dir).map_err(|_| EngineError::ConfigNotFound {
            path: plans_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: plans_dir_str.clone(),
            })?;
            let path = entry.path();
            if path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                paths.push(path);
            }
        }
        paths.sort();

        let mut plans = Vec::with_capacity(paths.len());
        let mut seen = HashSet::new();

        for path in paths {
            let mut plan = Self::load_yaml::<PayPlan>(&path)?;
            if plan.id.is_empty() {
                plan.id = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
            }

            plan.validate().map_err(|e| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            if !seen.insert(plan.id.clone()) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate pay plan id '{}'", plan.id),
                });
            }

            plans.push(plan);
        }

        if plans.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no plan files found)", plans_dir_str),
            });
        }

        Ok(plans)
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        self.config.engine()
    }

    /// Returns every registered plan, ordered by id.
    pub fn plans(&self) -> impl Iterator<Item = &PayPlan> {
        self.config.plans().values()
    }

    /// Gets a plan by its id.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pay_cycle_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let plan = loader.get_plan("monthly_carriers")?;
    /// println!("Plan: {}", plan.name);
    /// # Ok::<(), pay_cycle_engine::error::EngineError>(())
    /// ```
    pub fn get_plan(&self, id: &str) -> EngineResult<&PayPlan> {
        self.config
            .plans()
            .get(id)
            .ok_or_else(|| EngineError::PlanNotFound { id: id.to_string() })
    }

    /// Returns the period count used when a request does not specify one.
    pub fn default_period_count(&self) -> u32 {
        self.config.engine().default_period_count
    }
}
