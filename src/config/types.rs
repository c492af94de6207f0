//! Configuration types for the pay-cycle engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::calendar::DEFAULT_PERIOD_COUNT;
use crate::models::PayPlan;

fn default_period_count() -> u32 {
    DEFAULT_PERIOD_COUNT
}

/// Engine metadata and defaults from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Name of the deployment (e.g., "Driver settlements").
    pub name: String,
    /// Version of the configuration set.
    pub version: String,
    /// Periods returned when a request does not specify a count.
    #[serde(default = "default_period_count")]
    pub default_period_count: u32,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Engine metadata.
    metadata: EngineMetadata,
    /// Registered pay plans keyed by id.
    plans: BTreeMap<String, PayPlan>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: EngineMetadata, plans: Vec<PayPlan>) -> Self {
        let plans = plans
            .into_iter()
            .map(|plan| (plan.id.clone(), plan))
            .collect();
        Self { metadata, plans }
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns all registered plans keyed by id.
    pub fn plans(&self) -> &BTreeMap<String, PayPlan> {
        &self.plans
    }
}
