//! Configuration loading and management for the Pay-Cycle Engine.
//!
//! This module provides functionality to load engine settings and the pay
//! plan registry from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use pay_cycle_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded: {}", config.engine().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineMetadata};
