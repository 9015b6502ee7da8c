//! Configuration module for Robots-Probe
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use robots_probe::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("robots-probe.toml")).unwrap();
//! println!("Requests time out after {}s", config.fetch.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
