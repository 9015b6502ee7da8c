//! Robots-Probe: a small robots.txt inspector
//!
//! This crate fetches a site's robots.txt, parses it into per-user-agent rule
//! groups plus a sitemap list, and answers "may agent U crawl path P?" queries.

pub mod config;
pub mod fetch;
pub mod output;
pub mod robots;

use thiserror::Error;

/// Main error type for Robots-Probe operations
#[derive(Debug, Error)]
pub enum RobotsError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Invalid robots.txt source: {0}")]
    InvalidSource(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Robots-Probe operations
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use fetch::{fetch_robots, Source};
pub use robots::{is_allowed, Agent, RobotsFile};
