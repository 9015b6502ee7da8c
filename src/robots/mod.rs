//! Robots.txt handling module
//!
//! This module provides the robots.txt rule model, the line parser that builds it,
//! the permission matcher, and a cache for parsed files keyed by source.

mod cache;
mod matcher;
mod model;
mod parser;

pub use cache::{CachedRobots, RobotsCache, DEFAULT_TTL_HOURS, MAX_TTL_HOURS};
pub use matcher::{first_blocking_rule, is_allowed, BlockingRule};
pub use model::{Agent, RobotsFile, WILDCARD_AGENT};
pub use parser::parse;
