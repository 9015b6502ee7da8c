//! Robots.txt caching implementation
//!
//! This module provides caching functionality for parsed robots.txt files, including
//! expiration after a configurable time-to-live (24 hours by default).

use crate::fetch::{fetch_robots, Source};
use crate::robots::RobotsFile;
use crate::RobotsError;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Default cache lifetime for a fetched robots.txt
pub const DEFAULT_TTL_HOURS: i64 = 24;

/// Longest accepted cache lifetime (one year)
pub const MAX_TTL_HOURS: i64 = 24 * 365;

/// Cached robots.txt data for a source
///
/// This structure stores a parsed robots.txt along with the timestamp
/// when it was fetched, allowing for cache expiration checks.
#[derive(Debug, Clone)]
pub struct CachedRobots {
    /// The parsed robots.txt content
    pub robots: Arc<RobotsFile>,

    /// When the robots.txt was fetched
    pub fetched_at: DateTime<Utc>,
}

impl CachedRobots {
    /// Creates a new CachedRobots instance stamped with the current time
    pub fn new(robots: RobotsFile) -> Self {
        Self {
            robots: Arc::new(robots),
            fetched_at: Utc::now(),
        }
    }

    /// Checks if the cached robots.txt is older than `ttl`
    pub fn is_stale(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }

    /// Returns how long ago the robots.txt was fetched
    pub fn age(&self) -> Duration {
        Utc::now() - self.fetched_at
    }

    /// Checks if a path is allowed according to the cached robots.txt
    pub fn is_allowed(&self, user_agent: &str, path: &str) -> bool {
        self.robots.is_allowed(user_agent, path)
    }
}

/// Shared cache of parsed robots.txt files keyed by source
///
/// Safe to share between tasks behind an `Arc`. Failed fetches are never cached.
#[derive(Debug)]
pub struct RobotsCache {
    entries: RwLock<HashMap<String, CachedRobots>>,
    ttl: Duration,
}

impl RobotsCache {
    /// Creates an empty cache whose entries expire after `ttl_hours`
    ///
    /// The lifetime is clamped to `1..=MAX_TTL_HOURS`.
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: Duration::hours(ttl_hours.clamp(1, MAX_TTL_HOURS)),
        }
    }

    /// Returns the cached file for `source` if present and fresh
    pub async fn get(&self, source: &Source) -> Option<Arc<RobotsFile>> {
        let entries = self.entries.read().await;
        entries
            .get(&source.to_string())
            .filter(|cached| !cached.is_stale(self.ttl))
            .map(|cached| Arc::clone(&cached.robots))
    }

    /// Stores a parsed file for `source`, replacing any previous entry
    pub async fn insert(&self, source: &Source, robots: RobotsFile) -> Arc<RobotsFile> {
        let cached = CachedRobots::new(robots);
        let robots = Arc::clone(&cached.robots);
        self.entries.write().await.insert(source.to_string(), cached);
        robots
    }

    /// Returns the cached file for `source`, fetching and parsing it on a miss
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<RobotsFile>)` - Cached or freshly fetched robots.txt
    /// * `Err(RobotsError)` - Retrieval failed; nothing is cached
    pub async fn get_or_fetch(
        &self,
        client: &Client,
        source: &Source,
    ) -> Result<Arc<RobotsFile>, RobotsError> {
        if let Some(robots) = self.get(source).await {
            tracing::debug!("robots.txt cache hit for {}", source);
            return Ok(robots);
        }

        tracing::debug!("robots.txt cache miss for {}", source);
        let robots = fetch_robots(client, source).await?;
        Ok(self.insert(source, robots).await)
    }

    /// Returns the number of cached entries, stale ones included
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if nothing has been cached yet
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for RobotsCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_HOURS)
    }
}
