//! HTTP fetcher implementation
//!
//! This module handles robots.txt retrieval, including:
//! - Building HTTP clients with proper user agent strings
//! - GET requests for remote robots.txt files
//! - Reading local robots.txt files
//! - Error classification (status, timeout, transport)

use crate::config::Config;
use crate::fetch::Source;
use crate::robots::{parse, RobotsFile};
use crate::RobotsError;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The application configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use robots_probe::config::Config;
/// use robots_probe::fetch::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent_header(config))
        .timeout(Duration::from_secs(config.fetch.timeout_secs))
        .connect_timeout(Duration::from_secs(config.fetch.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Formats the User-Agent header: `Name/Version (+ContactURL; ContactEmail)`
pub fn user_agent_header(config: &Config) -> String {
    let ua = &config.user_agent;
    format!(
        "{}/{} (+{}; {})",
        ua.crawler_name, ua.crawler_version, ua.contact_url, ua.contact_email
    )
}

/// Retrieves the raw text of a robots.txt
///
/// Failures are always returned as errors; an unreachable or non-200
/// robots.txt is never turned into empty content.
///
/// # Returns
///
/// * `Ok(String)` - The robots.txt body
/// * `Err(RobotsError)` - Status, timeout, transport, or file read failure
pub async fn retrieve(client: &Client, source: &Source) -> Result<String, RobotsError> {
    match source {
        Source::Url(url) => fetch_text(client, url).await,
        Source::File(path) => {
            tracing::debug!("Reading robots.txt from {}", path.display());
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|source| RobotsError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

/// Retrieves and parses a robots.txt
///
/// # Returns
///
/// * `Ok(RobotsFile)` - Successfully fetched and parsed robots.txt
/// * `Err(RobotsError)` - Retrieval failed
pub async fn fetch_robots(client: &Client, source: &Source) -> Result<RobotsFile, RobotsError> {
    let content = retrieve(client, source).await?;
    let robots = parse(&content);
    tracing::info!(
        "Loaded robots.txt from {} ({} rule groups, {} sitemaps)",
        source,
        robots.rules.len(),
        robots.sitemaps.len()
    );
    Ok(robots)
}

async fn fetch_text(client: &Client, url: &Url) -> Result<String, RobotsError> {
    tracing::debug!("Fetching {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if status != StatusCode::OK {
        tracing::warn!("{} returned HTTP {}", url, status.as_u16());
        return Err(RobotsError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify_error(url, e))
}

fn classify_error(url: &Url, error: reqwest::Error) -> RobotsError {
    if error.is_timeout() {
        RobotsError::Timeout {
            url: url.to_string(),
        }
    } else {
        RobotsError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
