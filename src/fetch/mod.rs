//! Robots.txt retrieval
//!
//! Fetching is kept outside the parser: these functions only obtain the raw text
//! (over HTTP or from disk) and hand it to [`crate::robots::parse`].

mod fetcher;
mod source;

pub use fetcher::{build_http_client, fetch_robots, retrieve, user_agent_header};
pub use source::{robots_url, Source};
