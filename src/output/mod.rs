//! Output module for presenting parsed robots.txt files
//!
//! This module handles:
//! - Console listings of allow/disallow entries and sitemaps
//! - Permission query verdicts
//! - Markdown report export

mod display;
mod markdown;

pub use display::{
    allowed_lines, disallowed_lines, print_allowed, print_disallowed, print_sitemaps,
    print_summary, sitemap_lines, summary_lines, verdict_line,
};
pub use markdown::{format_markdown_report, write_markdown_report};

use crate::robots::{first_blocking_rule, RobotsFile};

/// The answer to one "may agent U crawl path P?" query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryVerdict {
    /// The queried user agent
    pub user_agent: String,

    /// The queried path
    pub path: String,

    /// Whether the path may be crawled
    pub allowed: bool,

    /// The disallow entry that blocked the path, if any
    pub blocked_by: Option<String>,
}

impl QueryVerdict {
    /// Evaluates a query against a parsed robots.txt
    pub fn evaluate(robots: &RobotsFile, user_agent: &str, path: &str) -> Self {
        let blocked_by = first_blocking_rule(robots, user_agent, path)
            .map(|rule| rule.directive.to_string());

        Self {
            user_agent: user_agent.to_string(),
            path: path.to_string(),
            allowed: blocked_by.is_none(),
            blocked_by,
        }
    }
}
