//! Console formatters over a parsed robots.txt
//!
//! These helpers only read a [`RobotsFile`]; they have no influence on parsing
//! or matching.

use crate::output::QueryVerdict;
use crate::robots::RobotsFile;

/// Lists the `Allow` entries of every group that applies to `user_agent`
///
/// Only explicit Allow directives are listed; this says nothing about whether
/// other paths are blocked.
pub fn allowed_lines(robots: &RobotsFile, user_agent: &str) -> Vec<String> {
    robots
        .groups_for(user_agent)
        .flat_map(|agent| agent.allowed.iter().cloned())
        .collect()
}

/// Lists the `Disallow` entries of every group that applies to `user_agent`
pub fn disallowed_lines(robots: &RobotsFile, user_agent: &str) -> Vec<String> {
    robots
        .groups_for(user_agent)
        .flat_map(|agent| agent.disallowed.iter().cloned())
        .collect()
}

/// Lists every sitemap URL
pub fn sitemap_lines(robots: &RobotsFile) -> Vec<String> {
    robots.sitemaps.clone()
}

/// One line per rule group, followed by the sitemap count
pub fn summary_lines(robots: &RobotsFile) -> Vec<String> {
    let mut lines: Vec<String> = robots
        .rules
        .iter()
        .map(|agent| {
            let name = if agent.name.is_empty() {
                "(none)"
            } else {
                agent.name.as_str()
            };
            format!(
                "User-agent: {} ({} allow, {} disallow)",
                name,
                agent.allowed.len(),
                agent.disallowed.len()
            )
        })
        .collect();

    lines.push(format!("Sitemaps: {}", robots.sitemaps.len()));
    lines
}

/// Formats a query verdict as a single line
pub fn verdict_line(verdict: &QueryVerdict) -> String {
    match &verdict.blocked_by {
        Some(directive) => format!(
            "DISALLOWED {} for {} (Disallow: {})",
            verdict.path, verdict.user_agent, directive
        ),
        None => format!("ALLOWED    {} for {}", verdict.path, verdict.user_agent),
    }
}

/// Prints the explicit Allow entries for `user_agent`
pub fn print_allowed(robots: &RobotsFile, user_agent: &str) {
    for line in allowed_lines(robots, user_agent) {
        println!("{}", line);
    }
}

/// Prints the Disallow entries for `user_agent`
pub fn print_disallowed(robots: &RobotsFile, user_agent: &str) {
    for line in disallowed_lines(robots, user_agent) {
        println!("{}", line);
    }
}

/// Prints every sitemap URL
pub fn print_sitemaps(robots: &RobotsFile) {
    for line in sitemap_lines(robots) {
        println!("{}", line);
    }
}

/// Prints the rule group overview
pub fn print_summary(robots: &RobotsFile) {
    for line in summary_lines(robots) {
        println!("  {}", line);
    }
}
