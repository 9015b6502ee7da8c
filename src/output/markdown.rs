//! Markdown report generation
//!
//! This module generates a human-readable markdown report of a parsed robots.txt,
//! including its rule groups, sitemaps, and any permission queries.

use crate::output::QueryVerdict;
use crate::robots::RobotsFile;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown report to `output_path`
///
/// # Arguments
///
/// * `source` - Where the robots.txt came from
/// * `robots` - The parsed robots.txt
/// * `verdicts` - Query results to include
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(std::io::Error)` - Failed to write the report
pub fn write_markdown_report(
    source: &str,
    robots: &RobotsFile,
    verdicts: &[QueryVerdict],
    output_path: &Path,
) -> std::io::Result<()> {
    let markdown = format_markdown_report(source, robots, verdicts);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    tracing::info!("Wrote markdown report to {}", output_path.display());
    Ok(())
}

/// Formats a parsed robots.txt as markdown
pub fn format_markdown_report(
    source: &str,
    robots: &RobotsFile,
    verdicts: &[QueryVerdict],
) -> String {
    let mut md = String::new();

    md.push_str("# robots.txt Report\n\n");
    md.push_str(&format!("- **Source**: {}\n", source));
    md.push_str(&format!("- **Rule Groups**: {}\n", robots.rules.len()));
    md.push_str(&format!("- **Sitemaps**: {}\n\n", robots.sitemaps.len()));

    md.push_str("## Rule Groups\n\n");
    for (index, agent) in robots.rules.iter().enumerate() {
        let name = if agent.name.is_empty() {
            "(none)"
        } else {
            agent.name.as_str()
        };
        md.push_str(&format!("### {}. User-agent: `{}`\n\n", index + 1, name));

        if agent.allowed.is_empty() && agent.disallowed.is_empty() {
            md.push_str("_No directives._\n\n");
            continue;
        }

        md.push_str("| Directive | Path |\n");
        md.push_str("|-----------|------|\n");
        for path in &agent.allowed {
            md.push_str(&format!("| Allow | `{}` |\n", path));
        }
        for path in &agent.disallowed {
            md.push_str(&format!("| Disallow | `{}` |\n", path));
        }
        md.push('\n');
    }

    md.push_str("## Sitemaps\n\n");
    if robots.sitemaps.is_empty() {
        md.push_str("_None listed._\n\n");
    } else {
        for sitemap in &robots.sitemaps {
            md.push_str(&format!("- {}\n", sitemap));
        }
        md.push('\n');
    }

    if !verdicts.is_empty() {
        md.push_str("## Queries\n\n");
        md.push_str("| User-agent | Path | Result | Blocked By |\n");
        md.push_str("|------------|------|--------|------------|\n");
        for verdict in verdicts {
            let result = if verdict.allowed { "✓ allowed" } else { "✗ disallowed" };
            let blocked_by = verdict
                .blocked_by
                .as_deref()
                .map(|d| format!("`{}`", d))
                .unwrap_or_default();
            md.push_str(&format!(
                "| `{}` | `{}` | {} | {} |\n",
                verdict.user_agent, verdict.path, result, blocked_by
            ));
        }
        md.push('\n');
    }

    md
}
