//! Crawl-permission matching
//!
//! Only `Disallow` entries take part in the decision. A path is blocked when a
//! group for the queried agent (or `*`) has a disallow entry that is a literal
//! prefix of the path.

use crate::robots::model::RobotsFile;

/// The rule that blocked a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockingRule<'a> {
    /// Index of the rule group in [`RobotsFile::rules`]
    pub group_index: usize,

    /// Name of the rule group
    pub agent: &'a str,

    /// The matching disallow entry
    pub directive: &'a str,
}

/// Finds the first disallow entry that blocks `path` for `user_agent`
///
/// Groups are scanned in document order, and entries within a group in
/// document order; the first hit is returned. Prefix matching is plain string
/// prefix matching, so `/s` also blocks `/search`, and an empty entry blocks
/// everything.
pub fn first_blocking_rule<'a>(
    robots: &'a RobotsFile,
    user_agent: &str,
    path: &str,
) -> Option<BlockingRule<'a>> {
    robots
        .rules
        .iter()
        .enumerate()
        .filter(|(_, agent)| agent.applies_to(user_agent))
        .find_map(|(group_index, agent)| {
            agent
                .disallowed
                .iter()
                .find(|directive| path.starts_with(directive.as_str()))
                .map(|directive| BlockingRule {
                    group_index,
                    agent: agent.name.as_str(),
                    directive: directive.as_str(),
                })
        })
}

/// Checks if `user_agent` may crawl `path`
///
/// # Arguments
///
/// * `robots` - The parsed robots.txt data
/// * `user_agent` - The user agent name, matched exactly (case-sensitive) or via `*`
/// * `path` - The URL path to check (e.g., "/page.html")
///
/// # Returns
///
/// * `true` - If no applicable disallow entry matches
/// * `false` - If the path is disallowed
pub fn is_allowed(robots: &RobotsFile, user_agent: &str, path: &str) -> bool {
    match first_blocking_rule(robots, user_agent, path) {
        Some(rule) => {
            tracing::trace!(
                "{} blocked for {} by group '{}' entry '{}'",
                path,
                user_agent,
                rule.agent,
                rule.directive
            );
            false
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robots::parse;

    #[test]
    fn test_wildcard_disallow_prefix() {
        let robots = parse("User-agent: *\nDisallow: /s/\nSitemap: https://example.com/sitemap.xml");

        assert!(!is_allowed(&robots, "*", "/s/"));
        assert!(!is_allowed(&robots, "*", "/s/foo"));
        assert!(is_allowed(&robots, "*", "/"));
        assert!(is_allowed(&robots, "*", "/s"));
    }

    #[test]
    fn test_named_agent_exact_match_only() {
        let robots = parse("User-agent: ia_archiver\nDisallow: /\nUser-agent: *\nDisallow: /private/");

        assert!(!is_allowed(&robots, "ia_archiver", "/"));
        assert!(is_allowed(&robots, "ia-archiver", "/"));
        assert!(is_allowed(&robots, "IA_ARCHIVER", "/about"));
        assert!(!is_allowed(&robots, "ia-archiver", "/private/x"));
    }

    #[test]
    fn test_prefix_is_not_segment_aware() {
        let robots = parse("User-agent: *\nDisallow: /s");
        assert!(!is_allowed(&robots, "Bot", "/search"));
        assert!(!is_allowed(&robots, "Bot", "/s"));
        assert!(is_allowed(&robots, "Bot", "/about"));
    }

    #[test]
    fn test_allow_is_not_consulted() {
        let robots = parse("User-agent: *\nDisallow: /private\nAllow: /private/public");
        assert!(!is_allowed(&robots, "Bot", "/private/public"));
    }

    #[test]
    fn test_empty_disallow_blocks_everything() {
        let robots = parse("User-agent: *\nDisallow: ");
        assert!(!is_allowed(&robots, "Bot", "/"));
        assert!(!is_allowed(&robots, "Bot", "/anything"));
    }

    #[test]
    fn test_no_wildcard_expansion() {
        let robots = parse("User-agent: *\nDisallow: /*.pdf$");
        assert!(is_allowed(&robots, "Bot", "/doc.pdf"));
        assert!(!is_allowed(&robots, "Bot", "/*.pdf$"));
    }

    #[test]
    fn test_empty_file_allows_everything() {
        let robots = parse("");
        assert!(is_allowed(&robots, "*", "/"));
        assert!(is_allowed(&robots, "Bot", "/admin"));
    }

    #[test]
    fn test_unrelated_agent_rules_ignored() {
        let robots = parse("User-agent: BadBot\nDisallow: /");
        assert!(is_allowed(&robots, "GoodBot", "/page"));
        assert!(!is_allowed(&robots, "BadBot", "/page"));
    }

    #[test]
    fn test_first_blocking_rule_reports_first_hit() {
        let robots = parse(
            "User-agent: Bot\nDisallow: /a/b\nDisallow: /a\nUser-agent: *\nDisallow: /",
        );

        let rule = first_blocking_rule(&robots, "Bot", "/a/b/c").unwrap();
        assert_eq!(rule.group_index, 0);
        assert_eq!(rule.agent, "Bot");
        assert_eq!(rule.directive, "/a/b");

        let rule = first_blocking_rule(&robots, "Bot", "/z").unwrap();
        assert_eq!(rule.group_index, 1);
        assert_eq!(rule.directive, "/");

        let rule = first_blocking_rule(&robots, "Other", "/a").unwrap();
        assert_eq!(rule.agent, "*");
    }

    #[test]
    fn test_every_disallow_entry_blocks_itself_and_extensions() {
        let robots = parse(
            "User-agent: A\nDisallow: /x/\nDisallow: /y\nUser-agent: *\nDisallow: /z.html",
        );

        for agent in robots.groups_for("A") {
            for entry in &agent.disallowed {
                assert!(!is_allowed(&robots, "A", entry));
                assert!(!is_allowed(&robots, "A", &format!("{}anything", entry)));
            }
        }
    }
}
