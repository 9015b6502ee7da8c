//! Robots.txt data model
//!
//! A [`RobotsFile`] is built once by the parser and is read-only afterwards, so it
//! can be shared freely between concurrent queries.

use serde::Serialize;

/// The user-agent name that applies to every crawler
pub const WILDCARD_AGENT: &str = "*";

/// One `User-agent` rule group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Agent {
    /// The user-agent name as written (e.g. `"*"` or `"Googlebot"`)
    pub name: String,

    /// Raw `Allow` values in document order
    pub allowed: Vec<String>,

    /// Raw `Disallow` values in document order
    pub disallowed: Vec<String>,
}

impl Agent {
    /// Creates a rule group from its name and path lists
    pub fn new(name: impl Into<String>, allowed: Vec<String>, disallowed: Vec<String>) -> Self {
        Self {
            name: name.into(),
            allowed,
            disallowed,
        }
    }

    /// Returns true if this group applies to `user_agent`
    ///
    /// Matching is exact and case-sensitive; the only other match is the
    /// wildcard group `*`.
    pub fn applies_to(&self, user_agent: &str) -> bool {
        self.name == user_agent || self.name == WILDCARD_AGENT
    }
}

/// A parsed robots.txt document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RobotsFile {
    /// Rule groups in order of appearance; repeated names are kept as separate groups
    pub rules: Vec<Agent>,

    /// Sitemap URLs in order of appearance, duplicates preserved
    pub sitemaps: Vec<String>,
}

impl RobotsFile {
    /// Parses robots.txt content
    ///
    /// Shorthand for [`crate::robots::parse`].
    pub fn parse(content: &str) -> Self {
        super::parse(content)
    }

    /// Returns the rule groups in document order
    pub fn rules(&self) -> &[Agent] {
        &self.rules
    }

    /// Returns the sitemap URLs in document order
    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }

    /// Returns the name of every rule group in document order
    pub fn agent_names(&self) -> Vec<&str> {
        self.rules.iter().map(|agent| agent.name.as_str()).collect()
    }

    /// Iterates over the groups that apply to `user_agent`, in document order
    pub fn groups_for<'a>(&'a self, user_agent: &'a str) -> impl Iterator<Item = &'a Agent> + 'a {
        self.rules
            .iter()
            .filter(move |agent| agent.applies_to(user_agent))
    }

    /// Checks whether `user_agent` may crawl `path`
    ///
    /// See [`crate::robots::is_allowed`].
    pub fn is_allowed(&self, user_agent: &str, path: &str) -> bool {
        super::is_allowed(self, user_agent, path)
    }
}
