//! Robots.txt parser implementation
//!
//! Turns line-oriented robots.txt text into a [`RobotsFile`]. Only the literal
//! `Key: value` form is understood; anything else is skipped.

use crate::robots::model::{Agent, RobotsFile};

/// Separator between a directive key and its value
const DELIMITER: &str = ": ";

/// A recognised robots.txt directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive<'a> {
    UserAgent(&'a str),
    Allow(&'a str),
    Disallow(&'a str),
    Sitemap(&'a str),
    Unknown(&'a str),
}

impl<'a> Directive<'a> {
    /// Splits a line into a directive, or `None` if it has no `": "` delimiter
    fn from_line(line: &'a str) -> Option<Self> {
        let (key, value) = line.split_once(DELIMITER)?;

        let directive = match key {
            "User-agent" => Directive::UserAgent(value),
            "Allow" => Directive::Allow(value),
            "Disallow" => Directive::Disallow(value),
            "Sitemap" => Directive::Sitemap(value),
            other => Directive::Unknown(other),
        };

        Some(directive)
    }
}

/// Accumulator threaded through the line scan
///
/// `current` holds the group being collected. The first `User-agent` line only
/// names it; each later one flushes it into `rules` and starts a new one.
#[derive(Debug, Default)]
struct ParseState {
    rules: Vec<Agent>,
    sitemaps: Vec<String>,
    current: Agent,
}

impl ParseState {
    fn apply(mut self, directive: Directive<'_>) -> Self {
        match directive {
            Directive::UserAgent(name) if !self.current.name.is_empty() => {
                let next = Agent::new(name, vec![], vec![]);
                let finished = std::mem::replace(&mut self.current, next);
                self.rules.push(finished);
            }
            Directive::UserAgent(name) => {
                self.current.name = name.to_string();
            }
            Directive::Disallow(path) => self.current.disallowed.push(path.to_string()),
            Directive::Allow(path) => self.current.allowed.push(path.to_string()),
            Directive::Sitemap(url) => self.sitemaps.push(url.to_string()),
            Directive::Unknown(key) => {
                tracing::debug!("Ignoring unrecognised robots.txt directive: {}", key);
            }
        }
        self
    }

    /// Flushes the in-progress group, even if no `User-agent` line was seen
    fn finish(mut self) -> RobotsFile {
        self.rules.push(self.current);
        RobotsFile {
            rules: self.rules,
            sitemaps: self.sitemaps,
        }
    }
}

/// Parses robots.txt content into a [`RobotsFile`]
///
/// # Arguments
///
/// * `content` - The complete robots.txt text
///
/// # Returns
///
/// The parsed document. Parsing never fails: lines without a `": "` delimiter
/// are skipped, and unknown directives are ignored.
///
/// # Example
///
/// ```
/// use robots_probe::robots::parse;
///
/// let robots = parse("User-agent: *\nDisallow: /s/\n");
/// assert_eq!(robots.rules[0].disallowed, vec!["/s/"]);
/// assert!(!robots.is_allowed("*", "/s/foo"));
/// ```
pub fn parse(content: &str) -> RobotsFile {
    let robots = content
        .lines()
        .filter_map(|line| {
            let directive = Directive::from_line(line);
            if directive.is_none() {
                tracing::trace!("Skipping robots.txt line without directive: {:?}", line);
            }
            directive
        })
        .fold(ParseState::default(), ParseState::apply)
        .finish();

    tracing::debug!(
        "Parsed robots.txt: {} rule groups, {} sitemaps",
        robots.rules.len(),
        robots.sitemaps.len()
    );

    robots
}
