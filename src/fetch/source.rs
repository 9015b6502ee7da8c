//! Where a robots.txt comes from

use crate::RobotsError;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Well-known location of robots.txt on a site
const ROBOTS_PATH: &str = "/robots.txt";

/// A robots.txt location: remote URL or local file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    /// A robots.txt URL fetched over HTTP(S)
    Url(Url),

    /// A robots.txt file on disk
    File(PathBuf),
}

impl Source {
    /// Interprets a command-line style argument as a robots.txt source
    ///
    /// `http`/`https` URLs become [`Source::Url`] (resolved to the site's
    /// `/robots.txt` unless they already point at it), `file://` URLs and
    /// anything that is not a URL become [`Source::File`].
    ///
    /// # Example
    ///
    /// ```
    /// use robots_probe::Source;
    ///
    /// let source = Source::parse("https://example.com/blog/post").unwrap();
    /// assert_eq!(source.to_string(), "https://example.com/robots.txt");
    /// ```
    pub fn parse(arg: &str) -> Result<Self, RobotsError> {
        let arg = arg.trim();
        if arg.is_empty() {
            return Err(RobotsError::InvalidSource("empty source".to_string()));
        }

        match Url::parse(arg) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                Ok(Source::Url(robots_url(&url)?))
            }
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(Source::File)
                .map_err(|_| RobotsError::InvalidSource(arg.to_string())),
            // Single-letter schemes are Windows drive letters
            Ok(url) if url.scheme().len() > 1 => Err(RobotsError::InvalidSource(format!(
                "unsupported scheme '{}' in {}",
                url.scheme(),
                arg
            ))),
            _ => Ok(Source::File(PathBuf::from(arg))),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolves the robots.txt URL for any URL on a site
///
/// URLs whose path already is `/robots.txt` are returned unchanged apart from
/// their fragment; any other path, query or fragment is replaced.
pub fn robots_url(url: &Url) -> Result<Url, RobotsError> {
    if url.path() == ROBOTS_PATH {
        let mut url = url.clone();
        url.set_fragment(None);
        return Ok(url);
    }

    Ok(url.join(ROBOTS_PATH)?)
}
