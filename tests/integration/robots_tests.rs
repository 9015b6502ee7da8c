use robots_probe::config::Config;
use robots_probe::fetch::{build_http_client, fetch_robots};
use robots_probe::output::{disallowed_lines, format_markdown_report, QueryVerdict};
use robots_probe::robots::parse;
use robots_probe::{is_allowed, RobotsFile, Source};
use std::io::Write;
use tempfile::NamedTempFile;

const SITE_ROBOTS: &str = "\
User-agent: ia_archiver
Disallow: /

User-agent: *
Disallow: /s/
Disallow: /private/
Allow: /private/press/

Sitemap: https://example.com/sitemap.xml
Sitemap: https://example.com/posts.xml
";

#[test]
fn test_archiver_rules() {
    let robots = parse(SITE_ROBOTS);

    assert!(!is_allowed(&robots, "*", "/s/"));
    assert!(is_allowed(&robots, "*", "/"));
    assert!(!is_allowed(&robots, "ia_archiver", "/"));
    // uses dash instead of underscore
    assert!(is_allowed(&robots, "ia-archiver", "/"));
}

#[test]
fn test_allow_does_not_override_disallow() {
    let robots = parse(SITE_ROBOTS);

    assert_eq!(robots.rules[1].allowed, vec!["/private/press/"]);
    assert!(!is_allowed(&robots, "Bot", "/private/press/release"));
}

#[test]
fn test_sitemaps_in_order() {
    let robots = parse(SITE_ROBOTS);
    assert_eq!(
        robots.sitemaps(),
        &[
            "https://example.com/sitemap.xml".to_string(),
            "https://example.com/posts.xml".to_string(),
        ]
    );
}

#[test]
fn test_unmatched_paths_are_allowed() {
    let robots = parse(SITE_ROBOTS);

    for path in ["/", "/about", "/blog/2024/post", "/sitemap.xml", "/S/upper"] {
        assert!(is_allowed(&robots, "Bot", path), "{} should be allowed", path);
    }
}

#[test]
fn test_every_applicable_disallow_blocks() {
    let robots = parse(SITE_ROBOTS);

    for agent in ["ia_archiver", "Bot"] {
        for entry in disallowed_lines(&robots, agent) {
            assert!(!is_allowed(&robots, agent, &entry));
            assert!(!is_allowed(&robots, agent, &format!("{}anything", entry)));
        }
    }
}

#[test]
fn test_empty_robots_allows_everything() {
    let robots = RobotsFile::parse("");

    assert_eq!(robots.rules.len(), 1);
    assert!(robots.rules[0].name.is_empty());
    assert!(robots.is_allowed("*", "/"));
    assert!(robots.is_allowed("AnyBot", "/admin"));
}

#[tokio::test]
async fn test_local_file_source() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SITE_ROBOTS.as_bytes()).unwrap();
    file.flush().unwrap();

    let source = Source::parse(file.path().to_str().unwrap()).unwrap();
    let client = build_http_client(&Config::default()).unwrap();
    let robots = fetch_robots(&client, &source).await.unwrap();

    assert_eq!(robots, parse(SITE_ROBOTS));
    assert_eq!(robots.agent_names(), vec!["ia_archiver", "*"]);
}

#[test]
fn test_markdown_report_for_site() {
    let robots = parse(SITE_ROBOTS);
    let verdicts = vec![QueryVerdict::evaluate(&robots, "Bot", "/s/page")];
    let md = format_markdown_report("https://example.com/robots.txt", &robots, &verdicts);

    assert!(md.contains("- **Rule Groups**: 2"));
    assert!(md.contains("- https://example.com/posts.xml"));
    assert!(md.contains("✗ disallowed"));
}
