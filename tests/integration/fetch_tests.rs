use robots_probe::config::Config;
use robots_probe::fetch::{build_http_client, fetch_robots, retrieve};
use robots_probe::robots::{Agent, RobotsCache};
use robots_probe::{RobotsError, Source};
use std::time::Duration;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EXAMPLE: &str = "User-agent: *\nDisallow: /s/\nSitemap: https://example.com/sitemap.xml\n";

fn site_source(server: &MockServer) -> Source {
    Source::parse(&format!("{}/some/page", server.uri())).expect("Failed to parse source")
}

#[tokio::test]
async fn test_fetch_robots_from_site_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EXAMPLE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_http_client(&Config::default()).unwrap();
    let robots = fetch_robots(&client, &site_source(&mock_server))
        .await
        .expect("fetch should succeed");

    assert_eq!(
        robots.rules,
        vec![Agent::new("*", vec![], vec!["/s/".to_string()])]
    );
    assert_eq!(robots.sitemaps, vec!["https://example.com/sitemap.xml"]);
    assert!(!robots.is_allowed("*", "/s/foo"));
    assert!(robots.is_allowed("*", "/"));
}

#[tokio::test]
async fn test_not_found_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&Config::default()).unwrap();
    let result = retrieve(&client, &site_source(&mock_server)).await;

    match result {
        Err(RobotsError::Status { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/robots.txt"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(503).set_body_string("User-agent: *\nDisallow: /"))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&Config::default()).unwrap();
    let result = fetch_robots(&client, &site_source(&mock_server)).await;

    assert!(matches!(result, Err(RobotsError::Status { status: 503, .. })));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(EXAMPLE)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let mut config = Config::default();
    config.fetch.timeout_secs = 1;
    config.fetch.connect_timeout_secs = 1;

    let client = build_http_client(&config).unwrap();
    let result = retrieve(&client, &site_source(&mock_server)).await;

    assert!(matches!(result, Err(RobotsError::Timeout { .. })));
}

#[tokio::test]
async fn test_connection_refused_is_an_error() {
    // Bind and drop a server so the port is very likely closed
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let client = build_http_client(&Config::default()).unwrap();
    let source = Source::parse(&uri).unwrap();
    let result = retrieve(&client, &source).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_cache_fetches_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EXAMPLE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_http_client(&Config::default()).unwrap();
    let cache = RobotsCache::default();
    let source = site_source(&mock_server);

    let first = cache.get_or_fetch(&client, &source).await.unwrap();
    let second = cache.get_or_fetch(&client, &source).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_cache_does_not_store_failures() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = build_http_client(&Config::default()).unwrap();
    let cache = RobotsCache::default();
    let source = site_source(&mock_server);

    assert!(cache.get_or_fetch(&client, &source).await.is_err());
    assert!(cache.get_or_fetch(&client, &source).await.is_err());
    assert!(cache.is_empty().await);
}
