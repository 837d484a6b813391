//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a miniature copy of the name site and
//! run the full crawl cycle end-to-end over HTTP.

use name_crawler::config::Config;
use name_crawler::crawler::{CrawlMode, Coordinator, HttpFetcher};
use name_crawler::output::LineSink;
use name_crawler::state::PageState;
use name_crawler::CrawlError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration whose rules point at the mock server
fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.crawler.start_urls = vec![format!("{}/names/list.php", base_url)];
    config.crawler.follow_patterns = vec![
        format!("^{}/names/", regex::escape(base_url)),
        format!("^{}/name/", regex::escape(base_url)),
        format!("^{}/surnames/", regex::escape(base_url)),
    ];
    config.crawler.stop_patterns = vec![
        r"/name/.*?/comments".to_string(),
        r"/contribute.php".to_string(),
    ];
    config.crawler.request_timeout = 5;
    config.crawler.connect_timeout = 2;
    config.extract.surname_pattern = "/surnames/".to_string();
    config
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body.to_string())
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html(body))
        .mount(server)
        .await;
}

async fn mount_site(server: &MockServer) {
    let base_url = server.uri();

    mount_page(
        server,
        "/names/list.php",
        &format!(
            r#"<html><head><title>All names</title></head><body>
            <a href="/name/achilles">Achilles</a>
            <a href="/name/achilles/comments">Comments</a>
            <a href="{}/names/letter/s">S</a>
            <a href="/contribute.php">Contribute</a>
            <a href="/info/about">About</a>
            <a href="http://other.example/name/achilles">Elsewhere</a>
            </body></html>"#,
            base_url
        ),
    )
    .await;

    mount_page(
        server,
        "/names/letter/s",
        r#"<html><head><title>Names starting with S</title></head><body>
        <a href="/surnames/name/smith">Smith</a>
        <a href="/name/achilles#usage">Achilles again</a>
        </body></html>"#,
    )
    .await;

    mount_page(
        server,
        "/name/achilles",
        r#"<html><head><title>Meaning, origin and history of the name Achilles</title></head><body>
        <div class="nameinfo">
            <div class="namesub"><span class="namesub">GENDER:</span> <span class="info">Masculine</span></div>
            <div class="namesub"><span class="namesub">USAGE:</span> <span class="info">Mythology, Greek Mythology (Latinized)</span></div>
        </div>
        <a href="/names/list.php">All names</a>
        </body></html>"#,
    )
    .await;

    mount_page(
        server,
        "/surnames/name/smith",
        r#"<html><head><title>Meaning, origin and history of the surname Smith</title></head><body>
        <div class="nameinfo">
            <div class="namesub"><span class="namesub">USAGE:</span> <span class="info">English</span></div>
        </div>
        </body></html>"#,
    )
    .await;

    // Stopped and unfollowed links must never be requested
    for never in ["/name/achilles/comments", "/contribute.php", "/info/about"] {
        Mock::given(method("GET"))
            .and(path(never))
            .respond_with(html("<html></html>"))
            .expect(0)
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn test_full_crawl_emits_facts_in_order() {
    let mock_server = MockServer::start().await;
    mount_site(&mock_server).await;

    let config = create_test_config(&mock_server.uri());
    let fetcher = HttpFetcher::from_config(&config).expect("Failed to build fetcher");

    let mut coordinator = Coordinator::new(
        &config,
        CrawlMode::Crawl,
        fetcher,
        LineSink::new(Vec::new()),
    )
    .expect("Failed to create coordinator");
    coordinator.run().await.expect("Crawl failed");

    let frontier = coordinator.frontier();
    assert!(frontier.is_empty());
    assert_eq!(frontier.visited_len(), 4);
    assert_eq!(frontier.failed_len(), 0);
    assert_eq!(
        frontier.state(&format!("{}/name/achilles", mock_server.uri())),
        Some(PageState::Visited)
    );
    assert_eq!(
        frontier.state(&format!("{}/name/achilles/comments", mock_server.uri())),
        None
    );

    let stats = coordinator.stats().clone();
    assert_eq!(stats.pages_crawled, 4);
    assert_eq!(stats.detail_pages, 2);
    assert_eq!(stats.facts_emitted, 6);
    assert_eq!(stats.links_admitted, 3);

    let output = String::from_utf8(coordinator.into_sink().into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Achilles",
            "Male",
            "Achilles",
            "Mythology",
            "Achilles",
            "Greek Mythology",
            "Achilles",
            "Latinized",
            "Smith",
            "Surname",
            "Smith",
            "English",
        ]
    );
}

#[tokio::test]
async fn test_debug_urls_are_not_followed() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/name/achilles",
        r#"<html><head><title>Meaning of the name Achilles</title></head><body>
        <div class="nameinfo">
            <div class="namesub"><span class="namesub">GENDER:</span><span class="info">Masculine</span></div>
        </div>
        <a href="/names/list.php">All names</a>
        </body></html>"#,
    )
    .await;

    // The listing page is admissible but must not be fetched in debug mode
    Mock::given(method("GET"))
        .and(path("/names/list.php"))
        .respond_with(html("<html></html>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let fetcher = HttpFetcher::from_config(&config).expect("Failed to build fetcher");
    let mode = CrawlMode::from_args(&[format!("{}/name/achilles", mock_server.uri())])
        .expect("Invalid debug URL");

    let mut coordinator = Coordinator::new(&config, mode, fetcher, LineSink::new(Vec::new()))
        .expect("Failed to create coordinator");
    coordinator.run().await.expect("Crawl failed");

    assert_eq!(coordinator.stats().links_admitted, 0);
    assert_eq!(coordinator.frontier().visited_len(), 1);

    let output = String::from_utf8(coordinator.into_sink().into_inner()).unwrap();
    assert_eq!(output, "Achilles\nMale\n");
}

#[tokio::test]
async fn test_server_errors_are_skipped() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/names/list.php",
        r#"<html><body>
        <a href="/name/broken">Broken</a>
        <a href="/name/hera">Hera</a>
        </body></html>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/name/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        "/name/hera",
        r#"<html><head><title>Meaning of the name Hera</title></head><body>
        <div class="nameinfo">
            <div class="namesub"><span class="namesub">GENDER:</span><span class="info">Feminine</span></div>
        </div>
        </body></html>"#,
    )
    .await;

    let config = create_test_config(&mock_server.uri());
    let fetcher = HttpFetcher::from_config(&config).expect("Failed to build fetcher");

    let mut coordinator = Coordinator::new(
        &config,
        CrawlMode::Crawl,
        fetcher,
        LineSink::new(Vec::new()),
    )
    .expect("Failed to create coordinator");
    coordinator.run().await.expect("Crawl failed");

    assert_eq!(
        coordinator
            .frontier()
            .state(&format!("{}/name/broken", mock_server.uri())),
        Some(PageState::Failed)
    );
    assert_eq!(coordinator.stats().pages_failed, 1);

    let output = String::from_utf8(coordinator.into_sink().into_inner()).unwrap();
    assert_eq!(output, "Hera\nFemale\n");
}

#[tokio::test]
async fn test_fail_fast_stops_at_server_error() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/names/list.php",
        r#"<html><body>
        <a href="/name/broken">Broken</a>
        <a href="/name/hera">Hera</a>
        </body></html>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/name/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    // Hera comes after the broken page in the backlog and is never reached
    Mock::given(method("GET"))
        .and(path("/name/hera"))
        .respond_with(html("<html></html>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&mock_server.uri());
    config.crawler.fail_fast = true;
    let fetcher = HttpFetcher::from_config(&config).expect("Failed to build fetcher");

    let mut coordinator = Coordinator::new(
        &config,
        CrawlMode::Crawl,
        fetcher,
        LineSink::new(Vec::new()),
    )
    .expect("Failed to create coordinator");

    let err = coordinator.run().await.unwrap_err();
    assert!(matches!(err, CrawlError::HttpStatus { status: 500, .. }));
    assert_eq!(coordinator.frontier().backlog_len(), 1);
}
