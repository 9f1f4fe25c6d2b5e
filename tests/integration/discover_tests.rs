//! Integration tests for sitemap discovery
//!
//! These tests use wiremock to create mock HTTP servers and test
//! domain classification and the full file-to-file run end-to-end.

use sitemap_discover::config::Config;
use sitemap_discover::discovery::{run_discovery, Coordinator, DiscoveryResults};
use sitemap_discover::state::{EntrySet, ProbeOutcome};
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration whose files live in the given directory
fn create_test_config(dir: &Path, timeout_secs: u64) -> Config {
    let mut config = Config::default();
    config.input.path = dir.join("domain_source.csv").display().to_string();
    config.output.extracts_path = dir.join("sitemap_extracts.csv").display().to_string();
    config.output.failures_path = dir.join("sitemap_failures.csv").display().to_string();
    config.probe.timeout_secs = timeout_secs;
    config
}

fn entries(set: &EntrySet) -> Vec<&str> {
    set.iter().collect()
}

/// Returns a URL on a local port that refuses connections
fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

async fn mount_ok(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(server)
        .await;
}

const OK_PAGE: &[u8] = b"HTTP/1.1 200 OK\r\nConnection: close\r\nContent-Length: 13\r\n\r\n<html></html>";
const TRUNCATED_PAGE: &[u8] = b"HTTP/1.1 200 OK\r\nConnection: close\r\nContent-Length: 1000\r\n\r\nabc";

/// Starts a bare TCP server that answers `/sitemap.xml` with `sitemap`
/// and every other path with `main`, then closes the connection
async fn spawn_raw_server(main: &'static [u8], sitemap: &'static [u8]) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]);
            let response = if request.starts_with("GET /sitemap.xml ") {
                sitemap
            } else {
                main
            };
            let _ = socket.write_all(response).await;
            let _ = socket.shutdown().await;
        }
    });
    format!("http://{}", addr)
}

async fn probe_all<S: AsRef<str>>(domains: &[S], timeout_secs: u64) -> DiscoveryResults {
    let dir = TempDir::new().unwrap();
    let coordinator =
        Coordinator::new(create_test_config(dir.path(), timeout_secs)).expect("Coordinator");
    let domains: EntrySet = domains.iter().map(|d| d.as_ref()).collect();
    coordinator.run(&domains).await
}

#[tokio::test]
async fn test_sitemap_found() {
    let server = MockServer::start().await;
    mount_ok(&server, "/").await;
    mount_ok(&server, "/sitemap.xml").await;

    let domain = server.uri();
    let results = probe_all(&[&domain], 5).await;

    let sitemap = format!("{}/sitemap.xml", domain);
    assert_eq!(entries(&results.valid), vec![sitemap.as_str()]);
    assert!(results.failed.is_empty());
    assert!(matches!(
        results.outcomes[0].1,
        ProbeOutcome::SitemapFound { .. }
    ));
}

#[tokio::test]
async fn test_missing_sitemap_records_origin_and_failure() {
    let server = MockServer::start().await;
    mount_ok(&server, "/").await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let domain = server.uri();
    let results = probe_all(&[&domain], 5).await;

    // The same domain lands in both outputs
    assert_eq!(entries(&results.valid), vec![domain.as_str()]);
    assert_eq!(entries(&results.failed), vec![domain.as_str()]);
}

#[tokio::test]
async fn test_fallback_origin_strips_path_and_query() {
    let server = MockServer::start().await;
    mount_ok(&server, "/blog/post").await;

    let domain = format!("{}/blog/post?id=7#comments", server.uri());
    let results = probe_all(&[&domain], 5).await;

    assert_eq!(entries(&results.valid), vec![server.uri().as_str()]);
    assert_eq!(entries(&results.failed), vec![domain.as_str()]);
}

#[tokio::test]
async fn test_sitemap_resolved_from_root_for_nested_domain() {
    let server = MockServer::start().await;
    mount_ok(&server, "/en/home").await;
    mount_ok(&server, "/sitemap.xml").await;

    let domain = format!("{}/en/home", server.uri());
    let results = probe_all(&[&domain], 5).await;

    let sitemap = format!("{}/sitemap.xml", server.uri());
    assert_eq!(entries(&results.valid), vec![sitemap.as_str()]);
    assert!(results.failed.is_empty());
}

#[tokio::test]
async fn test_main_page_non_200_is_dropped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_ok(&server, "/sitemap.xml").await;

    let results = probe_all(&[&server.uri()], 5).await;

    assert!(results.valid.is_empty());
    assert!(results.failed.is_empty());
    assert_eq!(
        results.outcomes[0].1,
        ProbeOutcome::MainPageUnavailable { status_code: 500 }
    );
}

#[tokio::test]
async fn test_main_page_204_is_dropped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let results = probe_all(&[&server.uri()], 5).await;

    assert!(results.valid.is_empty());
    assert!(results.failed.is_empty());
}

#[tokio::test]
async fn test_connection_refused_is_failed() {
    let domain = refused_url();
    let results = probe_all(&[&domain], 5).await;

    assert!(results.valid.is_empty());
    assert_eq!(entries(&results.failed), vec![domain.as_str()]);
    assert!(results.outcomes[0].1.is_error());
}

#[tokio::test]
async fn test_invalid_url_is_failed() {
    let results = probe_all(&["not a url", "example.com"], 5).await;

    assert!(results.valid.is_empty());
    assert_eq!(entries(&results.failed), vec!["not a url", "example.com"]);
}

#[tokio::test]
async fn test_main_page_timeout_is_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let domain = server.uri();
    let results = probe_all(&[&domain], 1).await;

    assert!(results.valid.is_empty());
    assert_eq!(entries(&results.failed), vec![domain.as_str()]);
}

#[tokio::test]
async fn test_sitemap_timeout_is_failed_without_fallback() {
    let server = MockServer::start().await;
    mount_ok(&server, "/").await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let domain = server.uri();
    let results = probe_all(&[&domain], 1).await;

    assert!(results.valid.is_empty());
    assert_eq!(entries(&results.failed), vec![domain.as_str()]);
}

#[tokio::test]
async fn test_truncated_main_page_body_is_failed() {
    let domain = spawn_raw_server(TRUNCATED_PAGE, OK_PAGE).await;
    let results = probe_all(&[&domain], 5).await;

    assert!(results.valid.is_empty());
    assert_eq!(entries(&results.failed), vec![domain.as_str()]);
    assert!(results.outcomes[0].1.is_error());
}

#[tokio::test]
async fn test_truncated_sitemap_body_is_failed_without_fallback() {
    let domain = spawn_raw_server(OK_PAGE, TRUNCATED_PAGE).await;
    let results = probe_all(&[&domain], 5).await;

    assert!(results.valid.is_empty());
    assert_eq!(entries(&results.failed), vec![domain.as_str()]);
    assert!(results.outcomes[0].1.is_error());
}

#[tokio::test]
async fn test_raw_server_serves_complete_pages() {
    let domain = spawn_raw_server(OK_PAGE, OK_PAGE).await;
    let results = probe_all(&[&domain], 5).await;

    let sitemap = format!("{}/sitemap.xml", domain);
    assert_eq!(entries(&results.valid), vec![sitemap.as_str()]);
    assert!(results.failed.is_empty());
}

#[tokio::test]
async fn test_sitemap_resolved_against_redirect_target() {
    let origin = MockServer::start().await;
    let target = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/landing", target.uri())),
        )
        .mount(&origin)
        .await;
    mount_ok(&target, "/landing").await;
    mount_ok(&target, "/sitemap.xml").await;

    let results = probe_all(&[&origin.uri()], 5).await;

    let sitemap = format!("{}/sitemap.xml", target.uri());
    assert_eq!(entries(&results.valid), vec![sitemap.as_str()]);
    assert!(results.failed.is_empty());
}

#[tokio::test]
async fn test_fallback_uses_redirect_target_but_fails_original_domain() {
    let origin = MockServer::start().await;
    let target = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", format!("{}/welcome?ref=1", target.uri())),
        )
        .mount(&origin)
        .await;
    mount_ok(&target, "/welcome").await;

    let domain = origin.uri();
    let results = probe_all(&[&domain], 5).await;

    assert_eq!(entries(&results.valid), vec![target.uri().as_str()]);
    assert_eq!(entries(&results.failed), vec![domain.as_str()]);
}

#[tokio::test]
async fn test_redirected_sitemap_records_requested_url() {
    let server = MockServer::start().await;
    mount_ok(&server, "/").await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/sitemap_index.xml", server.uri())),
        )
        .mount(&server)
        .await;
    mount_ok(&server, "/sitemap_index.xml").await;

    let results = probe_all(&[&server.uri()], 5).await;

    let sitemap = format!("{}/sitemap.xml", server.uri());
    assert_eq!(entries(&results.valid), vec![sitemap.as_str()]);
}

#[tokio::test]
async fn test_errors_do_not_stop_the_run() {
    let server = MockServer::start().await;
    mount_ok(&server, "/").await;
    mount_ok(&server, "/sitemap.xml").await;

    let down = refused_url();
    let up = server.uri();
    let results = probe_all(&[&down, &up], 5).await;

    let sitemap = format!("{}/sitemap.xml", up);
    assert_eq!(entries(&results.valid), vec![sitemap.as_str()]);
    assert_eq!(entries(&results.failed), vec![down.as_str()]);
    assert_eq!(results.outcomes.len(), 2);
}

#[tokio::test]
async fn test_full_run_writes_both_files() {
    let found = MockServer::start().await;
    mount_ok(&found, "/").await;
    mount_ok(&found, "/sitemap.xml").await;

    let missing = MockServer::start().await;
    mount_ok(&missing, "/").await;

    let broken = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&broken)
        .await;

    let down = refused_url();

    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path(), 5);
    std::fs::write(
        &config.input.path,
        format!(
            "{},first\n{}\n\n{}\n{}\n{}\n",
            found.uri(),
            missing.uri(),
            broken.uri(),
            down,
            found.uri()
        ),
    )
    .unwrap();

    let extracts_path = config.output.extracts_path.clone();
    let failures_path = config.output.failures_path.clone();

    let results = run_discovery(config).await.expect("Discovery failed");
    assert_eq!(results.outcomes.len(), 4);

    let extracts = std::fs::read_to_string(&extracts_path).unwrap();
    assert_eq!(
        extracts,
        format!("{}/sitemap.xml\r\n{}\r\n", found.uri(), missing.uri())
    );

    let failures = std::fs::read_to_string(&failures_path).unwrap();
    assert_eq!(failures, format!("{}\r\n{}\r\n", missing.uri(), down));

    let stats = results.statistics();
    assert_eq!(stats.domains_probed, 4);
    assert_eq!(stats.sitemaps_found, 1);
    assert_eq!(stats.sitemaps_missing, 1);
    assert_eq!(stats.main_page_unavailable, 1);
    assert_eq!(stats.errors, 1);
}

#[tokio::test]
async fn test_repeated_runs_produce_identical_files() {
    let server = MockServer::start().await;
    mount_ok(&server, "/").await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let down = refused_url();

    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path(), 5);
    std::fs::write(&config.input.path, format!("{}\n{}\n", server.uri(), down)).unwrap();

    run_discovery(config.clone()).await.expect("First run failed");
    let first_extracts = std::fs::read_to_string(&config.output.extracts_path).unwrap();
    let first_failures = std::fs::read_to_string(&config.output.failures_path).unwrap();

    run_discovery(config.clone()).await.expect("Second run failed");
    let second_extracts = std::fs::read_to_string(&config.output.extracts_path).unwrap();
    let second_failures = std::fs::read_to_string(&config.output.failures_path).unwrap();

    assert_eq!(first_extracts, second_extracts);
    assert_eq!(first_failures, second_failures);
}
