//! Integration tests for `HttpFetcher` against a local mock server.

use tokio_stream::StreamExt;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{BlocklistFetcher, FetchError, HttpFetcher};

async fn collect_lines(fetcher: &HttpFetcher, source: &Url) -> Vec<String> {
    let stream = fetcher.fetch(source).await.unwrap();
    stream
        .collect::<Result<Vec<_>, _>>()
        .await
        .expect("body stream should not fail")
}

fn source_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/blocklist.txt", server.uri())).unwrap()
}

#[tokio::test]
async fn downloads_body_as_ordered_lines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocklist.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("a.example\nb.example\nc.example\n"))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new();
    let lines = collect_lines(&fetcher, &source_url(&server)).await;

    assert_eq!(lines, ["a.example", "b.example", "c.example"]);
}

#[tokio::test]
async fn sends_identifying_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocklist.txt"))
        .and(header("user-agent", super::USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new();
    let result = fetcher.fetch(&source_url(&server)).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn custom_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "custom-agent 1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new().with_user_agent("custom-agent 1.0");
    let result = fetcher.fetch(&source_url(&server)).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn status_404_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new();
    let result = fetcher.fetch(&source_url(&server)).await;

    match result {
        Err(FetchError::Status { status }) => assert_eq!(status.as_u16(), 404),
        Err(other) => panic!("expected status error, got {other:?}"),
        Ok(_) => panic!("expected status error, got Ok"),
    }
}

#[tokio::test]
async fn status_500_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new();
    let result = fetcher.fetch(&source_url(&server)).await;

    assert!(matches!(result, Err(FetchError::Status { .. })));
}

#[tokio::test]
async fn redirects_are_followed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocklist.txt"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", format!("{}/moved.txt", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/moved.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("moved.example\n"))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new();
    let lines = collect_lines(&fetcher, &source_url(&server)).await;

    assert_eq!(lines, ["moved.example"]);
}

#[tokio::test]
async fn connection_refused_is_a_connection_error() {
    // Port 1 is essentially guaranteed to refuse connections.
    let source = Url::parse("http://127.0.0.1:1/blocklist.txt").unwrap();

    let fetcher = HttpFetcher::new();
    let result = fetcher.fetch(&source).await;

    assert!(matches!(result, Err(FetchError::Connection(_))));
}
