//! Tests for atomic artifact publication.

use tempfile::TempDir;

use crate::fetch::FetchError;
use crate::transform::DirectivePair;

use super::{FilePublisher, PublishError};

fn pairs(domains: &[&str]) -> Vec<Result<DirectivePair, FetchError>> {
    domains
        .iter()
        .map(|d| Ok(DirectivePair::from_line(d).unwrap()))
        .collect()
}

fn publisher_in(dir: &TempDir) -> FilePublisher {
    let target = dir.path().join("blocklist.conf");
    let temp = dir.path().join("blocklist.conf.tmp");
    FilePublisher::new(target, temp)
}

#[tokio::test]
async fn writes_header_and_pairs_in_order() {
    let dir = TempDir::new().unwrap();
    let publisher = publisher_in(&dir);

    let processed = publisher
        .publish(tokio_stream::iter(pairs(&[
            "ads.example.com",
            "tracker.example.com",
        ])))
        .await
        .unwrap();

    assert_eq!(processed, 2);
    let content = std::fs::read_to_string(publisher.target()).unwrap();
    assert_eq!(
        content,
        "local-zone: \"0.0.0.0\" redirect\n\
         local-data: \"0.0.0.0 A 0.0.0.0\"\n\
         local-zone: \"ads.example.com\" redirect\n\
         local-data: \"ads.example.com A 0.0.0.0\"\n\
         local-zone: \"tracker.example.com\" redirect\n\
         local-data: \"tracker.example.com A 0.0.0.0\"\n"
    );
}

#[tokio::test]
async fn empty_blocklist_publishes_header_only() {
    let dir = TempDir::new().unwrap();
    let publisher = publisher_in(&dir);

    let processed = publisher.publish(tokio_stream::iter(pairs(&[]))).await.unwrap();

    assert_eq!(processed, 0);
    let content = std::fs::read_to_string(publisher.target()).unwrap();
    assert_eq!(
        content,
        "local-zone: \"0.0.0.0\" redirect\nlocal-data: \"0.0.0.0 A 0.0.0.0\"\n"
    );
}

#[tokio::test]
async fn replaces_previously_published_artifact() {
    let dir = TempDir::new().unwrap();
    let publisher = publisher_in(&dir);

    publisher
        .publish(tokio_stream::iter(pairs(&["old.example.com"])))
        .await
        .unwrap();
    publisher
        .publish(tokio_stream::iter(pairs(&["new.example.com"])))
        .await
        .unwrap();

    let content = std::fs::read_to_string(publisher.target()).unwrap();
    assert!(content.contains("new.example.com"));
    assert!(!content.contains("old.example.com"));
}

#[tokio::test]
async fn stream_failure_reports_source_error() {
    let dir = TempDir::new().unwrap();
    let publisher = publisher_in(&dir);

    let failing = tokio_stream::iter(vec![
        Ok(DirectivePair::from_line("a.example").unwrap()),
        Err(FetchError::Timeout),
    ]);

    let result = publisher.publish(failing).await;
    assert!(matches!(result, Err(PublishError::Source(_))));
}

#[tokio::test]
async fn stream_failure_leaves_previous_artifact_untouched() {
    let dir = TempDir::new().unwrap();
    let publisher = publisher_in(&dir);

    publisher
        .publish(tokio_stream::iter(pairs(&["kept.example.com"])))
        .await
        .unwrap();

    let failing = tokio_stream::iter(vec![
        Ok(DirectivePair::from_line("partial.example.com").unwrap()),
        Err(FetchError::Timeout),
    ]);
    publisher.publish(failing).await.unwrap_err();

    // The target still holds the complete artifact from the earlier cycle.
    let content = std::fs::read_to_string(publisher.target()).unwrap();
    assert_eq!(
        content,
        "local-zone: \"0.0.0.0\" redirect\n\
         local-data: \"0.0.0.0 A 0.0.0.0\"\n\
         local-zone: \"kept.example.com\" redirect\n\
         local-data: \"kept.example.com A 0.0.0.0\"\n"
    );
}

#[tokio::test]
async fn stream_failure_before_any_publish_leaves_no_target() {
    let dir = TempDir::new().unwrap();
    let publisher = publisher_in(&dir);

    let failing =
        tokio_stream::iter(vec![Err::<DirectivePair, _>(FetchError::Timeout)]);
    publisher.publish(failing).await.unwrap_err();

    assert!(!publisher.target().exists());
}

#[tokio::test]
async fn unwritable_temp_path_is_a_write_error() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("blocklist.conf");
    let temp = dir.path().join("missing-dir").join("blocklist.conf.tmp");
    let publisher = FilePublisher::new(target, temp);

    let result = publisher.publish(tokio_stream::iter(pairs(&["a.example"]))).await;

    assert!(matches!(result, Err(PublishError::Write(_))));
}
