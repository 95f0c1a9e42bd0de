//! Tests for the no-op collaborators.

use crier_core::PostComposer;
use crier_interface::{Publisher, TrendSource};
use crier_providers::{NoOpPublisher, NoOpTrendSource};

#[tokio::test]
async fn test_noop_publisher_counts_posts() {
    let publisher = NoOpPublisher::new();
    let composer = PostComposer::new(280, "#News");
    let post = composer.compose("Hello #World");

    let first = publisher.publish(&post, None).await.unwrap();
    let second = publisher.publish(&post, None).await.unwrap();

    assert_eq!(first.0, "noop-1");
    assert_eq!(second.0, "noop-2");
    assert_eq!(publisher.published(), 2);
}

#[tokio::test]
async fn test_noop_publisher_verifies() {
    assert!(NoOpPublisher::new().verify().await.is_ok());
    assert_eq!(NoOpPublisher::new().platform_name(), "noop");
}

#[tokio::test]
async fn test_noop_trend_source_is_always_empty() {
    let trends = NoOpTrendSource.fetch().await.unwrap();
    assert!(trends.is_empty());
}
