//! Tests for topic selection.

use async_trait::async_trait;
use crier_bot::TopicSelector;
use crier_core::Topic;
use crier_error::{CrierErrorKind, CrierResult, ErrorClass, TrendError};
use crier_interface::TrendSource;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Trend source returning a fixed list.
struct FixedTrends(Vec<String>);

#[async_trait]
impl TrendSource for FixedTrends {
    async fn fetch(&self) -> CrierResult<Vec<String>> {
        Ok(self.0.clone())
    }
}

/// Trend source that always fails.
struct FailingTrends;

#[async_trait]
impl TrendSource for FailingTrends {
    async fn fetch(&self) -> CrierResult<Vec<String>> {
        Err(TrendError::new("feed unreachable"))?
    }
}

fn static_topics(names: &[&str]) -> Vec<Topic> {
    names.iter().map(|name| Topic::new(*name)).collect()
}

#[tokio::test]
async fn test_non_empty_trending_never_falls_back() {
    let trending: Vec<String> = (0..25).map(|i| format!("trend-{i}")).collect();
    let trends = FixedTrends(trending);
    let selector = TopicSelector::new(static_topics(&["static-only"]), 20);
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..50 {
        let topic = selector.select(&trends, &mut rng).await.unwrap();
        assert!(topic.as_str().starts_with("trend-"));
    }
}

#[tokio::test]
async fn test_trending_selection_capped_at_limit() {
    let trending: Vec<String> = (0..25).map(|i| format!("trend-{i}")).collect();
    let trends = FixedTrends(trending);
    let selector = TopicSelector::new(static_topics(&[]), 20);
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..200 {
        let topic = selector.select(&trends, &mut rng).await.unwrap();
        let index: usize = topic
            .as_str()
            .trim_start_matches("trend-")
            .parse()
            .unwrap();
        assert!(index < 20, "picked entry past the trend limit: {topic}");
    }
}

#[tokio::test]
async fn test_failing_fetch_selects_from_static() {
    let selector = TopicSelector::new(static_topics(&["DevOps", "Docker", "GitOps"]), 20);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let topic = selector.select(&FailingTrends, &mut rng).await.unwrap();
        assert!(["DevOps", "Docker", "GitOps"].contains(&topic.as_str()));
    }
}

#[tokio::test]
async fn test_empty_trending_selects_from_static() {
    let selector = TopicSelector::new(static_topics(&["DevOps"]), 20);
    let mut rng = StdRng::seed_from_u64(9);

    let topic = selector
        .select(&FixedTrends(Vec::new()), &mut rng)
        .await
        .unwrap();
    assert_eq!(topic.as_str(), "DevOps");
}

#[tokio::test]
async fn test_no_topics_anywhere_is_config_error() {
    let selector = TopicSelector::new(Vec::new(), 20);
    let mut rng = StdRng::seed_from_u64(11);

    let err = selector
        .select(&FixedTrends(Vec::new()), &mut rng)
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), CrierErrorKind::Config(_)));
    assert_eq!(err.class(), ErrorClass::Fatal);
}

#[tokio::test]
async fn test_no_topics_with_failing_fetch_is_config_error() {
    let selector = TopicSelector::new(Vec::new(), 20);
    let mut rng = StdRng::seed_from_u64(13);

    let err = selector.select(&FailingTrends, &mut rng).await.unwrap_err();
    assert!(matches!(err.kind(), CrierErrorKind::Config(_)));
}
