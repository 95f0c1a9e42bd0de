//! Metrics collection for the publish cycle.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Metrics collector for cycle operations.
///
/// Cheap to clone; all clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct CycleMetrics {
    inner: Arc<CycleMetricsInner>,
}

#[derive(Debug, Default)]
struct CycleMetricsInner {
    cycles: AtomicU64,
    published: AtomicU64,
    generation_failures: AtomicU64,
    publish_failures: AtomicU64,
    last_published: parking_lot::Mutex<Option<Instant>>,
}

impl CycleMetrics {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the start of a cycle iteration.
    pub fn record_cycle(&self) {
        self.inner.cycles.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a successful publish.
    pub fn record_published(&self) {
        self.inner.published.fetch_add(1, Ordering::Relaxed);
        *self.inner.last_published.lock() = Some(Instant::now());
    }

    /// Records a text or image generation failure.
    pub fn record_generation_failure(&self) {
        self.inner.generation_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a publish failure.
    pub fn record_publish_failure(&self) {
        self.inner.publish_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of cycle iterations started.
    pub fn cycles(&self) -> u64 {
        self.inner.cycles.load(Ordering::Relaxed)
    }

    /// Number of posts published.
    pub fn published(&self) -> u64 {
        self.inner.published.load(Ordering::Relaxed)
    }

    /// Number of generation failures.
    pub fn generation_failures(&self) -> u64 {
        self.inner.generation_failures.load(Ordering::Relaxed)
    }

    /// Number of publish failures.
    pub fn publish_failures(&self) -> u64 {
        self.inner.publish_failures.load(Ordering::Relaxed)
    }

    /// Time since the last successful publish.
    pub fn time_since_published(&self) -> Option<std::time::Duration> {
        self.inner
            .last_published
            .lock()
            .map(|instant| instant.elapsed())
    }

    /// Creates a serializable snapshot of current metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            cycles: self.cycles(),
            published: self.published(),
            generation_failures: self.generation_failures(),
            publish_failures: self.publish_failures(),
            seconds_since_published: self.time_since_published().map(|d| d.as_secs()),
        }
    }
}

/// Serializable snapshot of cycle metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Cycle iterations started.
    pub cycles: u64,
    /// Posts published.
    pub published: u64,
    /// Generation failures.
    pub generation_failures: u64,
    /// Publish failures.
    pub publish_failures: u64,
    /// Seconds since the last successful publish.
    pub seconds_since_published: Option<u64>,
}
