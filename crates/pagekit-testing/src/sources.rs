//! In-memory event sources for lifecycle tests.
//!
//! Each source answers every path with the same scripted outcome, so tests
//! control exactly what the loader sees without a network or a filesystem.

use pagekit_sources::{Error, EventSource, Result};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// Always answers with a fixed document
#[derive(Debug, Clone)]
pub struct StaticSource {
    payload: Value,
}

impl StaticSource {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }
}

impl EventSource for StaticSource {
    fn id(&self) -> &'static str {
        "static"
    }

    fn describe(&self) -> String {
        "static payload".to_string()
    }

    async fn fetch_json(&self, _path: &str) -> Result<Value> {
        Ok(self.payload.clone())
    }
}

/// Always fails as if the endpoint answered with `code`
#[derive(Debug, Clone)]
pub struct FailingSource {
    code: u16,
}

impl FailingSource {
    pub fn new(code: u16) -> Self {
        Self { code }
    }
}

impl Default for FailingSource {
    fn default() -> Self {
        Self::new(503)
    }
}

impl EventSource for FailingSource {
    fn id(&self) -> &'static str {
        "failing"
    }

    fn describe(&self) -> String {
        format!("failing source ({})", self.code)
    }

    async fn fetch_json(&self, path: &str) -> Result<Value> {
        Err(Error::Status {
            code: self.code,
            url: format!("test://{}", path),
        })
    }
}

/// Wraps another source and counts fetches and requested paths
#[derive(Debug, Clone)]
pub struct CountingSource<S> {
    inner: S,
    calls: Arc<AtomicUsize>,
    paths: Arc<std::sync::Mutex<Vec<String>>>,
}

impl<S> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
            paths: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    /// Shared counter; stays valid after the source is moved into a panel
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths
            .lock()
            .map(|paths| paths.clone())
            .unwrap_or_default()
    }
}

impl<S: EventSource> EventSource for CountingSource<S> {
    fn id(&self) -> &'static str {
        self.inner.id()
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }

    async fn fetch_json(&self, path: &str) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut paths) = self.paths.lock() {
            paths.push(path.to_string());
        }
        self.inner.fetch_json(path).await
    }
}

/// Answers after a delay and records whether the answer was ever produced
#[derive(Debug, Clone)]
pub struct DelayedSource<S> {
    inner: S,
    delay: Duration,
    completed: Arc<AtomicBool>,
}

impl<S> DelayedSource<S> {
    pub fn new(inner: S, delay: Duration) -> Self {
        Self {
            inner,
            delay,
            completed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag set once the delayed fetch finishes
    pub fn completed_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.completed)
    }
}

impl<S: EventSource> EventSource for DelayedSource<S> {
    fn id(&self) -> &'static str {
        self.inner.id()
    }

    fn describe(&self) -> String {
        format!("{} (delayed {:?})", self.inner.describe(), self.delay)
    }

    async fn fetch_json(&self, path: &str) -> Result<Value> {
        tokio::time::sleep(self.delay).await;
        let result = self.inner.fetch_json(path).await;
        self.completed.store(true, Ordering::SeqCst);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::calendar_payload;

    #[tokio::test]
    async fn test_counting_source_records_paths() -> anyhow::Result<()> {
        let source = CountingSource::new(StaticSource::new(calendar_payload()));
        source.fetch_json("calendarEvents").await?;

        assert_eq!(source.calls(), 1);
        assert_eq!(source.paths(), vec!["calendarEvents".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_failing_source_reports_status() {
        let err = FailingSource::new(500)
            .fetch_json("calendarEvents")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Status { code: 500, .. }));
    }
}
