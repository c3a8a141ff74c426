use serde_json::Value;
use std::future::Future;

use crate::Result;

/// Path of the calendar feed, relative to the configured endpoint
pub const CALENDAR_EVENTS_PATH: &str = "calendarEvents";

/// "Fetch JSON from a path" capability
///
/// Responsibilities:
/// - Resolve `path` against the source's own base (URL or directory)
/// - Return the decoded JSON document, or an error for any transport,
///   status or parse failure
///
/// Sources never retry and never cache; one call is one attempt.
pub trait EventSource: Send + Sync {
    /// Short identifier used in diagnostics (e.g., "http", "file")
    fn id(&self) -> &'static str;

    /// Human-readable location of the source
    fn describe(&self) -> String;

    /// Fetch and decode the JSON document at `path`
    fn fetch_json(&self, path: &str) -> impl Future<Output = Result<Value>> + Send;
}
