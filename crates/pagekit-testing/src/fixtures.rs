//! Sample data for events and heading tests.
//!
//! Feeds mirror what the calendar endpoint returns, including fields the
//! decoder ignores (`status`, `id`).

use anyhow::Result;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

/// Feed with two past calls and three upcoming ones, in upstream order
pub fn calendar_payload() -> Value {
    json!({
        "pastEvents": [
            {
                "id": "p1",
                "status": "confirmed",
                "start": { "dateTime": "2025-11-03T16:00:00Z" },
                "summary": "Community call #41",
                "htmlLink": "https://calendar.example/event/41",
                "location": "https://meet.example/community"
            },
            {
                "id": "p2",
                "status": "confirmed",
                "start": { "dateTime": "2025-12-01T16:00:00Z" },
                "summary": "Community call #42",
                "htmlLink": "https://calendar.example/event/42"
            }
        ],
        "futureEvents": [
            {
                "id": "f1",
                "status": "confirmed",
                "start": { "dateTime": "2026-01-05T16:00:00Z" },
                "summary": "Community call #43",
                "htmlLink": "https://calendar.example/event/43",
                "location": "https://meet.example/community"
            },
            {
                "id": "f2",
                "status": "confirmed",
                "start": { "dateTime": "2026-02-02T16:00:00Z" },
                "summary": "Community call #44",
                "htmlLink": "https://calendar.example/event/44"
            },
            {
                "id": "f3",
                "status": "tentative",
                "start": { "dateTime": "2026-03-02T16:00:00Z" },
                "summary": "Translation sprint",
                "htmlLink": "https://calendar.example/event/45"
            }
        ]
    })
}

/// Feed with no calls at all
pub fn empty_payload() -> Value {
    json!({ "pastEvents": [], "futureEvents": [] })
}

/// Documentation page with custom ids, a derived anchor and a nested section
pub const STAKING_PAGE: &str = "\
# Staking

Intro paragraph.

## What is staking? {#what-is-staking}

Text.

### Rewards {#rewards}

More text.

## Solo staking {#solo-staking}

## Staking pools

## FAQ {#faq}
";

/// Write `payload` as `calendarEvents.json` under `dir`
pub fn write_feed(dir: &Path, payload: &Value) -> Result<()> {
    fs::create_dir_all(dir)?;
    let content = serde_json::to_string_pretty(payload)?;
    fs::write(dir.join("calendarEvents.json"), content)?;
    Ok(())
}
