use serde::{Deserialize, Serialize};
use serde_json::Value;

// NOTE: Feed Shape
//
// The endpoint proxies a calendar API and has already split the feed into
// past and future entries. We trust that split and its ordering: nothing here
// re-sorts or re-partitions, we only rename fields. Timestamps stay as the
// upstream ISO-8601 text; they are only interpreted when formatted.

/// Calendar feed as returned by the events endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPayload {
    pub past_events: Vec<RawEvent>,
    pub future_events: Vec<RawEvent>,
}

impl RawPayload {
    /// Decode a payload from an already-parsed JSON document
    pub fn from_value(value: Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Single calendar entry in upstream naming
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub start: RawEventStart,
    pub summary: String,
    pub html_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEventStart {
    /// ISO-8601 timestamp, with or without an offset
    pub date_time: String,
}

/// Community call, immutable once fetched
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Start time as sent upstream
    pub date: String,
    pub title: String,
    pub calendar_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_link: Option<String>,
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        Self {
            date: raw.start.date_time,
            title: raw.summary,
            calendar_link: raw.html_link,
            location_link: raw.location,
        }
    }
}

/// Past and upcoming calls in upstream order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventFeed {
    pub past: Vec<Event>,
    pub upcoming: Vec<Event>,
}

impl EventFeed {
    /// The call featured in the "next event" block
    pub fn next(&self) -> Option<&Event> {
        self.upcoming.first()
    }

    /// Upcoming calls after the next one
    pub fn later(&self) -> &[Event] {
        self.upcoming.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.past.is_empty() && self.upcoming.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_event(title: &str) -> Event {
        Event {
            date: "2026-01-05T16:00:00+00:00".to_string(),
            title: title.to_string(),
            calendar_link: "https://calendar.example/e".to_string(),
            location_link: None,
        }
    }

    #[test]
    fn test_raw_payload_decodes_upstream_names() {
        let value = json!({
            "pastEvents": [{
                "start": { "dateTime": "2025-12-01T17:00:00+01:00" },
                "summary": "Docs call #12",
                "htmlLink": "https://calendar.example/12",
                "location": "https://meet.example/12",
                "status": "confirmed"
            }],
            "futureEvents": []
        });

        let payload = RawPayload::from_value(value).unwrap();
        assert_eq!(payload.past_events.len(), 1);
        assert!(payload.future_events.is_empty());

        let event = Event::from(payload.past_events[0].clone());
        assert_eq!(event.title, "Docs call #12");
        assert_eq!(event.calendar_link, "https://calendar.example/12");
        assert_eq!(event.location_link.as_deref(), Some("https://meet.example/12"));
        assert_eq!(event.date, "2025-12-01T17:00:00+01:00");
    }

    #[test]
    fn test_timestamp_without_offset_is_accepted() {
        let value = json!({
            "pastEvents": [],
            "futureEvents": [
                { "start": { "dateTime": "2026-02-01T16:00:00Z" }, "summary": "a", "htmlLink": "x" },
                { "start": { "dateTime": "2026-02-08T16:00:00" }, "summary": "b", "htmlLink": "y" }
            ]
        });

        let payload = RawPayload::from_value(value).unwrap();
        assert_eq!(payload.future_events.len(), 2);
        assert_eq!(payload.future_events[1].start.date_time, "2026-02-08T16:00:00");
    }

    #[test]
    fn test_raw_payload_requires_both_lists() {
        let value = json!({ "pastEvents": [] });
        assert!(RawPayload::from_value(value).is_err());
    }

    #[test]
    fn test_raw_event_requires_timestamp() {
        let value = json!({
            "pastEvents": [{ "start": {}, "summary": "x", "htmlLink": "y" }],
            "futureEvents": []
        });
        assert!(RawPayload::from_value(value).is_err());
    }

    #[test]
    fn test_feed_next_and_later() {
        let feed = EventFeed {
            past: vec![],
            upcoming: vec![sample_event("a"), sample_event("b"), sample_event("c")],
        };

        assert_eq!(feed.next().map(|e| e.title.as_str()), Some("a"));
        let later: Vec<_> = feed.later().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(later, vec!["b", "c"]);
    }

    #[test]
    fn test_feed_later_on_empty() {
        let feed = EventFeed::default();
        assert!(feed.next().is_none());
        assert!(feed.later().is_empty());
        assert!(feed.is_empty());
    }
}
