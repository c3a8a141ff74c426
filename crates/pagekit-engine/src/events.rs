use pagekit_types::{Event, EventFeed, RawPayload};
use serde_json::Value;

/// Map an upstream payload into the feed, preserving both lists' order
pub fn feed_from_payload(payload: RawPayload) -> EventFeed {
    EventFeed {
        past: payload.past_events.into_iter().map(Event::from).collect(),
        upcoming: payload.future_events.into_iter().map(Event::from).collect(),
    }
}

/// Decode and map a raw JSON document in one step
pub fn feed_from_value(value: Value) -> pagekit_types::Result<EventFeed> {
    RawPayload::from_value(value).map(feed_from_payload)
}
