use pagekit_engine::feed_from_value;
use pagekit_sources::{CALENDAR_EVENTS_PATH, EventSource};
use pagekit_types::{EventFeed, FetchFailure, LoadState};

/// Fetch the calendar feed once and settle into a terminal state
///
/// Every failure (transport, status, decode) is reported as
/// `LoadState::Error`; nothing is retried and nothing escapes as an error.
pub async fn load_events<S: EventSource>(source: &S) -> LoadState<EventFeed> {
    let result = match source.fetch_json(CALENDAR_EVENTS_PATH).await {
        Ok(value) => feed_from_value(value).map_err(|e| FetchFailure::new(e.to_string())),
        Err(err) => Err(FetchFailure::new(err.to_string())),
    };

    match result {
        Ok(feed) => {
            tracing::debug!(
                source = %source.describe(),
                past = feed.past.len(),
                upcoming = feed.upcoming.len(),
                "events loaded"
            );
            LoadState::Ready(feed)
        }
        Err(failure) => {
            tracing::warn!(
                source = %source.describe(),
                error = %failure.message,
                "failed to load events"
            );
            LoadState::Error(failure)
        }
    }
}
