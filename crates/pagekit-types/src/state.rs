use serde::Serialize;
use std::fmt;

use crate::event::{Event, EventFeed};

/// Loading the events feed failed (transport, HTTP status or decode)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchFailure {
    pub message: String,
}

impl FetchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load events: {}", self.message)
    }
}

impl std::error::Error for FetchFailure {}

/// Tri-state load model of a fetch-backed view
///
/// Transitions are one-shot: `Loading` moves to either `Error` or `Ready`
/// and never back. Re-entering `Loading` requires a new mount.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum LoadState<T> {
    Loading,
    Error(FetchFailure),
    Ready(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn has_error(&self) -> bool {
        matches!(self, LoadState::Error(_))
    }

    /// True once the state is terminal
    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchFailure> {
        match self {
            LoadState::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Error(err) => LoadState::Error(err),
            LoadState::Ready(data) => LoadState::Ready(f(data)),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for LoadState<T>
where
    E: fmt::Display,
{
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(data) => LoadState::Ready(data),
            Err(err) => LoadState::Error(FetchFailure::new(err.to_string())),
        }
    }
}

impl LoadState<EventFeed> {
    /// Past calls; empty while loading or after a failure
    pub fn past(&self) -> &[Event] {
        self.data().map(|feed| feed.past.as_slice()).unwrap_or(&[])
    }

    /// Upcoming calls; empty while loading or after a failure
    pub fn upcoming(&self) -> &[Event] {
        self.data()
            .map(|feed| feed.upcoming.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state: LoadState<EventFeed> = LoadState::default();
        assert!(state.is_loading());
        assert!(!state.has_error());
        assert!(!state.is_settled());
        assert!(state.past().is_empty());
        assert!(state.upcoming().is_empty());
    }

    #[test]
    fn test_error_state_has_empty_lists() {
        let state: LoadState<EventFeed> = LoadState::Error(FetchFailure::new("connection refused"));
        assert!(!state.is_loading());
        assert!(state.has_error());
        assert!(state.past().is_empty());
        assert!(state.upcoming().is_empty());
        assert_eq!(
            state.error().map(|e| e.to_string()),
            Some("failed to load events: connection refused".to_string())
        );
    }

    #[test]
    fn test_from_result() {
        let ok: LoadState<u32> = Ok::<_, String>(3).into();
        assert_eq!(ok.data(), Some(&3));

        let err: LoadState<u32> = Err::<u32, _>("boom").into();
        assert_eq!(err, LoadState::Error(FetchFailure::new("boom")));
    }

    #[test]
    fn test_serialized_shape() {
        let state: LoadState<u32> = LoadState::Ready(7);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "ready", "data": 7 }));

        let loading: LoadState<u32> = LoadState::Loading;
        let json = serde_json::to_value(&loading).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "loading" }));
    }
}
