use serde::Serialize;

/// Which of the three panel states a section renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Loading,
    Error,
    Ready,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventEntryViewModel {
    pub title: String,
    /// Upstream timestamp, unformatted
    pub date: String,
    pub calendar_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_link: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventSectionViewModel {
    pub status: SectionStatus,
    pub events: Vec<EventEntryViewModel>,
}

/// Translated copy for the panel
#[derive(Debug, Clone, Serialize)]
pub struct EventsLabels {
    pub heading: String,
    pub intro: Vec<String>,
    pub next_event: String,
    pub loading: String,
    pub error: String,
    pub no_events_planned: String,
    pub add_to_calendar: String,
    pub join_discord: String,
    pub upcoming_calls: String,
    pub no_upcoming_calls: String,
    pub previous_calls: String,
    pub no_past_calls: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventsPanelViewModel {
    pub language: String,
    pub source: String,
    pub labels: EventsLabels,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_url: Option<String>,
    /// First upcoming call; at most one entry
    pub next_event: EventSectionViewModel,
    /// Upcoming calls after the next one
    pub upcoming: EventSectionViewModel,
    pub past: EventSectionViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
