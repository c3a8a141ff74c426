use std::fmt;

use crate::presentation::formatters::{format_event_date, format_event_datetime, format_offset};
use crate::presentation::view_models::{
    CreateView, EventEntryViewModel, EventSectionViewModel, EventsPanelViewModel, SectionStatus,
    ViewMode,
};

impl CreateView for EventsPanelViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(EventsPanelView::new(self, mode))
    }
}

pub struct EventsPanelView<'a> {
    data: &'a EventsPanelViewModel,
    mode: ViewMode,
}

impl<'a> EventsPanelView<'a> {
    pub fn new(data: &'a EventsPanelViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn date(&self, event: &EventEntryViewModel) -> String {
        format_event_date(&event.date, &self.data.language)
    }

    /// Message for a section that has no list to show, if any
    fn placeholder<'s>(
        &'s self,
        section: &EventSectionViewModel,
        empty: &'s str,
    ) -> Option<&'s str> {
        match section.status {
            SectionStatus::Loading => Some(&self.data.labels.loading),
            SectionStatus::Error => Some(&self.data.labels.error),
            SectionStatus::Ready if section.events.is_empty() => Some(empty),
            SectionStatus::Ready => None,
        }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for event in self
            .data
            .next_event
            .events
            .iter()
            .chain(&self.data.upcoming.events)
        {
            writeln!(f, "{}", event.calendar_link)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let labels = &self.data.labels;
        let sections = [
            (&labels.next_event, &self.data.next_event, &labels.no_events_planned),
            (&labels.upcoming_calls, &self.data.upcoming, &labels.no_upcoming_calls),
            (&labels.previous_calls, &self.data.past, &labels.no_past_calls),
        ];

        for (title, section, empty) in sections {
            if let Some(message) = self.placeholder(section, empty) {
                writeln!(f, "{}: {}", title, message)?;
                continue;
            }
            for event in &section.events {
                writeln!(f, "{}: {}  {}", title, self.date(event), event.title)?;
            }
        }
        Ok(())
    }

    fn render_next_event(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let labels = &self.data.labels;
        let section = &self.data.next_event;

        writeln!(f, "{}", labels.next_event)?;

        match self.placeholder(section, &labels.no_events_planned) {
            Some(message) => writeln!(f, "  {}", message)?,
            None => {
                for event in &section.events {
                    let when = format_event_datetime(&event.date, &self.data.language);
                    match format_offset(&event.date) {
                        Some(offset) => writeln!(f, "  {} ({})", when, offset)?,
                        None => writeln!(f, "  {}", when)?,
                    }
                    writeln!(f, "  {}", event.title)?;
                    writeln!(f, "  {}: {}", labels.add_to_calendar, event.calendar_link)?;
                    if self.mode == ViewMode::Verbose
                        && let Some(location) = &event.location_link
                    {
                        writeln!(f, "  {}", location)?;
                    }
                }
            }
        }

        if section.status != SectionStatus::Loading
            && let Some(url) = &self.data.discord_url
        {
            writeln!(f, "  {}: {}", labels.join_discord, url)?;
        }

        Ok(())
    }

    fn render_list(
        &self,
        f: &mut fmt::Formatter,
        title: &str,
        section: &EventSectionViewModel,
        empty: &str,
    ) -> fmt::Result {
        writeln!(f, "{}", title)?;

        if let Some(message) = self.placeholder(section, empty) {
            return writeln!(f, "  {}", message);
        }

        for event in &section.events {
            writeln!(
                f,
                "  {:<13} {}  {}",
                self.date(event),
                event.title,
                event.calendar_link
            )?;
            if self.mode == ViewMode::Verbose
                && let Some(location) = &event.location_link
            {
                writeln!(f, "  {:<13} {}", "", location)?;
            }
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let labels = &self.data.labels;

        writeln!(f, "{}", labels.heading)?;
        for line in &labels.intro {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;

        self.render_next_event(f)?;
        writeln!(f)?;
        self.render_list(
            f,
            &labels.upcoming_calls,
            &self.data.upcoming,
            &labels.no_upcoming_calls,
        )?;
        writeln!(f)?;
        self.render_list(
            f,
            &labels.previous_calls,
            &self.data.past,
            &labels.no_past_calls,
        )
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;
        writeln!(f)?;
        writeln!(f, "Source:   {}", self.data.source)?;
        writeln!(f, "Language: {}", self.data.language)?;
        if let Some(error) = &self.data.error {
            writeln!(f, "Error:    {}", error)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for EventsPanelView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_events_panel;
    use pagekit_runtime::Catalog;
    use pagekit_types::{EventFeed, FetchFailure, LoadState};

    fn render(state: &LoadState<EventFeed>, mode: ViewMode) -> String {
        let result = present_events_panel(
            state,
            &Catalog::english(),
            "functions/".to_string(),
            Some("https://discord.example/invite".to_string()),
        );
        EventsPanelView::new(&result.content, mode).to_string()
    }

    fn ready() -> LoadState<EventFeed> {
        let feed =
            pagekit_engine::feed_from_value(pagekit_testing::fixtures::calendar_payload()).unwrap();
        LoadState::Ready(feed)
    }

    #[test]
    fn test_standard_ready_panel() {
        insta::assert_snapshot!(render(&ready(), ViewMode::Standard), @r"
Get together with the community
Community calls are open to everyone: bring questions, demos and ideas.
Join the Discord server to hear about new calls and follow up afterwards.

Next event
  January 5, 2026, 16:00 (UTC+00:00)
  Community call #43
  Add to calendar: https://calendar.example/event/43
  Join Discord: https://discord.example/invite

Upcoming calls
  Feb 2, 2026   Community call #44  https://calendar.example/event/44
  Mar 2, 2026   Translation sprint  https://calendar.example/event/45

Previous calls
  Nov 3, 2025   Community call #41  https://calendar.example/event/41
  Dec 1, 2025   Community call #42  https://calendar.example/event/42
");
    }

    #[test]
    fn test_error_shows_try_again_in_every_section() {
        let state = LoadState::Error(FetchFailure::new("HTTP error: 503"));
        let output = render(&state, ViewMode::Standard);

        assert_eq!(
            output
                .matches("Unable to load data. Please try again later.")
                .count(),
            3
        );
        // Heading copy still renders around the failed sections
        assert!(output.starts_with("Get together with the community"));
        assert!(output.contains("Join Discord"));
    }

    #[test]
    fn test_loading_shows_loading_and_hides_discord() {
        let output = render(&LoadState::Loading, ViewMode::Standard);
        assert_eq!(output.matches("Loading...").count(), 3);
        assert!(!output.contains("Join Discord"));
    }

    #[test]
    fn test_empty_feed_uses_empty_copy() {
        let output = render(&LoadState::Ready(EventFeed::default()), ViewMode::Standard);
        assert!(output.contains("No events planned"));
        assert!(output.contains("No upcoming calls"));
        assert!(output.contains("There are no past calls"));
        assert!(!output.contains("Add to calendar"));
    }

    #[test]
    fn test_minimal_lists_upcoming_links() {
        let output = render(&ready(), ViewMode::Minimal);
        assert_eq!(
            output.lines().collect::<Vec<_>>(),
            vec![
                "https://calendar.example/event/43",
                "https://calendar.example/event/44",
                "https://calendar.example/event/45",
            ]
        );
    }

    #[test]
    fn test_compact_one_line_per_event() {
        let output = render(&ready(), ViewMode::Compact);
        assert_eq!(output.lines().count(), 5);
        assert!(output.starts_with("Next event: Jan 5, 2026  Community call #43"));
    }

    #[test]
    fn test_next_event_without_offset_omits_offset_label() {
        let feed = pagekit_engine::feed_from_value(serde_json::json!({
            "pastEvents": [],
            "futureEvents": [
                { "start": { "dateTime": "2026-02-08T16:00:00" }, "summary": "Floating call", "htmlLink": "https://calendar.example/f" },
                { "start": { "dateTime": "2026-02-15T16:00:00Z" }, "summary": "Zoned call", "htmlLink": "https://calendar.example/z" }
            ]
        }))
        .unwrap();
        let output = render(&LoadState::Ready(feed), ViewMode::Standard);

        assert!(output.contains("  February 8, 2026, 16:00\n  Floating call"));
        assert!(output.contains("Feb 15, 2026  Zoned call"));
    }

    #[test]
    fn test_verbose_includes_location_and_source() {
        let output = render(&ready(), ViewMode::Verbose);
        assert!(output.contains("https://meet.example/community"));
        assert!(output.contains("Source:   functions/"));
    }
}
