use pagekit_runtime::Translate;
use pagekit_types::{Event, EventFeed, LoadState};

use crate::presentation::view_models::{
    CommandResultViewModel, EventEntryViewModel, EventSectionViewModel, EventsLabels,
    EventsPanelViewModel, Guidance, SectionStatus, StatusBadge,
};

fn entry(event: &Event) -> EventEntryViewModel {
    EventEntryViewModel {
        title: event.title.clone(),
        date: event.date.clone(),
        calendar_link: event.calendar_link.clone(),
        location_link: event.location_link.clone(),
    }
}

fn section<'a>(
    state: &'a LoadState<EventFeed>,
    pick: impl FnOnce(&'a EventFeed) -> &'a [Event],
) -> EventSectionViewModel {
    match state {
        LoadState::Loading => EventSectionViewModel {
            status: SectionStatus::Loading,
            events: Vec::new(),
        },
        LoadState::Error(_) => EventSectionViewModel {
            status: SectionStatus::Error,
            events: Vec::new(),
        },
        LoadState::Ready(feed) => EventSectionViewModel {
            status: SectionStatus::Ready,
            events: pick(feed).iter().map(entry).collect(),
        },
    }
}

fn labels(catalog: &impl Translate) -> EventsLabels {
    EventsLabels {
        heading: catalog.translate("community-events-content-heading"),
        intro: vec![
            catalog.translate("community-events-content-1"),
            catalog.translate("community-events-content-2"),
        ],
        next_event: catalog.translate("community-events-next-event"),
        loading: catalog.translate("loading"),
        error: catalog.translate("loading-error-try-again-later"),
        no_events_planned: catalog.translate("community-events-no-events-planned"),
        add_to_calendar: catalog.translate("community-events-add-to-calendar"),
        join_discord: catalog.translate("community-events-join-discord"),
        upcoming_calls: catalog.translate("community-events-upcoming-calls"),
        no_upcoming_calls: catalog.translate("community-events-no-upcoming-calls"),
        previous_calls: catalog.translate("community-events-previous-calls"),
        no_past_calls: catalog.translate("community-events-there-are-no-past-calls"),
    }
}

pub fn present_events_panel(
    state: &LoadState<EventFeed>,
    catalog: &impl Translate,
    source: String,
    discord_url: Option<String>,
) -> CommandResultViewModel<EventsPanelViewModel> {
    let content = EventsPanelViewModel {
        language: catalog.language().to_string(),
        source,
        labels: labels(catalog),
        discord_url,
        next_event: section(state, |feed| {
            feed.upcoming.get(..1).unwrap_or(&[])
        }),
        upcoming: section(state, EventFeed::later),
        past: section(state, |feed| feed.past.as_slice()),
        error: state.error().map(|failure| failure.to_string()),
    };

    let mut result = CommandResultViewModel::new(content);

    match state {
        LoadState::Loading => {}
        LoadState::Error(_) => {
            result = result
                .with_badge(StatusBadge::warning(catalog.translate("events-badge-failed")))
                .with_suggestion(
                    Guidance::new(catalog.translate("events-tip-check-endpoint"))
                        .with_command("pagekit config show"),
                )
                .with_suggestion(
                    Guidance::new(catalog.translate("events-tip-diagnostics"))
                        .with_command("pagekit events --log-level debug"),
                );
        }
        LoadState::Ready(feed) => {
            let label = catalog.translate_with(
                "events-badge-summary",
                &[
                    ("upcoming", &feed.upcoming.len().to_string()),
                    ("past", &feed.past.len().to_string()),
                ],
            );
            result = result.with_badge(StatusBadge::success(label));
        }
    }

    result
}
