//! Built-in English strings for the events panel and heading index.

pub(crate) const STRINGS: &[(&str, &str)] = &[
    ("community-events-content-heading", "Get together with the community"),
    (
        "community-events-content-1",
        "Community calls are open to everyone: bring questions, demos and ideas.",
    ),
    (
        "community-events-content-2",
        "Join the Discord server to hear about new calls and follow up afterwards.",
    ),
    ("community-events-next-event", "Next event"),
    ("community-events-no-events-planned", "No events planned"),
    ("community-events-add-to-calendar", "Add to calendar"),
    ("community-events-join-discord", "Join Discord"),
    ("community-events-upcoming-calls", "Upcoming calls"),
    ("community-events-no-upcoming-calls", "No upcoming calls"),
    ("community-events-previous-calls", "Previous calls"),
    ("community-events-there-are-no-past-calls", "There are no past calls"),
    ("loading", "Loading..."),
    (
        "loading-error-try-again-later",
        "Unable to load data. Please try again later.",
    ),
    ("events-badge-summary", "{upcoming} upcoming, {past} past call(s)"),
    ("events-badge-failed", "Events could not be loaded"),
    ("events-tip-check-endpoint", "Check the configured events endpoint"),
    ("events-tip-diagnostics", "Re-run with diagnostics"),
    ("toc-title", "On this page"),
    ("toc-empty", "This page has no headings"),
    ("toc-badge-empty", "No headings to index"),
    ("toc-badge-indexed", "{count} heading(s) indexed"),
    ("toc-badge-missing-id", "{count} without a custom ID"),
    ("toc-badge-malformed", "{count} with a marker but no title"),
    (
        "toc-tip-add-marker",
        "Append an explicit {#anchor-id} marker so links survive title edits",
    ),
    ("toc-tip-fix-malformed", "Put the heading text before its {#anchor-id} marker"),
];
