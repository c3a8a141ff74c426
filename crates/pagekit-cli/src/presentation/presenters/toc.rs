use pagekit_engine::{HeadingDiagnostic, HeadingIndex};
use pagekit_runtime::Translate;
use pagekit_types::AnchorSource;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, TocDiagnosticViewModel, TocEntryViewModel,
    TocViewModel,
};

fn diagnostic(diagnostic: &HeadingDiagnostic) -> TocDiagnosticViewModel {
    match diagnostic {
        HeadingDiagnostic::MissingCustomId { title, anchor_id } => TocDiagnosticViewModel {
            kind: "missing_custom_id".to_string(),
            title: title.clone(),
            anchor_id: anchor_id.clone(),
        },
        HeadingDiagnostic::MalformedHeading { title, anchor_id } => TocDiagnosticViewModel {
            kind: "malformed_heading".to_string(),
            title: title.clone(),
            anchor_id: anchor_id.clone(),
        },
    }
}

pub fn present_toc(
    file: &str,
    index: &HeadingIndex,
    max_depth: u32,
    fragment: Option<&str>,
    catalog: &impl Translate,
) -> CommandResultViewModel<TocViewModel> {
    let entries: Vec<TocEntryViewModel> = index
        .entries
        .iter()
        .map(|heading| TocEntryViewModel {
            anchor_id: heading.anchor_id.clone(),
            href: heading.href(),
            display_title: heading.display_title.clone(),
            depth: heading.depth,
            nested: heading.nested,
            active: fragment.is_some_and(|f| heading.is_active(f)),
            custom_anchor: heading.anchor_source == AnchorSource::Custom,
        })
        .collect();

    let content = TocViewModel {
        file: file.to_string(),
        title: catalog.translate("toc-title"),
        empty_label: catalog.translate("toc-empty"),
        max_depth,
        fragment: fragment.map(str::to_string),
        entries,
        diagnostics: index.diagnostics.iter().map(diagnostic).collect(),
    };

    let mut result = CommandResultViewModel::new(content);

    if result.content.entries.is_empty() {
        return result.with_badge(StatusBadge::info(catalog.translate("toc-badge-empty")));
    }

    let count = |key: &str, n: usize| catalog.translate_with(key, &[("count", &n.to_string())]);
    let missing = index
        .diagnostics
        .iter()
        .filter(|d| matches!(d, HeadingDiagnostic::MissingCustomId { .. }))
        .count();
    let malformed = index.diagnostics.len() - missing;

    let mut label = count("toc-badge-indexed", result.content.entries.len());
    if missing > 0 {
        label = format!("{}, {}", label, count("toc-badge-missing-id", missing));
        result = result.with_suggestion(Guidance::new(catalog.translate("toc-tip-add-marker")));
    }
    if malformed > 0 {
        label = format!("{}, {}", label, count("toc-badge-malformed", malformed));
        result = result.with_suggestion(Guidance::new(catalog.translate("toc-tip-fix-malformed")));
    }

    let badge = if index.diagnostics.is_empty() {
        StatusBadge::success(label)
    } else {
        StatusBadge::warning(label)
    };
    result.with_badge(badge)
}
