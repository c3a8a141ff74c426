use pagekit_types::{AnchorSource, HeadingNode, ResolvedHeading};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::slug::slugify;

/// Depth used when the caller does not configure one
pub const DEFAULT_MAX_DEPTH: u32 = 1;

/// Trailing `{#custom-id}` marker preceded by at least one character of text
static CUSTOM_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*\{#([A-Za-z0-9_-]+)\}\s*$").unwrap());

/// Non-fatal findings produced while resolving headings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeadingDiagnostic {
    /// No `{#id}` marker; the anchor was derived from the title
    MissingCustomId { title: String, anchor_id: String },
    /// A marker was present but no title text remained around it
    MalformedHeading { title: String, anchor_id: String },
}

/// Resolved index entries plus what went wrong along the way
#[derive(Debug, Clone, Default, Serialize)]
pub struct HeadingIndex {
    pub entries: Vec<ResolvedHeading>,
    pub diagnostics: Vec<HeadingDiagnostic>,
}

/// Split a title into its display text and custom id, if it carries one
///
/// Returns `None` when there is no trailing marker. The id is returned as
/// written; callers lowercase it.
pub fn parse_custom_id(title: &str) -> Option<(&str, &str)> {
    let caps = CUSTOM_ID_REGEX.captures(title)?;
    let text = caps.get(1)?.as_str();
    let id = caps.get(2)?.as_str();
    Some((text.trim(), id))
}

fn resolve_with_diagnostic(node: &HeadingNode) -> (ResolvedHeading, Option<HeadingDiagnostic>) {
    let nested = node.depth == 2;

    if let Some((text, id)) = parse_custom_id(&node.title) {
        if !text.is_empty() {
            let heading = ResolvedHeading {
                anchor_id: id.to_lowercase(),
                display_title: text.to_string(),
                depth: node.depth,
                nested,
                anchor_source: AnchorSource::Custom,
            };
            return (heading, None);
        }

        let anchor_id = slugify(&node.title);
        tracing::warn!(title = %node.title, %anchor_id, "malformed heading: no title text around custom ID");
        let heading = ResolvedHeading {
            anchor_id: anchor_id.clone(),
            display_title: node.title.trim().to_string(),
            depth: node.depth,
            nested,
            anchor_source: AnchorSource::Derived,
        };
        let diagnostic = HeadingDiagnostic::MalformedHeading {
            title: node.title.clone(),
            anchor_id,
        };
        return (heading, Some(diagnostic));
    }

    let anchor_id = slugify(&node.title);
    tracing::warn!(title = %node.title, %anchor_id, "missing custom ID on heading");
    let heading = ResolvedHeading {
        anchor_id: anchor_id.clone(),
        display_title: node.title.clone(),
        depth: node.depth,
        nested,
        anchor_source: AnchorSource::Derived,
    };
    let diagnostic = HeadingDiagnostic::MissingCustomId {
        title: node.title.clone(),
        anchor_id,
    };
    (heading, Some(diagnostic))
}

/// Resolve a single heading into its anchor and display title
pub fn resolve_heading(node: &HeadingNode) -> ResolvedHeading {
    resolve_with_diagnostic(node).0
}

/// Build the in-page index, keeping the diagnostics for the caller
///
/// `max_depth` of `None` or `0` falls back to [`DEFAULT_MAX_DEPTH`]. A
/// single-heading list is returned as-is regardless of depth.
pub fn index_headings(nodes: &[HeadingNode], max_depth: Option<u32>) -> HeadingIndex {
    let max_depth = max_depth
        .filter(|depth| *depth > 0)
        .unwrap_or(DEFAULT_MAX_DEPTH);

    let mut index = HeadingIndex::default();
    let sole_heading = nodes.len() == 1;

    for node in nodes {
        if !sole_heading && node.depth > max_depth {
            continue;
        }

        let (heading, diagnostic) = resolve_with_diagnostic(node);
        index.entries.push(heading);
        index.diagnostics.extend(diagnostic);
    }

    index
}

/// Resolve and depth-filter headings for the in-page index
pub fn resolve_headings(nodes: &[HeadingNode], max_depth: Option<u32>) -> Vec<ResolvedHeading> {
    index_headings(nodes, max_depth).entries
}
