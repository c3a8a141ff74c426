use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TocEntryViewModel {
    pub anchor_id: String,
    pub href: String,
    pub display_title: String,
    pub depth: u32,
    pub nested: bool,
    pub active: bool,
    /// Anchor came from an explicit `{#id}` marker
    pub custom_anchor: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TocDiagnosticViewModel {
    pub kind: String,
    pub title: String,
    pub anchor_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TocViewModel {
    pub file: String,
    pub title: String,
    pub empty_label: String,
    pub max_depth: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
    pub entries: Vec<TocEntryViewModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<TocDiagnosticViewModel>,
}
