use serde::{Deserialize, Serialize};

/// Heading as it appears in the page, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingNode {
    /// Heading text, possibly ending in a `{#custom-id}` marker
    pub title: String,

    /// Nesting level, 1 for top-level entries
    pub depth: u32,
}

impl HeadingNode {
    /// Create a heading node; depth is clamped to at least 1
    pub fn new(title: impl Into<String>, depth: u32) -> Self {
        Self {
            title: title.into(),
            depth: depth.max(1),
        }
    }
}

/// Where an anchor identifier came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSource {
    /// Author-supplied `{#id}` marker
    Custom,
    /// Slug derived from the title text
    Derived,
}

/// Heading ready for the index: anchor, display text and depth
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedHeading {
    pub anchor_id: String,
    pub display_title: String,
    pub depth: u32,
    /// Second-level entries are indented in the index
    pub nested: bool,
    pub anchor_source: AnchorSource,
}

impl ResolvedHeading {
    /// Link target for the entry (`#anchor`)
    pub fn href(&self) -> String {
        format!("#{}", self.anchor_id)
    }

    /// Whether this entry matches the current in-page fragment.
    ///
    /// Accepts the fragment with or without its leading `#`.
    pub fn is_active(&self, fragment: &str) -> bool {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        !fragment.is_empty() && fragment == self.anchor_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(anchor: &str) -> ResolvedHeading {
        ResolvedHeading {
            anchor_id: anchor.to_string(),
            display_title: "Setup".to_string(),
            depth: 1,
            nested: false,
            anchor_source: AnchorSource::Custom,
        }
    }

    #[test]
    fn test_depth_is_clamped() {
        assert_eq!(HeadingNode::new("Intro", 0).depth, 1);
        assert_eq!(HeadingNode::new("Intro", 3).depth, 3);
    }

    #[test]
    fn test_href() {
        assert_eq!(resolved("setup-guide").href(), "#setup-guide");
    }

    #[test]
    fn test_is_active_with_and_without_hash() {
        let heading = resolved("setup-guide");
        assert!(heading.is_active("#setup-guide"));
        assert!(heading.is_active("setup-guide"));
        assert!(!heading.is_active("#setup"));
        assert!(!heading.is_active(""));
        assert!(!heading.is_active("#"));
    }
}
