// Engine module - Core processing logic (anchors, depth filtering, feed mapping)
// This layer sits between raw inputs (types) and CLI presentation

pub mod events;
pub mod headings;
pub mod markdown;
pub mod slug;

pub use events::{feed_from_payload, feed_from_value};
pub use headings::{
    DEFAULT_MAX_DEPTH, HeadingDiagnostic, HeadingIndex, index_headings, parse_custom_id,
    resolve_heading, resolve_headings,
};
pub use markdown::headings_from_markdown;
pub use slug::slugify;
