// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Source implementations
pub mod file;
pub mod http;

// Source selection from configuration
pub mod registry;

// Traits
pub use traits::{CALENDAR_EVENTS_PATH, EventSource};

// Sources
pub use file::FileSource;
pub use http::HttpSource;

// Registry
pub use registry::{AnySource, source_from_endpoint};

// Error types
pub use error::{Error, Result};
