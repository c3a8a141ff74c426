pub mod config;
pub mod error;
pub mod i18n;
pub mod loader;
pub mod panel;

pub use config::{Config, EventsConfig, TocConfig, resolve_data_dir};
pub use error::{Error, Result};
pub use i18n::{Catalog, Translate, detect_language, normalize_lang};
pub use loader::load_events;
pub use panel::EventsPanel;
