pub mod common;
pub mod config;
pub mod events;
pub mod guidance;
pub mod result;
pub mod toc;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use config::ConfigViewModel;
pub use events::{
    EventEntryViewModel, EventSectionViewModel, EventsLabels, EventsPanelViewModel,
    SectionStatus,
};
pub use guidance::GuidanceViewModel;
pub use result::CommandResultViewModel;
pub use toc::{TocDiagnosticViewModel, TocEntryViewModel, TocViewModel};

use std::fmt;

/// Bridge from a view model to its text view for a given density
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
