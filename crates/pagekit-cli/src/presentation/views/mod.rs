// Views turn view models into text. They own layout, density and date
// formatting; the data itself is fixed by the presenters.

pub mod config;
pub mod events;
pub mod guidance;
pub mod toc;

pub use events::EventsPanelView;
pub use toc::TocView;
