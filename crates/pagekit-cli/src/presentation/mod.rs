//! # Presentation Layer
//!
//! Console output for the CLI, organized as MVVM.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!  (Controller)    (Converter)        (Data)           (Driver)   ==(Text)==> [ View ]
//! ```
//!
//! ## Rules
//!
//! ### 1. Raw data in view models
//! View models carry timestamps, links and flags, not formatted strings.
//! Dates are formatted by views through `formatters::time`. Translated
//! labels are content and live in the view model so JSON clients see the
//! same copy a reader does.
//!
//! ### 2. `ViewMode` is density, not shape
//! * **Minimal:** links or anchors only, one per line.
//! * **Compact:** one line per item.
//! * **Standard:** full panel (default).
//! * **Verbose:** everything, including sources and diagnostics.
//!
//! ### 3. JSON ignores `ViewMode`
//! `--format json` always dumps the complete `CommandResultViewModel`.
//!
//! ## Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Decide which state a section is in | `presenters/` |
//! | Decide *when* to show a tip | `presenters/` |
//! | Change indentation or hide an item in compact mode | `views/` |
//! | Format a date for a language | `formatters/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
