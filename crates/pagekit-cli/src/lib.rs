// NOTE: pagekit Architecture
//
// Two independent features share one CLI:
// - `events`: fetch the community calendar once, settle into a tri-state
//   (loading / error / ready) and render the panel. A failed fetch is a
//   rendered state, not a command failure.
// - `toc`: extract headings from a markdown page, resolve `{#id}` anchors
//   and render the in-page index for the current fragment.
//
// Layering: types -> sources -> engine -> runtime -> cli. The CLI owns
// presentation only; all domain decisions live in the library crates.

mod args;
mod commands;
mod handlers;
pub mod presentation;

pub use args::Cli;
pub use commands::run;
