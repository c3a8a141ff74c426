//! Testing infrastructure for pagekit integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative test setup
//! - `sources`: In-memory event sources with scripted behavior
//! - `fixtures`: Sample calendar feeds and documentation pages
//! - `assertions`: Custom assertions for pagekit JSON output

pub mod assertions;
pub mod fixtures;
pub mod sources;
pub mod world;

pub use sources::{CountingSource, DelayedSource, FailingSource, StaticSource};
pub use world::{CliResult, TestWorld};
