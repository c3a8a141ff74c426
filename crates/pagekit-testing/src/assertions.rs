//! Custom assertions for pagekit-specific validation.
//!
//! Provides high-level assertions that make tests more readable:
//! - Event section state and counts in JSON output
//! - Index anchor order
//! - Plain-text output checks via `predicates`

use anyhow::{Context, Result};
use predicates::prelude::*;
use serde_json::Value;

use crate::world::CliResult;

/// Assert the JSON status of an events section ("loading", "error", "ready").
pub fn assert_section_status(json: &Value, section: &str, expected: &str) -> Result<()> {
    let status = json["content"][section]["status"]
        .as_str()
        .with_context(|| format!("Expected 'content.{}.status' in JSON", section))?;

    if status != expected {
        anyhow::bail!("Section {} is {}, expected {}", section, status, expected);
    }

    Ok(())
}

/// Assert that an events section lists the expected number of events.
pub fn assert_event_count(json: &Value, section: &str, expected: usize) -> Result<()> {
    let events = json["content"][section]["events"]
        .as_array()
        .with_context(|| format!("Expected 'content.{}.events' array in JSON", section))?;

    if events.len() != expected {
        anyhow::bail!(
            "Expected {} events in {}, got {}",
            expected,
            section,
            events.len()
        );
    }

    Ok(())
}

/// Assert the anchors of the rendered index, in order.
pub fn assert_anchor_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let entries = json["content"]["entries"]
        .as_array()
        .context("Expected 'content.entries' array in JSON")?;

    let anchors: Vec<&str> = entries
        .iter()
        .filter_map(|entry| entry["anchor_id"].as_str())
        .collect();

    if anchors != expected {
        anyhow::bail!("Expected anchors {:?}, got {:?}", expected, anchors);
    }

    Ok(())
}

/// Assert that stdout contains `needle`.
pub fn assert_stdout_contains(result: &CliResult, needle: &str) -> Result<()> {
    if !predicate::str::contains(needle).eval(result.stdout()) {
        anyhow::bail!("stdout does not contain {:?}:\n{}", needle, result.stdout());
    }
    Ok(())
}

/// Assert that stdout does not contain `needle`.
pub fn assert_stdout_lacks(result: &CliResult, needle: &str) -> Result<()> {
    if predicate::str::contains(needle).eval(result.stdout()) {
        anyhow::bail!("stdout unexpectedly contains {:?}:\n{}", needle, result.stdout());
    }
    Ok(())
}
