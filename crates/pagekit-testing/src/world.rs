//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Placing calendar feeds and documentation pages
//! - Writing config files and locale overrides
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use pagekit_testing::TestWorld;
///
/// let world = TestWorld::new().with_calendar_feed();
///
/// let result = world
///     .run(&["events", "--endpoint", world.feed_dir().to_str().unwrap()])
///     .unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    feed_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let data_dir = base_path.join(".pagekit");
        let feed_dir = base_path.join("functions");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        std::fs::create_dir_all(&feed_dir).expect("Failed to create feed dir");

        let mut env_vars = HashMap::new();
        // Pin the detected language so host locale never leaks into output
        env_vars.insert("PAGEKIT_LANG".to_string(), "en".to_string());

        Self {
            temp_dir,
            data_dir,
            feed_dir,
            env_vars,
        }
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the data directory path (.pagekit).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory served as a file endpoint (holds `calendarEvents.json`).
    pub fn feed_dir(&self) -> &Path {
        &self.feed_dir
    }

    /// Feed directory as a string, for `--endpoint`.
    pub fn endpoint(&self) -> String {
        self.feed_dir.display().to_string()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Place the sample calendar feed in the feed directory.
    pub fn with_calendar_feed(self) -> Self {
        self.with_feed(&fixtures::calendar_payload())
    }

    /// Place an arbitrary JSON document as the calendar feed.
    pub fn with_feed(self, payload: &Value) -> Self {
        fixtures::write_feed(&self.feed_dir, payload).expect("Failed to write feed");
        self
    }

    /// Write raw text as the calendar feed (for malformed payloads).
    pub fn with_raw_feed(self, content: &str) -> Self {
        std::fs::write(self.feed_dir.join("calendarEvents.json"), content)
            .expect("Failed to write feed");
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), content).expect("Failed to write config");
        self
    }

    /// Write a locale override file into `<data_dir>/locales`.
    pub fn with_locale(self, lang: &str, content: &str) -> Self {
        let locales_dir = self.data_dir.join("locales");
        std::fs::create_dir_all(&locales_dir).expect("Failed to create locales dir");
        std::fs::write(locales_dir.join(format!("{}.toml", lang)), content)
            .expect("Failed to write locale file");
        self
    }

    /// Write a markdown page relative to the temp root and return its path.
    pub fn write_page(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("pagekit")`).
    /// This method configures it with the appropriate data-dir, cwd, and env vars.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("PAGEKIT_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Example
    /// ```no_run
    /// # use pagekit_testing::TestWorld;
    /// let world = TestWorld::new();
    /// let result = world.run(&["config", "show"]).unwrap();
    /// assert!(result.success());
    /// ```
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("pagekit")
            .map_err(|e| anyhow::anyhow!("Failed to find pagekit binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
