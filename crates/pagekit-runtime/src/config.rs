use crate::{Error, Result};
use pagekit_engine::DEFAULT_MAX_DEPTH;
use pagekit_sources::{AnySource, source_from_endpoint};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PAGEKIT_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.pagekit (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("PAGEKIT_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("pagekit"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".pagekit"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Base URL of the functions endpoint, or a directory of JSON documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Community chat invite shown next to the "join" label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_url: Option<String>,
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Display language; detected from the environment when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default)]
    pub events: EventsConfig,

    #[serde(default)]
    pub toc: TocConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Source for the configured events endpoint
    pub fn events_source(&self) -> Result<AnySource> {
        let endpoint = self.events.endpoint.as_deref().ok_or_else(|| {
            Error::Config("events.endpoint is not set (use --endpoint or config.toml)".to_string())
        })?;
        Ok(source_from_endpoint(endpoint)?)
    }

    /// Configured language, or the one detected from the environment
    pub fn language(&self) -> String {
        match &self.language {
            Some(lang) => crate::i18n::normalize_lang(lang),
            None => crate::i18n::detect_language(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.toc.max_depth, 1);
        assert!(config.events.endpoint.is_none());
        assert!(config.language.is_none());
    }

    #[test]
    fn test_config_load_full_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(
            &config_path,
            r#"language = "de"

[events]
endpoint = "https://example.org/functions"
discord_url = "https://discord.example/invite"

[toc]
max_depth = 2
"#,
        )?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(
            loaded,
            Config {
                language: Some("de".to_string()),
                events: EventsConfig {
                    endpoint: Some("https://example.org/functions".to_string()),
                    discord_url: Some("https://discord.example/invite".to_string()),
                },
                toc: TocConfig { max_depth: 2 },
            }
        );

        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "[events]\nendpoint = \"./feeds\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.events.endpoint.as_deref(), Some("./feeds"));
        assert_eq!(loaded.toc.max_depth, 1);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "[toc]\nmax_depth = \"deep\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_events_source_requires_endpoint() {
        let err = Config::default().events_source().unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let config = Config {
            events: EventsConfig {
                endpoint: Some("https://example.org/functions".to_string()),
                ..EventsConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(config.events_source(), Ok(AnySource::Http(_))));
    }

    #[test]
    fn test_explicit_data_dir_wins() -> anyhow::Result<()> {
        let dir = resolve_data_dir(Some("/tmp/pagekit-data"))?;
        assert_eq!(dir, PathBuf::from("/tmp/pagekit-data"));
        Ok(())
    }

    #[test]
    fn test_configured_language_is_normalized() {
        let config = Config {
            language: Some("pt_BR.UTF-8".to_string()),
            ..Config::default()
        };
        assert_eq!(config.language(), "pt");
    }
}
