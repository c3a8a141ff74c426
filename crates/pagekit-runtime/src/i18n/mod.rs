//! Translation capability for static labels.
//!
//! Labels are looked up by opaque key. The catalog starts from the bundled
//! English strings and overlays `<locales_dir>/<lang>.toml` when present, a
//! flat table of `key = "text"` pairs. Missing keys render as the key.

mod detect;
mod en;

pub use detect::{detect_language, normalize_lang};

use crate::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// "Translate string key" capability
pub trait Translate {
    fn translate(&self, key: &str) -> String;

    /// Active language code (e.g., "en")
    fn language(&self) -> &str;

    /// Translate `key` and fill its `{name}` placeholders
    fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.translate(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    language: String,
    strings: HashMap<String, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::english()
    }
}

impl Catalog {
    /// Bundled English strings only
    pub fn english() -> Self {
        let strings = en::STRINGS
            .iter()
            .map(|(key, text)| (key.to_string(), text.to_string()))
            .collect();

        Self {
            language: "en".to_string(),
            strings,
        }
    }

    /// English strings overlaid with the locale file for `language`, if any
    pub fn load(language: &str, locales_dir: &Path) -> Result<Self> {
        let language = normalize_lang(language);
        let mut catalog = Self::english();
        catalog.language = language.clone();

        let file = locales_dir.join(format!("{}.toml", language));
        if !file.exists() {
            if language != "en" {
                tracing::debug!(%language, path = %file.display(), "no locale file, using English labels");
            }
            return Ok(catalog);
        }

        let content = std::fs::read_to_string(&file)?;
        let overrides: HashMap<String, String> = toml::from_str(&content)
            .map_err(|e| Error::Catalog(format!("{}: {}", file.display(), e)))?;
        catalog.strings.extend(overrides);

        Ok(catalog)
    }

    pub fn with_string(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.strings.insert(key.into(), text.into());
        self
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        match self.strings.get(key) {
            Some(text) => text.clone(),
            None => {
                tracing::debug!(key, language = %self.language, "missing translation");
                key.to_string()
            }
        }
    }

    fn language(&self) -> &str {
        &self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_english_catalog() {
        let catalog = Catalog::english();
        assert_eq!(catalog.language(), "en");
        assert_eq!(catalog.translate("community-events-next-event"), "Next event");
    }

    #[test]
    fn test_unknown_key_renders_as_key() {
        let catalog = Catalog::english();
        assert_eq!(catalog.translate("no-such-key"), "no-such-key");
    }

    #[test]
    fn test_locale_file_overlays_english() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(
            temp_dir.path().join("de.toml"),
            "community-events-next-event = \"Nächstes Event\"\n",
        )?;

        let catalog = Catalog::load("de_DE.UTF-8", temp_dir.path())?;
        assert_eq!(catalog.language(), "de");
        assert_eq!(catalog.translate("community-events-next-event"), "Nächstes Event");
        // Keys absent from the locale file fall back to English
        assert_eq!(catalog.translate("loading"), "Loading...");
        Ok(())
    }

    #[test]
    fn test_translate_with_fills_placeholders() {
        let catalog = Catalog::english().with_string("greeting", "{count} calls, {count} links, {other}");
        assert_eq!(
            catalog.translate_with("greeting", &[("count", "3")]),
            "3 calls, 3 links, {other}"
        );
        assert_eq!(
            Catalog::english().translate_with("toc-badge-indexed", &[("count", "4")]),
            "4 heading(s) indexed"
        );
    }

    #[test]
    fn test_missing_locale_file_keeps_language() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let catalog = Catalog::load("fr", temp_dir.path())?;
        assert_eq!(catalog.language(), "fr");
        assert_eq!(catalog.translate("loading"), "Loading...");
        Ok(())
    }

    #[test]
    fn test_invalid_locale_file_is_catalog_error() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join("es.toml"), "loading = [1, 2]\n")?;

        let err = Catalog::load("es", temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
        Ok(())
    }
}
