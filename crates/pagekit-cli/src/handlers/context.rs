use crate::args::OutputFormat;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::Result;
use pagekit_runtime::{Catalog, Config, normalize_lang};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Everything a handler needs besides its own arguments
pub struct HandlerContext {
    pub data_dir: PathBuf,
    pub config: Config,
    pub format: OutputFormat,
}

impl HandlerContext {
    pub fn new(data_dir: PathBuf, config: Config, format: OutputFormat) -> Self {
        Self {
            data_dir,
            config,
            format,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn locales_dir(&self) -> PathBuf {
        self.data_dir.join("locales")
    }

    /// Catalog for the `--lang` override, else the configured or detected language
    pub fn catalog(&self, lang: Option<&str>) -> Result<Catalog> {
        let language = match lang {
            Some(lang) => normalize_lang(lang),
            None => self.config.language(),
        };
        Ok(Catalog::load(&language, &self.locales_dir())?)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Render a view model in the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>, mode: ViewMode) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        ConsoleRenderer::new(self.format.into(), mode).render(view_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_runtime::Translate;
    use pagekit_testing::TestWorld;

    #[test]
    fn test_lang_flag_overrides_configured_language() -> Result<()> {
        let world = TestWorld::new();
        let config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        let ctx = HandlerContext::new(world.data_dir().to_path_buf(), config, OutputFormat::Plain);

        assert_eq!(ctx.catalog(None)?.language(), "fr");
        assert_eq!(ctx.catalog(Some("de-AT"))?.language(), "de");
        Ok(())
    }

    #[test]
    fn test_locale_overrides_are_read_from_data_dir() -> Result<()> {
        let world = TestWorld::new().with_locale("de", "toc-title = \"Auf dieser Seite\"\n");
        let ctx = HandlerContext::new(
            world.data_dir().to_path_buf(),
            Config::default(),
            OutputFormat::Json,
        );

        assert_eq!(ctx.catalog(Some("de"))?.translate("toc-title"), "Auf dieser Seite");
        assert_eq!(ctx.config_path(), world.data_dir().join("config.toml"));
        Ok(())
    }
}
