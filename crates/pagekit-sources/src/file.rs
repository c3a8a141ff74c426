use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::traits::EventSource;

/// Reads JSON documents from a local directory
///
/// `fetch_json("calendarEvents")` reads `<root>/calendarEvents.json`. Paths
/// that already carry an extension are used as-is.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, path: &str) -> PathBuf {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut resolved = self.root.join(relative);
        if resolved.extension().is_none() {
            resolved.set_extension("json");
        }
        resolved
    }
}

impl EventSource for FileSource {
    fn id(&self) -> &'static str {
        "file"
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn fetch_json(&self, path: &str) -> Result<Value> {
        let file = self.path_for(path);
        tracing::debug!(path = %file.display(), "reading JSON");

        let content = tokio::fs::read_to_string(&file).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::TempDir;

    #[test]
    fn test_path_for_appends_json_extension() {
        let source = FileSource::new("/srv/site");
        assert_eq!(
            source.path_for("calendarEvents"),
            PathBuf::from("/srv/site/calendarEvents.json")
        );
        assert_eq!(
            source.path_for("/feeds/events.json"),
            PathBuf::from("/srv/site/feeds/events.json")
        );
    }

    #[tokio::test]
    async fn test_fetch_json_reads_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(
            temp_dir.path().join("calendarEvents.json"),
            r#"{"pastEvents": [], "futureEvents": []}"#,
        )?;

        let source = FileSource::new(temp_dir.path());
        let value = source.fetch_json("calendarEvents").await?;
        assert_eq!(value["pastEvents"], serde_json::json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_json_missing_file_is_io_error() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let source = FileSource::new(temp_dir.path());

        let err = source.fetch_json("calendarEvents").await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_json_invalid_json_is_json_error() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join("calendarEvents.json"), "{not json")?;

        let source = FileSource::new(temp_dir.path());
        let err = source.fetch_json("calendarEvents").await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        Ok(())
    }
}
