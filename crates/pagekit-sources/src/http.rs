use serde_json::Value;

use crate::traits::EventSource;
use crate::{Error, Result};

/// Fetches JSON documents over HTTP(S) relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL with exactly one slash between them
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl EventSource for HttpSource {
    fn id(&self) -> &'static str {
        "http"
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }

    async fn fetch_json(&self, path: &str) -> Result<Value> {
        let url = self.url_for(path);
        tracing::debug!(%url, "fetching JSON");

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Status {
                code: response.status().as_u16(),
                url,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
