use serde_json::Value;

use crate::traits::EventSource;
use crate::{Error, FileSource, HttpSource, Result};

/// Source selected at runtime from a configured endpoint
#[derive(Debug, Clone)]
pub enum AnySource {
    Http(HttpSource),
    File(FileSource),
}

/// Pick a source for an endpoint string
///
/// `http://` and `https://` endpoints are fetched over the network; anything
/// else is treated as a local directory of JSON documents.
pub fn source_from_endpoint(endpoint: &str) -> Result<AnySource> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(Error::Endpoint("no events endpoint configured".to_string()));
    }

    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(AnySource::Http(HttpSource::new(endpoint)))
    } else {
        let path = endpoint.strip_prefix("file://").unwrap_or(endpoint);
        Ok(AnySource::File(FileSource::new(path)))
    }
}

impl EventSource for AnySource {
    fn id(&self) -> &'static str {
        match self {
            AnySource::Http(source) => source.id(),
            AnySource::File(source) => source.id(),
        }
    }

    fn describe(&self) -> String {
        match self {
            AnySource::Http(source) => source.describe(),
            AnySource::File(source) => source.describe(),
        }
    }

    async fn fetch_json(&self, path: &str) -> Result<Value> {
        match self {
            AnySource::Http(source) => source.fetch_json(path).await,
            AnySource::File(source) => source.fetch_json(path).await,
        }
    }
}
