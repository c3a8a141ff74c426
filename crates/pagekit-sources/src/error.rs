use std::fmt;

/// Result type for pagekit-sources operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while fetching a JSON document
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// JSON parsing failed
    Json(serde_json::Error),

    /// Transport-level HTTP failure
    Http(reqwest::Error),

    /// Endpoint answered with a non-success status
    Status { code: u16, url: String },

    /// Endpoint configuration is unusable
    Endpoint(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Status { code, url } => {
                write!(f, "Request to {} failed with status {}", url, code)
            }
            Error::Endpoint(msg) => write!(f, "Endpoint error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Status { .. } | Error::Endpoint(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}
