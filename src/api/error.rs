use std::fmt;

/// Errors surfaced by the health API client.
/// Nothing here is retried automatically; callers decide what to show.
#[derive(Debug)]
pub enum ApiError {
    /// Server answered with a non-2xx status.
    Http { status: u16 },
    /// Transport failure (DNS, connection refused, timeout, body read).
    Network(reqwest::Error),
    /// JSON could not be encoded or decoded.
    Parse(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status } => write!(f, "HTTP error! status: {status}"),
            ApiError::Network(e) => write!(f, "network error: {e}"),
            ApiError::Parse(e) => write!(f, "parse error: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http { .. } => None,
            ApiError::Network(e) => Some(e),
            ApiError::Parse(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e)
    }
}
