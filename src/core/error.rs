use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum NewsError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The upstream body could not be decoded as JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The upstream endpoint does not exist.
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// The upstream provider throttled the request.
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned 429.
        url: String,
    },

    /// The upstream provider failed with a 5xx status.
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The upstream provider rejected our credentials.
    #[error("Unauthorized at {url}: check the API key")]
    Unauthorized {
        /// The URL that returned 401 or 403.
        url: String,
    },

    /// The user-supplied crypto input was rejected.
    #[error("invalid crypto input: {0}")]
    InvalidSymbol(String),

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The client was configured incorrectly (e.g. a required API key is missing).
    #[error("configuration error: {0}")]
    Config(String),
}

impl NewsError {
    /// Maps a non-success upstream status to the matching error variant.
    pub(crate) fn from_status(code: u16, url: impl Into<String>) -> Self {
        let url = url.into();
        match code {
            401 | 403 => NewsError::Unauthorized { url },
            404 => NewsError::NotFound { url },
            429 => NewsError::RateLimited { url },
            500..=599 => NewsError::ServerError { status: code, url },
            _ => NewsError::Status { status: code, url },
        }
    }

    /// True when the failure originated upstream rather than in the caller's input.
    pub fn is_upstream(&self) -> bool {
        !matches!(self, NewsError::InvalidSymbol(_) | NewsError::Config(_))
    }
}
