use thiserror::Error;

/// Boxed error produced by an [`HttpTransport`](crate::transport::HttpTransport).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by text recognition.
///
/// The `Display` text of each variant is what the host shows to the user.
#[derive(Error, Debug)]
pub enum OcrError {
    /// No API key was configured, or it was blank.
    #[error("{0}")]
    MissingCredential(String),

    /// The image data or an explicitly supplied model name was blank.
    #[error("{0}")]
    InvalidInput(String),

    /// The API answered successfully but `choices[0].message.content` was missing.
    #[error("Invalid API response format: {body}")]
    InvalidResponseFormat { body: String },

    /// The API answered with a non-success HTTP status.
    #[error("HTTP Request Error\nStatus: {status}\nMessage: {message}")]
    HttpRequestError { status: u16, message: String },

    /// The request body could not be encoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The transport itself failed (connection refused, timeout, TLS...).
    #[error("{source}")]
    TransportFailure {
        #[source]
        source: BoxError,
    },
}

impl OcrError {
    /// Wrap any transport error without altering its message.
    pub fn transport(err: impl Into<BoxError>) -> Self {
        OcrError::TransportFailure { source: err.into() }
    }

    /// HTTP status for [`OcrError::HttpRequestError`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            OcrError::HttpRequestError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OcrError {
    fn from(err: reqwest::Error) -> Self {
        OcrError::transport(err)
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, OcrError>;
