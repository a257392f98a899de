use std::time::Duration;

use thiserror::Error;

/// All errors that can occur when using the Opennote SDK.
#[derive(Error, Debug)]
pub enum OpennoteError {
    /// The API key is invalid or lacks access (HTTP 401).
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// The account has no credits left for this operation (HTTP 402).
    #[error("insufficient credits: {message}")]
    InsufficientCredits { message: String },

    /// The service rejected the request body (HTTP 422).
    #[error("{message}")]
    Validation { message: String },

    /// The request was rate-limited (HTTP 429).
    #[error("rate limited (retry after {retry_after:?}s): {message}")]
    RateLimit {
        message: String,
        /// Seconds, from the `Retry-After` header.
        retry_after: Option<u64>,
    },

    /// Internal server error (HTTP 500).
    #[error("server error: {message}")]
    Server { message: String },

    /// Any other non-success status code.
    #[error("API error {status_code}: {message}")]
    Api { status_code: u16, message: String },

    /// A required argument was missing or empty. No request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No API key was passed and `OPENNOTE_API_KEY` is unset or empty.
    #[error(
        "API key is required. Pass it to ClientBuilder::api_key() \
         or set the OPENNOTE_API_KEY environment variable."
    )]
    MissingApiKey,

    /// A transport-level failure from reqwest (connection refused, reset, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// No response arrived within the configured request timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// A success (below 400) response body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A polling helper gave up before the job reached a terminal status.
    #[error("job still pending after {0:?}")]
    PollTimeout(Duration),
}

impl OpennoteError {
    /// HTTP status code for the status-derived kinds, `None` for local and
    /// transport errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::InsufficientCredits { .. } => Some(402),
            Self::Validation { .. } => Some(422),
            Self::RateLimit { .. } => Some(429),
            Self::Server { .. } => Some(500),
            Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// The parsed `Retry-After` value of a rate-limit error.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimit {
                retry_after: Some(secs),
                ..
            } => Some(Duration::from_secs(*secs)),
            _ => None,
        }
    }

    /// Whether repeating the same call may succeed.
    ///
    /// The client never retries on its own; this is for callers running their
    /// own loop bounded by [`ClientConfig::max_retries`](crate::ClientConfig::max_retries).
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimit { .. } | Self::Server { .. } | Self::Timeout(_) => true,
            Self::Transport(_) => true,
            Self::Api { status_code, .. } => *status_code >= 500,
            _ => false,
        }
    }
}

/// Map an HTTP status to its error kind.
///
/// `retry_after` is the raw `Retry-After` header and is only consulted for
/// 429; `body` is only consulted for 422. Returns `None` below 400.
pub(crate) fn error_for_status(
    status_code: u16,
    retry_after: Option<&str>,
    body: &[u8],
) -> Option<OpennoteError> {
    let err = match status_code {
        0..=399 => return None,
        401 => OpennoteError::Authentication {
            message: "Invalid API key or unauthorized access".into(),
        },
        402 => OpennoteError::InsufficientCredits {
            message: "Insufficient credits".into(),
        },
        422 => {
            let message = match serde_json::from_slice::<serde_json::Value>(body) {
                Ok(detail) => format!("Validation error: {detail}"),
                Err(_) => "Validation error".to_string(),
            };
            OpennoteError::Validation { message }
        }
        429 => OpennoteError::RateLimit {
            message: "Rate limit exceeded".into(),
            retry_after: retry_after.and_then(parse_retry_after),
        },
        500 => OpennoteError::Server {
            message: "Internal server error".into(),
        },
        _ => OpennoteError::Api {
            status_code,
            message: format!("API error: {status_code}"),
        },
    };
    Some(err)
}

/// Leading decimal digits of a `Retry-After` value, in seconds.
fn parse_retry_after(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().ok()
}

/// A convenience alias for `Result<T, OpennoteError>`.
pub type Result<T> = std::result::Result<T, OpennoteError>;
