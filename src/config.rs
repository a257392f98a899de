use std::fmt;
use std::time::Duration;

use crate::errors::{OpennoteError, Result};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api-video.opennote.me";
pub(crate) const DEFAULT_MAX_RETRIES: u32 = 3;
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_ENV_VAR: &str = "OPENNOTE_API_KEY";

/// Where an API key may come from, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeySource {
    /// Passed to [`ClientBuilder::api_key`](crate::ClientBuilder::api_key).
    Explicit,
    /// Read from [`API_KEY_ENV_VAR`].
    Environment,
}

impl ApiKeySource {
    pub const RESOLUTION_ORDER: [ApiKeySource; 2] =
        [ApiKeySource::Explicit, ApiKeySource::Environment];
}

/// Resolve the API key once, at construction.
///
/// Empty values are treated as absent, so an empty explicit key still falls
/// through to the environment.
pub(crate) fn resolve_api_key(explicit: Option<String>) -> Result<(String, ApiKeySource)> {
    for source in ApiKeySource::RESOLUTION_ORDER {
        let candidate = match source {
            ApiKeySource::Explicit => explicit.clone(),
            ApiKeySource::Environment => std::env::var(API_KEY_ENV_VAR).ok(),
        };
        if let Some(key) = candidate.filter(|k| !k.trim().is_empty()) {
            return Ok((key, source));
        }
    }
    Err(OpennoteError::MissingApiKey)
}

/// Immutable connection settings owned by a [`Client`](crate::Client).
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) api_key: String,
    pub(crate) api_key_source: ApiKeySource,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) max_retries: u32,
}

impl ClientConfig {
    pub(crate) fn new(
        api_key: String,
        api_key_source: ApiKeySource,
        base_url: &str,
        timeout: Duration,
        max_retries: u32,
    ) -> Self {
        Self {
            api_key,
            api_key_source,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            max_retries,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_key_source(&self) -> ApiKeySource {
        self.api_key_source
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Retry budget for callers that loop around retryable errors.
    ///
    /// The client itself never retries; every method issues exactly one
    /// request. See [`OpennoteError::is_retryable`].
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("api_key_source", &self.api_key_source)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}
