use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::config::{
    resolve_api_key, ClientConfig, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT,
};
use crate::errors::Result;
use crate::models::HealthResponse;
use crate::resources::{Flashcards, Journals, PracticeProblems, Video};
use crate::transport::Transport;

/// Builder for constructing a [`Client`] with custom configuration.
///
/// # Example
///
/// ```no_run
/// use opennote::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> opennote::Result<()> {
/// let client = ClientBuilder::new()
///     .api_key("sk-on-abc123")
///     .base_url("https://staging.example.com")
///     .max_retries(5)
///     .timeout(Duration::from_secs(120))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    max_retries: u32,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the base URL (defaults to `https://api-video.opennote.me`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the retry budget exposed to callers (defaults to 3).
    ///
    /// The client does not retry by itself; see [`ClientConfig::max_retries`].
    pub fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    /// Set the per-request timeout (defaults to 30 seconds).
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = d;
        self
    }

    /// Build the [`Client`].
    ///
    /// The API key is resolved in
    /// [`ApiKeySource::RESOLUTION_ORDER`](crate::ApiKeySource::RESOLUTION_ORDER):
    /// the value given to [`api_key`](Self::api_key), then the
    /// `OPENNOTE_API_KEY` environment variable. Empty values are skipped.
    ///
    /// Returns [`OpennoteError::MissingApiKey`](crate::OpennoteError::MissingApiKey)
    /// if neither yields a key. No network access happens here.
    pub fn build(self) -> Result<Client> {
        let (api_key, source) = resolve_api_key(self.api_key)?;
        let config = ClientConfig::new(
            api_key,
            source,
            &self.base_url,
            self.timeout,
            self.max_retries,
        );

        tracing::debug!(
            base_url = config.base_url(),
            api_key_source = ?source,
            timeout = ?config.timeout(),
            "building Opennote client"
        );

        Ok(Client::from_transport(Arc::new(Transport::new(config)?)))
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The Opennote API client.
///
/// Cheap to clone; clones share the same immutable configuration and HTTP
/// connection pool. Use [`Client::new`] for quick construction or
/// [`ClientBuilder`] for full control.
///
/// # Example
///
/// ```no_run
/// use opennote::{Client, FlashcardCreateRequest};
///
/// # async fn example() -> opennote::Result<()> {
/// let client = Client::new("sk-on-abc123")?;
///
/// let set = client
///     .flashcards()
///     .create(FlashcardCreateRequest::new("The Silk Road"))
///     .await?;
/// for card in &set.flashcards {
///     println!("{} -> {}", card.front, card.back);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Arc<Transport>,
    video: Video,
    journals: Journals,
    flashcards: Flashcards,
    practice: PracticeProblems,
}

impl Client {
    /// Create a client with the given API key and default settings.
    ///
    /// An empty key falls back to `OPENNOTE_API_KEY`, like [`ClientBuilder::build`].
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build()
    }

    /// Create a client from `OPENNOTE_API_KEY` with default settings.
    pub fn from_env() -> Result<Self> {
        ClientBuilder::new().build()
    }

    fn from_transport(transport: Arc<Transport>) -> Self {
        Self {
            video: Video::new(Arc::clone(&transport)),
            journals: Journals::new(Arc::clone(&transport)),
            flashcards: Flashcards::new(Arc::clone(&transport)),
            practice: PracticeProblems::new(Arc::clone(&transport)),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    pub fn video(&self) -> &Video {
        &self.video
    }

    pub fn journals(&self) -> &Journals {
        &self.journals
    }

    pub fn flashcards(&self) -> &Flashcards {
        &self.flashcards
    }

    pub fn practice(&self) -> &PracticeProblems {
        &self.practice
    }

    /// GET /v1/health.
    pub async fn health(&self) -> Result<HealthResponse> {
        self.transport.get("/v1/health").await
    }

    /// Send one authenticated JSON request to `path` (relative to the base
    /// URL) and decode the response as `T`.
    ///
    /// Exactly one request is made. Statuses of 400 and above become the matching
    /// [`OpennoteError`](crate::OpennoteError) kind.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        self.request_with_headers(method, path, body, HeaderMap::new())
            .await
    }

    /// Like [`request`](Self::request), with extra headers merged over the
    /// defaults (`Authorization`, `Content-Type`).
    pub async fn request_with_headers<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        headers: HeaderMap,
    ) -> Result<T> {
        self.transport
            .execute(method, path, body.as_ref(), headers)
            .await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", self.config())
            .finish_non_exhaustive()
    }
}
