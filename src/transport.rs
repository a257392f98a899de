use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::errors::{error_for_status, OpennoteError, Result};

/// Authenticated JSON transport shared by the client and its resources.
///
/// Holds only read-only state. Every call issues exactly one request; there
/// is no retry loop here regardless of `max_retries`.
pub(crate) struct Transport {
    config: ClientConfig,
    auth: HeaderValue,
    http: reqwest::Client,
}

impl Transport {
    pub(crate) fn new(config: ClientConfig) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(|_| {
            OpennoteError::InvalidArgument(
                "API key contains characters that are not valid in an HTTP header".into(),
            )
        })?;
        auth.set_sensitive(true);

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, auth, http })
    }

    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute::<T, ()>(Method::GET, path, None, HeaderMap::new())
            .await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, Some(body), HeaderMap::new())
            .await
    }

    /// Send one request and decode the response.
    ///
    /// `extra_headers` are merged over the defaults; a caller-supplied
    /// header replaces the default of the same name.
    pub(crate) async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        extra_headers: HeaderMap,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.config.base_url, path);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.auth.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(extra_headers);

        tracing::debug!(%method, path, "sending request");

        let mut req = self.http.request(method.clone(), &url).headers(headers);
        if let Some(b) = body {
            req = req.json(b);
        }

        let response = req.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        tracing::debug!(%method, path, status, len = bytes.len(), "received response");

        // Anything below 400 is a success, including 1xx/3xx that reach us.
        let Some(err) = error_for_status(status, retry_after.as_deref(), &bytes) else {
            return serde_json::from_slice(&bytes).map_err(OpennoteError::Decode);
        };
        tracing::warn!(%method, path, status, error = %err, "request failed");
        Err(err)
    }

    fn transport_error(&self, e: reqwest::Error) -> OpennoteError {
        if e.is_timeout() {
            OpennoteError::Timeout(self.config.timeout)
        } else {
            OpennoteError::Transport(e)
        }
    }
}
