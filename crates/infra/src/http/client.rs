//! Reqwest wrapper with bounded retry.
//!
//! Retries transport failures and 5xx responses with exponential backoff;
//! 4xx responses are returned to the caller untouched so the API layer can
//! surface the server's own status and body.

use std::time::Duration;

use fixwise_domain::{FixwiseError, HttpConfig};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::InfraError;

/// HTTP client with built-in retry and timeout support.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    base_backoff: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Client configured from the engine's `HttpConfig`.
    ///
    /// # Errors
    /// Returns `FixwiseError::Internal` if the underlying client cannot be
    /// constructed.
    pub fn from_config(config: &HttpConfig) -> Result<Self, FixwiseError> {
        Self::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .max_attempts(config.max_attempts)
            .build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the request with retry semantics.
    ///
    /// # Errors
    /// `FixwiseError::Network` once transport retries are exhausted;
    /// `FixwiseError::Internal` for requests that cannot be built or cloned
    /// for retry.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, FixwiseError> {
        let attempts = self.max_attempts.max(1);
        let mut last_error = None;

        for attempt in 1..=attempts {
            let cloned = builder.try_clone().ok_or_else(|| {
                FixwiseError::Internal(
                    "request body cannot be cloned; buffer the body to enable retries".into(),
                )
            })?;
            let request = cloned.build().map_err(|err| FixwiseError::from(InfraError::from(err)))?;

            let method = request.method().clone();
            let url = request.url().clone();
            debug!(attempt, %method, %url, "sending HTTP request");

            match self.client.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt, %method, %url, %status, "received HTTP response");

                    if status.is_server_error() && attempt < attempts {
                        self.sleep_with_backoff(attempt).await;
                        continue;
                    }
                    return Ok(response);
                }
                Err(err) => {
                    debug!(attempt, %method, %url, error = %err, "HTTP request failed");

                    if attempt < attempts && is_retryable(&err) {
                        self.sleep_with_backoff(attempt).await;
                        last_error = Some(err);
                        continue;
                    }
                    return Err(InfraError::from(err).into());
                }
            }
        }

        Err(last_error.map_or_else(
            || FixwiseError::Internal("http client exhausted retries without a result".into()),
            |err| InfraError::from(err).into(),
        ))
    }

    async fn sleep_with_backoff(&self, completed_attempt: usize) {
        let shift = completed_attempt.saturating_sub(1).min(8) as u32;
        let delay = self.base_backoff.saturating_mul(1 << shift);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

fn is_retryable(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_attempts: usize,
    base_backoff: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_attempts: 3,
            base_backoff: Duration::from_millis(200),
            user_agent: None,
        }
    }
}

impl HttpClientBuilder {
    /// Per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total number of attempts (initial try + retries).
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Initial backoff delay, doubled per retry.
    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    /// User-Agent header for all requests.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `FixwiseError::Internal` if reqwest rejects the configuration.
    pub fn build(self) -> Result<HttpClient, FixwiseError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        let client = builder.build().map_err(|err| FixwiseError::from(InfraError::from(err)))?;

        Ok(HttpClient {
            client,
            max_attempts: self.max_attempts.max(1),
            base_backoff: self.base_backoff,
        })
    }
}
