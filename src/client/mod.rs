//! The request gateway.
//!
//! `ApiClient` turns a logical API call into an HTTP request and a typed
//! result, hiding transport and envelope details from every caller. It owns
//! URL construction (base + root prefix + query parameters), the uniform
//! success/failure contract, and envelope unwrapping.
//!
//! Every call is an independent future over a shared connection pool;
//! concurrent fan-outs do not interfere and each call fails in isolation.
//! Failures are reported exactly once to the injected [`FailureObserver`]
//! and then propagated; the gateway never swallows an error.

pub mod error;
pub mod observer;
pub mod options;

pub use error::ApiError;
pub use observer::{FailureObserver, SilentObserver, StderrObserver};
pub use options::{CacheHints, FetchOptions, QueryValue};

use crate::config::get_config;
use crate::models::Envelope;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Root prefix every API path lives under.
pub const API_ROOT_PREFIX: &str = "/api";

/// Asynchronous client for the Lenjoy API.
///
/// Cheap to clone: clones share the underlying connection pool and failure
/// observer.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    observer: Arc<dyn FailureObserver>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl ApiClient {
    /// Creates a client from the global configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the configured base URL does not
    /// parse, or `ApiError::BuildError` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, ApiError> {
        let config = get_config();
        Self::with_base_url(&config.base_url)
    }

    /// Creates a client against an explicit base URL.
    ///
    /// The base URL names the server only (scheme, host, port); the `/api`
    /// root prefix is handled per-path by [`ApiClient::build_url`].
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `http://localhost:8000`
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        let config = get_config();
        let base_url = Url::parse(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .build()
            .map_err(|e| ApiError::BuildError(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            observer: Arc::new(StderrObserver),
        })
    }

    /// Replaces the failure observer.
    ///
    /// The default observer writes one line per failure to stderr.
    pub fn observer(mut self, observer: Arc<dyn FailureObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the absolute URL for an API path.
    ///
    /// The `/api` root prefix is prepended exactly once: a path already
    /// carrying it is used as-is, so the operation is idempotent. Query
    /// parameters with absent or empty values are omitted entirely; the
    /// remaining parameters are stringified and appended in insertion
    /// order, which keeps the URL deterministic for a given call.
    ///
    /// # Arguments
    ///
    /// * `path` - API path, with or without the `/api` prefix
    /// * `query` - query parameters as `(key, value)` pairs
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the path cannot be joined onto the
    /// base URL.
    pub fn build_url(&self, path: &str, query: &[(String, QueryValue)]) -> Result<Url, ApiError> {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        let prefixed = if path.starts_with(API_ROOT_PREFIX) {
            path
        } else {
            format!("{}{}", API_ROOT_PREFIX, path)
        };

        let mut url = self.base_url.join(prefixed.trim_start_matches('/'))?;

        let rendered: Vec<(&str, String)> = query
            .iter()
            .filter_map(|(key, value)| value.render().map(|v| (key.as_str(), v)))
            .collect();
        if !rendered.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &rendered {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Performs an API call and returns the unwrapped `data` payload.
    ///
    /// Issues the HTTP request described by `options` (GET by default, with
    /// a `Content-Type: application/json` header that caller headers
    /// override), then parses the body as the uniform envelope and returns
    /// its `data` field typed as `T`.
    ///
    /// # Errors
    ///
    /// * `ApiError::RequestFailed` - transport failure or non-success status
    /// * `ApiError::MalformedResponse` - success status, but the body is not
    ///   an envelope carrying `data`
    ///
    /// Every failure is reported once to the observer before being returned;
    /// callers must not rely on the gateway suppressing errors.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        options: FetchOptions,
    ) -> Result<T, ApiError> {
        let url = match self.build_url(path, &options.query) {
            Ok(url) => url,
            Err(error) => return Err(self.fail(path, error)),
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &options.headers {
            let name = match HeaderName::try_from(name.as_str()) {
                Ok(name) => name,
                Err(e) => {
                    return Err(self.fail(url.as_str(), ApiError::BuildError(e.to_string())))
                }
            };
            let value = match HeaderValue::from_str(value) {
                Ok(value) => value,
                Err(e) => {
                    return Err(self.fail(url.as_str(), ApiError::BuildError(e.to_string())))
                }
            };
            headers.insert(name, value);
        }

        let mut request = self.http.request(options.method.clone(), url.clone());
        if let Some(body) = &options.body {
            request = request.json(body);
        }
        request = request.headers(headers);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let error = ApiError::RequestFailed {
                    url: url.to_string(),
                    status: e.status().map(|s| s.as_u16()),
                    detail: e.to_string(),
                };
                return Err(self.fail(url.as_str(), error));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let error = ApiError::RequestFailed {
                url: url.to_string(),
                status: Some(status.as_u16()),
                detail: status
                    .canonical_reason()
                    .unwrap_or("unrecognized status")
                    .to_string(),
            };
            return Err(self.fail(url.as_str(), error));
        }

        let envelope: Envelope<T> = match response.json().await {
            Ok(envelope) => envelope,
            Err(e) => {
                let error = ApiError::MalformedResponse {
                    url: url.to_string(),
                    detail: e.to_string(),
                };
                return Err(self.fail(url.as_str(), error));
            }
        };

        match envelope.data {
            Some(data) => Ok(data),
            None => {
                let detail = envelope
                    .error
                    .or(envelope.message)
                    .unwrap_or_else(|| "envelope missing data field".to_string());
                let error = ApiError::MalformedResponse {
                    url: url.to_string(),
                    detail,
                };
                Err(self.fail(url.as_str(), error))
            }
        }
    }

    /// GET shorthand with no options.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(path, FetchOptions::new()).await
    }

    /// Bodyless POST shorthand, used by the counter endpoints.
    pub async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(path, FetchOptions::new().method(reqwest::Method::POST))
            .await
    }

    /// Reports a failure exactly once, then hands the error back.
    fn fail(&self, url: &str, error: ApiError) -> ApiError {
        self.observer.on_failure(url, &error);
        error
    }
}
