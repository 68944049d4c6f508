//! HTTP client for the NOC backend.
//!
//! The backend is a FastAPI application. Failures come back as a non-success
//! status with a `{"detail": ...}` body, which the envelope helpers turn into a
//! result-level error instead of a thrown one.

use std::time::Duration;

use reqwest::{header, Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{ApiError, ServiceResponse};
use crate::config::ApiConfig;

/// Thin wrapper around a configured `reqwest::Client` and the API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client with default timeouts for the given base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::build(base_url, Duration::from_secs(30), Duration::from_secs(10))
    }

    /// Create a client from the `[api]` config section.
    ///
    /// The bearer token is read from the environment variable named by
    /// `token_env`; an unset or empty variable means unauthenticated requests.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Self::build(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
            Duration::from_secs(config.connect_timeout_secs),
        )?;

        let token = std::env::var(&config.token_env).ok().filter(|t| !t.trim().is_empty());
        if token.is_none() {
            log::warn!("ApiClient: {} not set, sending unauthenticated requests", config.token_env);
        }

        Ok(match token {
            Some(token) => client.with_token(token),
            None => client,
        })
    }

    fn build(base_url: &str, timeout: Duration, connect_timeout: Duration) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL.
    ///
    /// Trailing slashes on `path` are kept since some backend routes require them.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(path)?;
        log::debug!("ApiClient: {} {}", method, url);

        let mut builder = self
            .http
            .request(method, url)
            .header(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<(u16, String), ApiError> {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }

    /// GET a JSON resource; any non-success status is an error.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path)?.query(query);
        let (status, body) = self.send(builder).await?;
        decode_strict(status, &body)
    }

    /// GET a resource and wrap the outcome in a [`ServiceResponse`].
    pub async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ServiceResponse<T>, ApiError> {
        let builder = self.request(Method::GET, path)?.query(query);
        let (status, body) = self.send(builder).await?;
        decode_envelope(status, &body)
    }

    /// POST a JSON body and wrap the outcome in a [`ServiceResponse`].
    pub async fn post_envelope<B, T>(&self, path: &str, payload: &B) -> Result<ServiceResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path)?.json(payload);
        let (status, body) = self.send(builder).await?;
        decode_envelope(status, &body)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, ApiError> {
    // Url::join drops the last segment unless the base ends with a slash
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };

    let url = Url::parse(&normalized).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ApiError::InvalidUrl(format!("unsupported scheme '{}' in {}", scheme, base_url))),
    }
}

/// Pull the `detail` field out of a FastAPI error body.
///
/// String details are returned verbatim; structured ones (validation errors)
/// are rendered as compact JSON.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn status_message(status: u16, body: &str) -> String {
    extract_detail(body).unwrap_or_else(|| {
        StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .map(|reason| format!("HTTP {} {}", status, reason))
            .unwrap_or_else(|| format!("HTTP {}", status))
    })
}

/// Decode a response where every failure is thrown.
pub fn decode_strict<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            message: status_message(status, body),
        });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a response into the service envelope.
///
/// * success status: the body is the payload (`data`); empty or `null` means no data
/// * error status with a `detail`: result-level `error`
/// * error status without a usable body: [`ApiError::Status`]
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<ServiceResponse<T>, ApiError> {
    if (200..300).contains(&status) {
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(ServiceResponse::empty());
        }
        let data = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        return Ok(ServiceResponse::ok(data));
    }

    match extract_detail(body) {
        Some(detail) => {
            log::debug!("ApiClient: HTTP {} with detail '{}'", status, detail);
            Ok(ServiceResponse::err(detail))
        }
        None => Err(ApiError::Status {
            status,
            message: status_message(status, body),
        }),
    }
}
