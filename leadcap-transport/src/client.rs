//! The transport client: request execution and response classification.
//!
//! Classification ladder for every call, in order:
//! 1. network fault → failure result with the underlying message
//! 2. non-JSON content type → misroute (HTML) or bounded body echo
//! 3. JSON + error status → message from the body; 401 clears the credential
//! 4. JSON + success status → `data` field if present, else the whole body

use crate::error::{TransportError, TransportResult};
use crate::token::TokenStore;
use leadcap_types::ApiResult;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Maximum characters of a non-JSON body echoed into an error message.
pub const BODY_PREVIEW_LIMIT: usize = 200;

/// Configuration for a transport client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API, e.g. `https://app.example.com/api`.
    pub base_url: String,
}

impl ClientConfig {
    /// Creates a config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// In-memory view of the credential, lazily hydrated from the store.
#[derive(Debug, Default)]
struct TokenCache {
    hydrated: bool,
    token: Option<String>,
}

/// The single gateway between the application and the backend.
///
/// Cheap to share via `Arc`; all methods take `&self`.
pub struct TransportClient {
    http: reqwest::Client,
    base_url: Url,
    store: Arc<dyn TokenStore>,
    cache: RwLock<TokenCache>,
}

impl TransportClient {
    /// Creates a client over the given backend and credential store.
    pub fn new(config: ClientConfig, store: Arc<dyn TokenStore>) -> TransportResult<Self> {
        // A trailing slash makes Url::join treat the last path segment as a
        // directory instead of replacing it.
        let mut base = config.base_url.trim_end_matches('/').to_string();
        base.push('/');
        let base_url = Url::parse(&base).map_err(|e| TransportError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            store,
            cache: RwLock::new(TokenCache::default()),
        })
    }

    // ── Credential lifecycle ─────────────────────────────────────

    /// Returns the current bearer token, hydrating the in-memory cache
    /// from the persistent store on first access.
    pub async fn token(&self) -> Option<String> {
        {
            let cache = self.cache.read().await;
            if cache.hydrated {
                return cache.token.clone();
            }
        }

        let mut cache = self.cache.write().await;
        if !cache.hydrated {
            match self.store.load().await {
                Ok(token) => cache.token = token,
                Err(e) => {
                    // An unreadable slot is treated as logged out.
                    warn!("failed to hydrate token from store: {e}");
                    cache.token = None;
                }
            }
            cache.hydrated = true;
        }
        cache.token.clone()
    }

    /// Sets or clears the bearer token, updating the in-memory value and
    /// the persistent store together.
    pub async fn set_token(&self, token: Option<String>) -> TransportResult<()> {
        let mut cache = self.cache.write().await;
        match &token {
            Some(t) => self.store.save(t).await?,
            None => self.store.clear().await?,
        }
        cache.token = token;
        cache.hydrated = true;
        Ok(())
    }

    /// Credential clear driven by a 401 response. Best-effort: a store
    /// failure downgrades to a warning, the in-memory value is cleared
    /// regardless so the session reads as logged out.
    async fn clear_token_after_auth_failure(&self) {
        debug!("401 response; clearing stored credential");
        let mut cache = self.cache.write().await;
        cache.token = None;
        cache.hydrated = true;
        if let Err(e) = self.store.clear().await {
            warn!("failed to clear token from store after 401: {e}");
        }
    }

    // ── Request execution ────────────────────────────────────────

    /// Executes one call and classifies the outcome. Never panics and
    /// never returns `Err` for an in-flight fault: everything lands in
    /// the `ApiResult`.
    pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = match self.base_url.join(path.trim_start_matches('/')) {
            Ok(url) => url,
            Err(e) => return ApiResult::fail(format!("invalid request path {path:?}: {e}")),
        };

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.token().await {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("{method} {url} network failure: {e}");
                return ApiResult::fail(e.to_string());
            }
        };

        self.classify(response).await
    }

    /// Classifies a response per the ladder in the module docs.
    async fn classify<T: DeserializeOwned>(&self, response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        let json_content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(is_json_media_type)
            .unwrap_or(false);

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return ApiResult::fail(e.to_string()),
        };

        if !json_content_type {
            return classify_non_json(status, &text);
        }

        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(_) => return classify_non_json(status, &text),
        };

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                self.clear_token_after_auth_failure().await;
            }
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .or_else(|| body.get("message").and_then(Value::as_str))
                .unwrap_or("request failed")
                .to_string();
            return ApiResult::fail(message);
        }

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        let payload = match body.get("data") {
            Some(data) => data.clone(),
            None => body,
        };
        match serde_json::from_value(payload) {
            Ok(data) => ApiResult::Success { data, message },
            Err(e) => ApiResult::fail(format!("failed to decode response body: {e}")),
        }
    }

    // ── Convenience wrappers ─────────────────────────────────────

    /// GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    /// POST request with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// PUT request with a JSON body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// PATCH request with a JSON body.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// DELETE request.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request::<T, ()>(Method::DELETE, path, None).await
    }
}

/// Whether a Content-Type header declares a JSON media type.
fn is_json_media_type(content_type: &str) -> bool {
    let media = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    media == "application/json" || media.ends_with("+json")
}

/// Classification for bodies the JSON path can't handle. Misrouted
/// requests through a reverse proxy commonly come back as HTML error
/// pages; those get a distinct message from arbitrary non-JSON bodies.
fn classify_non_json<T>(status: StatusCode, text: &str) -> ApiResult<T> {
    if status.is_success() {
        return ApiResult::fail("unexpected non-JSON response from server");
    }
    if looks_like_html(text) {
        return ApiResult::fail(format!(
            "server returned an HTML error page (status {}); the request was likely misrouted",
            status.as_u16()
        ));
    }
    let preview: String = text.chars().take(BODY_PREVIEW_LIMIT).collect();
    ApiResult::fail(format!(
        "request failed with status {}: {}",
        status.as_u16(),
        preview
    ))
}

fn looks_like_html(text: &str) -> bool {
    text.trim_start().starts_with('<') || text.contains("<html")
}
