//! The Jira connection helper
//!
//! One [`JiraClient`] per Jira site: it owns the HTTP client with Basic
//! auth default headers and translates each call into a single request
//! against the `rest/api/3` root. Every call returns its own
//! [`ApiResponse`] value; no response state is carried on the client, so
//! clones can be used freely across tasks.

use std::time::Duration;

use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;

use jiratools_core::error::{error_messages, ApiError};

use crate::config::JiraConfig;

/// Client for the Jira REST API.
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
    auth_header: HeaderValue,
    timeout: Duration,
}

/// Outcome of one successful API call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl JiraClient {
    /// Build a client from resolved connection settings.
    pub fn new(config: &JiraConfig) -> Result<Self, ApiError> {
        let encoded = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", config.username, config.api_token));
        let auth_header = HeaderValue::from_str(&format!("Basic {encoded}"))
            .map_err(|e| ApiError::Transport(format!("invalid auth header: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_header.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let timeout = Duration::from_secs(config.timeout_secs);
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header,
            timeout,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/rest/api/3/{}", self.base_url, path)
    }

    /// GET a resource path, passing any parameters as a query string.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<ApiResponse, ApiError> {
        let request = self.http.get(self.url(path)).query(query);
        self.dispatch(request).await
    }

    /// Send a request with a JSON body (POST/PUT/DELETE). A `Null` body
    /// is omitted entirely.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: &Value,
    ) -> Result<ApiResponse, ApiError> {
        let mut request = self.http.request(method, self.url(path));
        if !body.is_null() {
            request = request.json(body);
        }
        self.dispatch(request).await
    }

    /// POST a multipart form (attachment upload). Jira refuses these
    /// requests without the anti-XSRF header, and multipart sets its own
    /// Content-Type boundary, so this goes through a client without the
    /// JSON default headers.
    pub async fn send_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<ApiResponse, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers.insert(
            reqwest::header::HeaderName::from_static("x-atlassian-token"),
            HeaderValue::from_static("no-check"),
        );

        let upload = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build upload client: {e}")))?;

        let request = upload.post(self.url(path)).multipart(form);
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: reqwest::RequestBuilder) -> Result<ApiResponse, ApiError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        log::debug!("jira api returned {} ({} bytes)", status, raw.len());

        // A body that is not JSON is kept verbatim rather than rejected.
        let body: Value = serde_json::from_str(&raw).unwrap_or(Value::String(raw));

        if status.is_success() {
            Ok(ApiResponse {
                status: status.as_u16(),
                body,
            })
        } else {
            Err(ApiError::from_status(
                status.as_u16(),
                error_messages(&body),
            ))
        }
    }
}
