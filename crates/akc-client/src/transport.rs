//! Request transport.
//!
//! The facade never talks to reqwest directly; it hands an [`ApiRequest`] to
//! a [`Transport`] and interprets the [`ApiResponse`]. Production code uses
//! [`HttpTransport`], tests plug in an in-memory implementation.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::ClientResult;

/// Path suffix of the versioned API root.
const API_PREFIX: &str = "/api/v3";

/// HTTP method subset used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET.
    Get,
    /// POST.
    Post,
    /// PATCH.
    Patch,
    /// DELETE.
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A request relative to the API root.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path below the API root, always starting and ending with `/`.
    pub path: String,
    /// Query string pairs (unencoded).
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request without query or body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Adds query pairs.
    pub fn with_query(mut self, query: &[(&str, &str)]) -> Self {
        self.query
            .extend(query.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        self
    }

    /// Sets the JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A raw response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl ApiResponse {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and returns the raw response, whatever its status.
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse>;
}

/// reqwest-backed transport bound to one API root and token.
pub struct HttpTransport {
    client: reqwest::Client,
    api_root: String,
    token: String,
}

impl HttpTransport {
    /// Creates a transport for `base_url`, authenticating with `token`.
    pub fn new(base_url: &str, token: &str) -> ClientResult<Self> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            api_root: api_root(base_url),
            token: token.to_string(),
        })
    }

    /// Gets the API root requests are resolved against.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let url = format!("{}{}", self.api_root, request.path);

        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .bearer_auth(&self.token);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}

/// Normalizes a configured base URL into the versioned API root.
pub fn api_root(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.ends_with(API_PREFIX) {
        trimmed.to_string()
    } else {
        format!("{trimmed}{API_PREFIX}")
    }
}
