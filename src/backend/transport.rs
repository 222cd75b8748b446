use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::error::BackendError;
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl ApiMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiMethod::Get => "GET",
            ApiMethod::Post => "POST",
            ApiMethod::Patch => "PATCH",
            ApiMethod::Delete => "DELETE",
        }
    }
}

/// One remote call: a table path like `courses` or a procedure path like
/// `rpc/authenticate_user`, plus query parameters and an optional JSON body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: ApiMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: ApiMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// The seam between the query layer and the wire. The HTTP implementation
/// talks to the hosted backend; tests swap in an in-memory one.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<Value, BackendError>;
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl HttpTransport {
    pub fn new(config: &AppConfig) -> Result<Self, BackendError> {
        url::Url::parse(&config.backend_url)
            .map_err(|_| BackendError::InvalidUrl(config.backend_url.clone()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| BackendError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        })
    }

    fn decode_api_error(status: u16, body: &str) -> BackendError {
        // PostgREST error bodies carry {message, code, details, hint}
        if let Ok(parsed) = serde_json::from_str::<Value>(body) {
            if let Some(message) = parsed.get("message").and_then(Value::as_str) {
                let code = parsed
                    .get("code")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                return BackendError::api(message, code);
            }
        }
        BackendError::api(format!("Backend error {}: {}", status, body), None)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value, BackendError> {
        let url = format!("{}/rest/v1/{}", self.base_url, request.path);
        debug!("{} {}", request.method.as_str(), request.path);

        let mut builder = match request.method {
            ApiMethod::Get => self.client.get(&url),
            ApiMethod::Post => self.client.post(&url),
            ApiMethod::Patch => self.client.patch(&url),
            ApiMethod::Delete => self.client.delete(&url),
        };

        builder = builder
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Prefer", "return=representation")
            .query(&request.query);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| BackendError::Http(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::decode_api_error(status.as_u16(), &text));
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| BackendError::Decode(e.to_string()))
    }
}
