//! Raw sign-up response value

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::DomainError;

/// Response of the sign-up endpoint, kept exactly as received
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Build a response with a JSON body and no headers
    pub fn from_json(status: StatusCode, body: &serde_json::Value) -> Self {
        Self::new(status, HeaderMap::new(), body.to_string())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parse the body into a typed value
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DomainError> {
        serde_json::from_str(&self.body).map_err(|e| {
            DomainError::serialization(format!("Failed to parse response body: {}", e))
        })
    }

    pub fn json_value(&self) -> Result<serde_json::Value, DomainError> {
        self.json()
    }

    /// Authentication token of a successful sign-up, if present and non-null
    pub fn token(&self) -> Option<String> {
        self.field_message("token")
    }

    /// Message stored under a top-level key of the body
    ///
    /// Strings are returned as-is and string arrays are joined with `"; "`.
    /// Missing keys, `null` and unparseable bodies yield `None`.
    pub fn field_message(&self, field: &str) -> Option<String> {
        let body = self.json_value().ok()?;

        match body.get(field)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => Some(
                items
                    .iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            other => Some(other.to_string()),
        }
    }

    /// Top-level `message` of the body (used by conflict responses)
    pub fn message(&self) -> Option<String> {
        self.field_message("message")
    }

    /// Split the response into success or failure on its status code
    pub fn error_for_status(self) -> Result<Self, StatusError> {
        if self.status.is_client_error() || self.status.is_server_error() {
            return Err(StatusError {
                status: self.status,
                response: self,
            });
        }

        Ok(self)
    }
}

/// A 4xx/5xx response, carrying the full response for inspection
#[derive(Debug, Clone, Error)]
#[error("Sign-up endpoint returned HTTP {status}")]
pub struct StatusError {
    status: StatusCode,
    response: ApiResponse,
}

impl StatusError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn response(&self) -> &ApiResponse {
        &self.response
    }
}
