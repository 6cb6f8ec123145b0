use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use super::http_client::{HttpClient, HttpClientTrait};
use crate::config::ApiConfig;
use crate::domain::{ApiResponse, DomainError, SignUpApi, UserRecord};

pub const DEFAULT_SIGNUP_PATH: &str = "/users/signup";

/// Client for the sign-up endpoint
///
/// Serializes a [`UserRecord`] as `{username, password, email, roles}` and
/// returns the response untouched, whatever its status.
#[derive(Debug)]
pub struct SignUpClient<C: HttpClientTrait = HttpClient> {
    client: C,
    base_url: String,
    signup_path: String,
}

impl SignUpClient<HttpClient> {
    /// Create a client for the endpoint described by the configuration
    ///
    /// The base URL must be an absolute `http` or `https` URL.
    pub fn from_config(config: &ApiConfig) -> Result<Self, DomainError> {
        parse_base_url(&config.base_url)?;

        Ok(Self::with_path(
            HttpClient::new(),
            &config.base_url,
            &config.signup_path,
        ))
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, DomainError> {
    let url = Url::parse(base_url).map_err(|e| {
        DomainError::configuration(format!("Invalid base URL '{}': {}", base_url, e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(DomainError::configuration(format!(
            "Unsupported scheme '{}' in base URL '{}'",
            scheme, base_url
        ))),
    }
}

impl<C: HttpClientTrait> SignUpClient<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        Self::with_path(client, base_url, DEFAULT_SIGNUP_PATH)
    }

    pub fn with_path(
        client: C,
        base_url: impl Into<String>,
        signup_path: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let signup_path = signup_path.into();
        let signup_path = if signup_path.starts_with('/') {
            signup_path
        } else {
            format!("/{}", signup_path)
        };

        Self {
            client,
            base_url,
            signup_path,
        }
    }

    pub fn signup_url(&self) -> String {
        format!("{}{}", self.base_url, self.signup_path)
    }

    fn build_request(&self, user: &UserRecord) -> Result<serde_json::Value, DomainError> {
        serde_json::to_value(user).map_err(|e| {
            DomainError::serialization(format!("Failed to serialize user record: {}", e))
        })
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Content-Type", "application/json"),
            ("Accept", "application/json"),
        ]
    }
}

#[async_trait]
impl<C: HttpClientTrait> SignUpApi for SignUpClient<C> {
    async fn sign_up(&self, user: &UserRecord) -> Result<ApiResponse, DomainError> {
        let url = self.signup_url();
        let body = self.build_request(user)?;

        debug!("Sending sign-up request for '{}' to {}", user.username(), url);

        let response = self.client.post_json(&url, self.headers(), &body).await?;

        debug!(
            "Sign-up for '{}' answered with HTTP {}",
            user.username(),
            response.status()
        );

        Ok(response)
    }
}
