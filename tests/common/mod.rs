//! Shared harness for the sign-up contract tests
//!
//! With `APP__API__BASE_URL` set, tests target that live service. Otherwise an
//! in-process wiremock server emulates the endpoint contract.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use serde_json::json;
use signup_contract::infrastructure::signup::DEFAULT_SIGNUP_PATH;
use signup_contract::{
    ApiResponse, AppConfig, HttpClient, SignUpApi, SignUpClient, UserRecord,
};
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub struct TestApi {
    pub client: SignUpClient<HttpClient>,
    _server: Option<MockServer>,
}

impl TestApi {
    pub async fn spawn() -> Self {
        if std::env::var("APP__API__BASE_URL").is_ok() {
            let config = AppConfig::load().expect("Failed to load configuration");

            return Self {
                client: SignUpClient::from_config(&config.api)
                    .expect("Configured base URL should be valid"),
                _server: None,
            };
        }

        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(DEFAULT_SIGNUP_PATH))
            .respond_with(SignUpStub::default())
            .mount(&server)
            .await;

        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client: SignUpClient::new(HttpClient::with_client(http), server.uri()),
            _server: Some(server),
        }
    }

    pub async fn sign_up(&self, user: &UserRecord) -> ApiResponse {
        self.client
            .sign_up(user)
            .await
            .expect("Failed to call the sign-up endpoint")
    }
}

/// Emulates the sign-up endpoint: field validation, then username uniqueness
#[derive(Debug, Default)]
pub struct SignUpStub {
    registered: Mutex<HashSet<String>>,
}

impl Respond for SignUpStub {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let user: UserRecord = match serde_json::from_slice(&request.body) {
            Ok(user) => user,
            Err(e) => {
                return ResponseTemplate::new(400)
                    .set_body_json(json!({"message": format!("Malformed JSON: {}", e)}));
            }
        };

        if let Err(errors) = user.validate() {
            return ResponseTemplate::new(400).set_body_json(errors.to_body());
        }

        let newly_registered = self
            .registered
            .lock()
            .unwrap()
            .insert(user.username().to_string());

        if !newly_registered {
            return ResponseTemplate::new(422)
                .set_body_json(json!({"message": "Username is already in use"}));
        }

        ResponseTemplate::new(201)
            .set_body_json(json!({"token": format!("stub.{}", Uuid::new_v4().simple())}))
    }
}
