//! Sign-up endpoint client

mod client;
mod http_client;

pub use client::{SignUpClient, DEFAULT_SIGNUP_PATH};
pub use http_client::{HttpClient, HttpClientTrait};
