//! Sign-up endpoint domain
//!
//! The response value returned by the client and the trait the client
//! implements.

mod api;
mod response;

pub use api::SignUpApi;
pub use response::{ApiResponse, StatusError};

#[cfg(test)]
pub use api::MockSignUpApi;
