//! Sign-up API trait

use async_trait::async_trait;

use super::response::ApiResponse;
use crate::domain::user::UserRecord;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// The sign-up operation over the HTTP boundary
///
/// Implementations send exactly one request per call and return the response
/// whatever its status. Only transport failures are errors.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SignUpApi: Send + Sync {
    /// Submit a user record to the sign-up endpoint
    async fn sign_up(&self, user: &UserRecord) -> Result<ApiResponse, DomainError>;
}
