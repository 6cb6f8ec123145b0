//! Response expectations and contract violations

use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::signup::ApiResponse;
use crate::domain::user::UserField;

pub const USERNAME_LENGTH_FRAGMENT: &str = "username length";
pub const PASSWORD_LENGTH_FRAGMENT: &str = "password length";
pub const MALFORMED_EMAIL_FRAGMENT: &str = "must be a well-formed email address";
pub const MISSING_ROLES_FRAGMENT: &str = "Please pick at least one role";
pub const INVALID_ROLE_FRAGMENT: &str = "invalid role";
pub const USERNAME_IN_USE_FRAGMENT: &str = "Username is already in use";

/// Ways a response can break the sign-up contract
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("Expected HTTP {expected}, got {actual}: {body}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
        body: String,
    },

    #[error("Response body has no non-null token")]
    MissingToken,

    #[error("Response body has no '{field}' error")]
    MissingField { field: UserField },

    #[error("Response body has no top-level message")]
    MissingMessage,

    #[error("'{location}' does not mention \"{expected}\": {actual}")]
    MessageMismatch {
        location: String,
        expected: String,
        actual: String,
    },
}

/// What the body of a response must contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyCheck {
    /// Non-null `token`
    TokenPresent,
    /// Field-scoped error mentioning a fragment
    FieldContains {
        field: UserField,
        fragment: &'static str,
    },
    /// Field-scoped errors present for every listed field
    FieldsPresent(Vec<UserField>),
    /// Top-level `message` mentioning a fragment
    MessageContains { fragment: &'static str },
}

/// Expected status code plus body check for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    status: StatusCode,
    check: BodyCheck,
}

impl Expectation {
    pub fn new(status: StatusCode, check: BodyCheck) -> Self {
        Self { status, check }
    }

    /// 201 with a token
    pub fn created_with_token() -> Self {
        Self::new(StatusCode::CREATED, BodyCheck::TokenPresent)
    }

    /// 400 with a field-scoped message
    pub fn field_error(field: UserField, fragment: &'static str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            BodyCheck::FieldContains { field, fragment },
        )
    }

    /// 400 with an entry for each of the given fields
    pub fn field_errors(fields: Vec<UserField>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, BodyCheck::FieldsPresent(fields))
    }

    /// 422 with a top-level message; field keys are not consulted
    pub fn conflict(fragment: &'static str) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            BodyCheck::MessageContains { fragment },
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Check a response against this expectation
    pub fn verify(&self, response: &ApiResponse) -> Result<(), ContractViolation> {
        if response.status() != self.status {
            return Err(ContractViolation::UnexpectedStatus {
                expected: self.status,
                actual: response.status(),
                body: response.text().to_string(),
            });
        }

        match &self.check {
            BodyCheck::TokenPresent => response
                .token()
                .map(|_| ())
                .ok_or(ContractViolation::MissingToken),
            BodyCheck::FieldContains { field, fragment } => {
                let actual = response
                    .field_message(field.as_str())
                    .ok_or(ContractViolation::MissingField { field: *field })?;
                ensure_mentions(field.as_str(), fragment, actual)
            }
            BodyCheck::FieldsPresent(fields) => {
                for field in fields {
                    if response.field_message(field.as_str()).is_none() {
                        return Err(ContractViolation::MissingField { field: *field });
                    }
                }
                Ok(())
            }
            BodyCheck::MessageContains { fragment } => {
                let actual = response.message().ok_or(ContractViolation::MissingMessage)?;
                ensure_mentions("message", fragment, actual)
            }
        }
    }
}

fn ensure_mentions(
    location: &str,
    fragment: &str,
    actual: String,
) -> Result<(), ContractViolation> {
    if actual.contains(fragment) {
        return Ok(());
    }

    Err(ContractViolation::MessageMismatch {
        location: location.to_string(),
        expected: fragment.to_string(),
        actual,
    })
}
