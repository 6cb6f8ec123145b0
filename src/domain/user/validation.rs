//! User validation utilities
//!
//! Error messages mirror the wording of the sign-up endpoint.

use std::collections::BTreeMap;

use thiserror::Error;
use validator::ValidateEmail;

use super::entity::UserField;
use super::role::Role;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("Minimum username length: {0} characters")]
    UsernameTooShort(usize),

    #[error("Minimum password length: {0} characters")]
    PasswordTooShort(usize),

    #[error("must be a well-formed email address")]
    MalformedEmail,

    #[error("Please pick at least one role")]
    NoRoles,

    #[error("'{0}' is an invalid role")]
    InvalidRole(String),
}

impl UserValidationError {
    /// The record field this error belongs to
    pub fn field(&self) -> UserField {
        match self {
            Self::UsernameTooShort(_) => UserField::Username,
            Self::PasswordTooShort(_) => UserField::Password,
            Self::MalformedEmail => UserField::Email,
            Self::NoRoles | Self::InvalidRole(_) => UserField::Roles,
        }
    }
}

pub const MIN_USERNAME_LENGTH: usize = 4;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a username
///
/// Rules:
/// - Minimum 4 characters
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(UserValidationError::UsernameTooShort(MIN_USERNAME_LENGTH));
    }

    Ok(())
}

/// Validate a password
///
/// Rules:
/// - Minimum 8 characters
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    Ok(())
}

/// Validate an email address against the HTML5 email grammar
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if !email.validate_email() {
        return Err(UserValidationError::MalformedEmail);
    }

    Ok(())
}

/// Validate a role list
///
/// Rules:
/// - At least one role
/// - Every role must be on the allow-list (first offender is reported)
pub fn validate_roles<S: AsRef<str>>(roles: &[S]) -> Result<(), UserValidationError> {
    if roles.is_empty() {
        return Err(UserValidationError::NoRoles);
    }

    for role in roles {
        role.as_ref().parse::<Role>()?;
    }

    Ok(())
}

/// Field-keyed validation errors, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<UserField, UserValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, keeping the first one reported for a field
    pub fn add(&mut self, error: UserValidationError) {
        self.0.entry(error.field()).or_insert(error);
    }

    pub fn get(&self, field: UserField) -> Option<&UserValidationError> {
        self.0.get(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = UserField> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Body shape of a 400 response: `{ "<field>": "<message>", ... }`
    pub fn to_body(&self) -> serde_json::Value {
        let body: serde_json::Map<String, serde_json::Value> = self
            .0
            .iter()
            .map(|(field, error)| (field.as_str().to_string(), error.to_string().into()))
            .collect();

        serde_json::Value::Object(body)
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error))
            .collect();

        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    // Username tests
    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("abcd").is_ok());
        assert!(validate_username("falcon_1a2b3c").is_ok());
    }

    #[test]
    fn test_username_too_short() {
        assert_eq!(
            validate_username("abc"),
            Err(UserValidationError::UsernameTooShort(4))
        );
        assert_eq!(
            validate_username(""),
            Err(UserValidationError::UsernameTooShort(4))
        );
    }

    #[test]
    fn test_username_length_counts_characters() {
        assert!(validate_username("ñañá").is_ok());
    }

    #[test]
    fn test_username_error_mentions_length() {
        let message = UserValidationError::UsernameTooShort(4).to_string();
        assert!(message.contains("username length"));
    }

    // Password tests
    #[test]
    fn test_valid_passwords() {
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("P@ssw0rd!").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(
            validate_password("123"),
            Err(UserValidationError::PasswordTooShort(8))
        );
        assert!(UserValidationError::PasswordTooShort(8)
            .to_string()
            .contains("password length"));
    }

    // Email tests
    #[test]
    fn test_valid_emails() {
        assert!(validate_email("maple.1a2b@example.com").is_ok());
        assert!(validate_email("user+tag@mail.example.org").is_ok());
    }

    #[test]
    fn test_malformed_emails() {
        assert_eq!(
            validate_email("not-an-email"),
            Err(UserValidationError::MalformedEmail)
        );
        assert!(validate_email("").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
    }

    // Role tests
    #[test]
    fn test_valid_roles() {
        assert!(validate_roles(&["ROLE_ADMIN"]).is_ok());
        assert!(validate_roles(&["ROLE_ADMIN", "ROLE_CLIENT"]).is_ok());
    }

    #[test]
    fn test_empty_roles() {
        let roles: Vec<String> = Vec::new();
        assert_eq!(validate_roles(roles.as_slice()), Err(UserValidationError::NoRoles));
        assert_eq!(
            UserValidationError::NoRoles.to_string(),
            "Please pick at least one role"
        );
    }

    #[test]
    fn test_invalid_role_reports_first_offender() {
        assert_eq!(
            validate_roles(&["ROLE_CLIENT", "INVALID_ROLE", "OTHER"]),
            Err(UserValidationError::InvalidRole("INVALID_ROLE".to_string()))
        );
        assert!(UserValidationError::InvalidRole("INVALID_ROLE".to_string())
            .to_string()
            .contains("invalid role"));
    }

    // Field errors
    #[test]
    fn test_field_errors_keep_first_error_per_field() {
        let mut errors = FieldErrors::new();
        errors.add(UserValidationError::NoRoles);
        errors.add(UserValidationError::InvalidRole("X".to_string()));

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(UserField::Roles),
            Some(&UserValidationError::NoRoles)
        );
    }

    #[test]
    fn test_field_errors_body_shape() {
        let mut errors = FieldErrors::new();
        errors.add(UserValidationError::UsernameTooShort(4));
        errors.add(UserValidationError::MalformedEmail);

        let body = errors.to_body();
        assert_eq!(body["username"], "Minimum username length: 4 characters");
        assert_eq!(body["email"], "must be a well-formed email address");
        assert!(body.get("password").is_none());
    }
}
