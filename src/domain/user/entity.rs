//! User record and related types

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{
    validate_email, validate_password, validate_roles, validate_username, FieldErrors,
};
use crate::domain::DomainError;

/// Fields of a user record, named as on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserField {
    Username,
    Password,
    Email,
    Roles,
}

impl UserField {
    pub const ALL: [UserField; 4] = [
        UserField::Username,
        UserField::Password,
        UserField::Email,
        UserField::Roles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::Email => "email",
            Self::Roles => "roles",
        }
    }
}

impl std::fmt::Display for UserField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "Unknown user field '{}'. Expected one of: username, password, email, roles",
                    s
                ))
            })
    }
}

/// User record sent to the sign-up endpoint
///
/// Values are immutable; the `with_*` methods and [`UserRecord::corrupt`]
/// return a modified copy. Roles are kept as strings so records can carry
/// values outside the allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    username: String,
    password: String,
    email: String,
    roles: Vec<String>,
}

impl UserRecord {
    /// Create a new user record
    pub fn new<R, I>(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
        roles: I,
    ) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    // Getters

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    // Copy-on-write mutators

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_roles<R, I>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Replace one field with a canonical invalid value
    ///
    /// - username: `"abc"` (below minimum length)
    /// - password: `"123"` (below minimum length)
    /// - email: `"not-an-email"`
    /// - roles: empty
    pub fn corrupt(self, field: UserField) -> Self {
        match field {
            UserField::Username => self.with_username("abc"),
            UserField::Password => self.with_password("123"),
            UserField::Email => self.with_email("not-an-email"),
            UserField::Roles => self.with_roles(Vec::<String>::new()),
        }
    }

    /// Run every field validator, collecting one error per invalid field
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        let checks = [
            validate_username(&self.username),
            validate_password(&self.password),
            validate_email(&self.email),
            validate_roles(self.roles.as_slice()),
        ];

        for error in checks.into_iter().filter_map(Result::err) {
            errors.add(error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
