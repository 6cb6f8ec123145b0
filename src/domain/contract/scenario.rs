//! Sign-up contract scenarios

use super::expectation::{
    Expectation, INVALID_ROLE_FRAGMENT, MALFORMED_EMAIL_FRAGMENT, MISSING_ROLES_FRAGMENT,
    PASSWORD_LENGTH_FRAGMENT, USERNAME_IN_USE_FRAGMENT, USERNAME_LENGTH_FRAGMENT,
};
use crate::domain::user::{UserField, UserRecord};

/// Role value outside the allow-list
pub const INVALID_ROLE: &str = "INVALID_ROLE";

/// One row of the sign-up contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    SuccessfulSignup,
    UsernameTooShort,
    PasswordTooShort,
    InvalidEmail,
    MissingRoles,
    InvalidRole,
    DuplicateUsername,
    ShortUsernameAndPassword,
}

impl Scenario {
    pub const ALL: [Scenario; 8] = [
        Scenario::SuccessfulSignup,
        Scenario::UsernameTooShort,
        Scenario::PasswordTooShort,
        Scenario::InvalidEmail,
        Scenario::MissingRoles,
        Scenario::InvalidRole,
        Scenario::DuplicateUsername,
        Scenario::ShortUsernameAndPassword,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SuccessfulSignup => "successful_signup",
            Self::UsernameTooShort => "username_too_short",
            Self::PasswordTooShort => "password_too_short",
            Self::InvalidEmail => "invalid_email",
            Self::MissingRoles => "missing_roles",
            Self::InvalidRole => "invalid_role",
            Self::DuplicateUsername => "duplicate_username",
            Self::ShortUsernameAndPassword => "short_username_and_password",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::SuccessfulSignup => "valid user is created and receives a token",
            Self::UsernameTooShort => "short username is rejected with a length message",
            Self::PasswordTooShort => "short password is rejected with a length message",
            Self::InvalidEmail => "malformed email is rejected",
            Self::MissingRoles => "empty role list is rejected",
            Self::InvalidRole => "role outside the allow-list is rejected",
            Self::DuplicateUsername => "second sign-up with the same username conflicts",
            Self::ShortUsernameAndPassword => "every invalid field is reported at once",
        }
    }

    /// Derive the submitted record from a valid baseline
    pub fn prepare(&self, baseline: UserRecord) -> UserRecord {
        match self {
            Self::SuccessfulSignup | Self::DuplicateUsername => baseline,
            Self::UsernameTooShort => baseline.corrupt(UserField::Username),
            Self::PasswordTooShort => baseline.corrupt(UserField::Password),
            Self::InvalidEmail => baseline.corrupt(UserField::Email),
            Self::MissingRoles => baseline.corrupt(UserField::Roles),
            Self::InvalidRole => baseline.with_roles([INVALID_ROLE]),
            Self::ShortUsernameAndPassword => baseline
                .corrupt(UserField::Username)
                .corrupt(UserField::Password),
        }
    }

    /// Whether the record must be registered once before the checked request
    pub fn requires_existing_account(&self) -> bool {
        matches!(self, Self::DuplicateUsername)
    }

    /// Expectation for the checked request
    pub fn expectation(&self) -> Expectation {
        match self {
            Self::SuccessfulSignup => Expectation::created_with_token(),
            Self::UsernameTooShort => {
                Expectation::field_error(UserField::Username, USERNAME_LENGTH_FRAGMENT)
            }
            Self::PasswordTooShort => {
                Expectation::field_error(UserField::Password, PASSWORD_LENGTH_FRAGMENT)
            }
            Self::InvalidEmail => {
                Expectation::field_error(UserField::Email, MALFORMED_EMAIL_FRAGMENT)
            }
            Self::MissingRoles => {
                Expectation::field_error(UserField::Roles, MISSING_ROLES_FRAGMENT)
            }
            Self::InvalidRole => Expectation::field_error(UserField::Roles, INVALID_ROLE_FRAGMENT),
            Self::DuplicateUsername => Expectation::conflict(USERNAME_IN_USE_FRAGMENT),
            Self::ShortUsernameAndPassword => {
                Expectation::field_errors(vec![UserField::Username, UserField::Password])
            }
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
