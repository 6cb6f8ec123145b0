//! User domain
//!
//! This module provides the user record submitted to the sign-up endpoint,
//! the role allow-list and the field validators shared by the generator and
//! the contract checks.

mod entity;
mod role;
mod validation;

pub use entity::{UserField, UserRecord};
pub use role::Role;
pub use validation::{
    validate_email, validate_password, validate_roles, validate_username, FieldErrors,
    UserValidationError, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
};
