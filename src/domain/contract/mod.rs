//! Sign-up contract catalogue
//!
//! Each scenario names one row of the endpoint contract: how to derive the
//! submitted record from a valid baseline and what the response must look
//! like.

mod expectation;
mod scenario;

pub use expectation::{
    BodyCheck, ContractViolation, Expectation, INVALID_ROLE_FRAGMENT, MALFORMED_EMAIL_FRAGMENT,
    MISSING_ROLES_FRAGMENT, PASSWORD_LENGTH_FRAGMENT, USERNAME_IN_USE_FRAGMENT,
    USERNAME_LENGTH_FRAGMENT,
};
pub use scenario::{Scenario, INVALID_ROLE};
