//! Domain layer - User records, the sign-up contract and its errors

pub mod contract;
pub mod error;
pub mod signup;
pub mod user;

pub use contract::{ContractViolation, Expectation, Scenario};
pub use error::DomainError;
pub use signup::{ApiResponse, SignUpApi, StatusError};
pub use user::{FieldErrors, Role, UserField, UserRecord, UserValidationError};
