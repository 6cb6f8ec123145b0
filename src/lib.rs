//! Sign-Up Contract Suite
//!
//! Verifies the contract of a user sign-up HTTP endpoint:
//! - Random, valid user records with single-field corruption for negative paths
//! - A passthrough client returning raw responses whatever their status
//! - A catalogue of contract scenarios and a runner to check a live service

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    ApiResponse, ContractViolation, DomainError, Role, Scenario, SignUpApi, StatusError,
    UserField, UserRecord,
};
pub use infrastructure::contract::{ContractReport, ContractRunner, ScenarioOutcome};
pub use infrastructure::signup::{HttpClient, SignUpClient};
pub use infrastructure::user::{get_random_user, UserGenerator};
