//! Infrastructure layer - HTTP client, user generation and contract runner

pub mod contract;
pub mod logging;
pub mod signup;
pub mod user;
