//! User infrastructure module
//!
//! This module provides random user generation for sign-up requests.

mod generator;

pub use generator::{get_random_user, random_alphanumeric, UserGenerator};
