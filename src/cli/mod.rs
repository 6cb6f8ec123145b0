//! CLI module for the sign-up contract suite
//!
//! Provides subcommands:
//! - `generate`: print random users as JSON
//! - `probe`: send one sign-up and print the raw response
//! - `verify`: run every contract scenario against the configured endpoint

pub mod generate;
pub mod probe;
pub mod verify;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Sign-up contract suite - checks a sign-up endpoint against its contract
#[derive(Parser)]
#[command(name = "signup-contract")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print generated users as JSON, one per line
    Generate(generate::GenerateArgs),

    /// Send a single sign-up request and print the response
    Probe(probe::ProbeArgs),

    /// Run every contract scenario against the endpoint
    Verify(EndpointArgs),
}

/// Endpoint overrides shared by commands that talk to the service
#[derive(Args, Clone, Debug, Default)]
pub struct EndpointArgs {
    /// Base URL of the service (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path of the sign-up endpoint (overrides config)
    #[arg(long)]
    pub signup_path: Option<String>,
}

/// Load `.env` and configuration, apply CLI overrides and start logging
fn load_config(endpoint: &EndpointArgs) -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load()?;

    if let Some(base_url) = &endpoint.base_url {
        config.api.base_url = base_url.clone();
    }

    if let Some(signup_path) = &endpoint.signup_path {
        config.api.signup_path = signup_path.clone();
    }

    logging::init_logging(&config.logging)?;

    Ok(config)
}
