//! Probe command - sends one sign-up request and prints the raw response

use clap::Args;
use tracing::info;

use super::{load_config, EndpointArgs};
use crate::domain::{SignUpApi, UserField};
use crate::infrastructure::signup::SignUpClient;
use crate::infrastructure::user::get_random_user;

/// Arguments for the probe command
#[derive(Args, Clone, Debug)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub endpoint: EndpointArgs,

    /// Replace one field of the generated user with an invalid value
    #[arg(long)]
    pub corrupt: Option<UserField>,
}

/// Send a generated user and print status and body
pub async fn run(args: ProbeArgs) -> anyhow::Result<()> {
    let config = load_config(&args.endpoint)?;
    let client = SignUpClient::from_config(&config.api)?;

    let user = get_random_user();
    let user = match args.corrupt {
        Some(field) => user.corrupt(field),
        None => user,
    };

    info!("Probing {} as '{}'", client.signup_url(), user.username());

    let response = client.sign_up(&user).await?;

    println!("HTTP {}", response.status());
    match response.json_value() {
        Ok(body) => println!("{}", serde_json::to_string_pretty(&body)?),
        Err(_) => println!("{}", response.text()),
    }

    Ok(())
}
