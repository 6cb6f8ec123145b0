//! Verify command - runs the contract catalogue against a live endpoint

use tracing::info;

use super::{load_config, EndpointArgs};
use crate::infrastructure::contract::{ContractReport, ContractRunner};
use crate::infrastructure::signup::SignUpClient;

/// Run every scenario and fail if any of them breaks the contract
pub async fn run(args: EndpointArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let client = SignUpClient::from_config(&config.api)?;

    info!("Verifying sign-up contract of {}", client.signup_url());

    let runner = ContractRunner::new(client);
    let report = runner.run_all().await?;

    for line in summarize(&report) {
        println!("{}", line);
    }

    if !report.all_passed() {
        anyhow::bail!(
            "{} of {} scenarios broke the contract",
            report.outcomes().len() - report.passed_count(),
            report.outcomes().len()
        );
    }

    Ok(())
}

fn summarize(report: &ContractReport) -> Vec<String> {
    report
        .outcomes()
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(()) => format!(
                "PASS {:<28} HTTP {}  {}",
                outcome.scenario.name(),
                outcome.status.as_u16(),
                outcome.scenario.description()
            ),
            Err(violation) => format!(
                "FAIL {:<28} HTTP {}  {}",
                outcome.scenario.name(),
                outcome.status.as_u16(),
                violation
            ),
        })
        .collect()
}
