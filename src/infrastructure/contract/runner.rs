//! Contract runner - executes sign-up scenarios against a `SignUpApi`

use reqwest::StatusCode;
use tracing::{info, warn};

use crate::domain::contract::{ContractViolation, Expectation, Scenario};
use crate::domain::{DomainError, SignUpApi};
use crate::infrastructure::user::UserGenerator;

/// Result of running one scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    /// Status of the checked request, or of the setup request if setup failed
    pub status: StatusCode,
    pub result: Result<(), ContractViolation>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a full contract run, in catalogue order
#[derive(Debug, Clone, Default)]
pub struct ContractReport {
    outcomes: Vec<ScenarioOutcome>,
}

impl ContractReport {
    pub fn outcomes(&self) -> &[ScenarioOutcome] {
        &self.outcomes
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(ScenarioOutcome::passed)
    }
}

/// Runs contract scenarios, each with a freshly generated user
#[derive(Debug)]
pub struct ContractRunner<A: SignUpApi> {
    api: A,
    generator: UserGenerator,
}

impl<A: SignUpApi> ContractRunner<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            generator: UserGenerator::new(),
        }
    }

    /// Run a single scenario
    ///
    /// Transport failures abort the run; contract mismatches are reported in
    /// the outcome.
    pub async fn run(&self, scenario: Scenario) -> Result<ScenarioOutcome, DomainError> {
        let user = scenario.prepare(self.generator.generate());

        if scenario.requires_existing_account() {
            let setup = self.api.sign_up(&user).await?;

            if let Err(violation) = Expectation::created_with_token().verify(&setup) {
                warn!("Scenario '{}' setup sign-up failed: {}", scenario, violation);
                return Ok(ScenarioOutcome {
                    scenario,
                    status: setup.status(),
                    result: Err(violation),
                });
            }
        }

        let response = self.api.sign_up(&user).await?;
        let result = scenario.expectation().verify(&response);

        match &result {
            Ok(()) => info!("Scenario '{}' passed (HTTP {})", scenario, response.status()),
            Err(violation) => warn!("Scenario '{}' failed: {}", scenario, violation),
        }

        Ok(ScenarioOutcome {
            scenario,
            status: response.status(),
            result,
        })
    }

    /// Run every scenario in the catalogue
    pub async fn run_all(&self) -> Result<ContractReport, DomainError> {
        let mut outcomes = Vec::with_capacity(Scenario::ALL.len());

        for scenario in Scenario::ALL {
            outcomes.push(self.run(scenario).await?);
        }

        let report = ContractReport { outcomes };

        info!(
            "Contract run finished: {}/{} scenarios passed",
            report.passed_count(),
            report.outcomes().len()
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::signup::{ApiResponse, MockSignUpApi};
    use serde_json::json;

    fn created() -> ApiResponse {
        ApiResponse::from_json(StatusCode::CREATED, &json!({"token": "jwt"}))
    }

    #[tokio::test]
    async fn test_successful_signup_passes() {
        let mut api = MockSignUpApi::new();
        api.expect_sign_up()
            .withf(|user| user.is_valid())
            .times(1)
            .returning(|_| Ok(created()));

        let runner = ContractRunner::new(api);
        let outcome = runner.run(Scenario::SuccessfulSignup).await.unwrap();

        assert!(outcome.passed());
        assert_eq!(outcome.status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_username_scenario_sends_short_username() {
        let mut api = MockSignUpApi::new();
        api.expect_sign_up()
            .withf(|user| user.username() == "abc")
            .times(1)
            .returning(|_| {
                Ok(ApiResponse::from_json(
                    StatusCode::BAD_REQUEST,
                    &json!({"username": "Minimum username length: 4 characters"}),
                ))
            });

        let runner = ContractRunner::new(api);
        let outcome = runner.run(Scenario::UsernameTooShort).await.unwrap();

        assert!(outcome.passed());
    }

    #[tokio::test]
    async fn test_accepting_invalid_input_is_a_violation() {
        let mut api = MockSignUpApi::new();
        api.expect_sign_up().returning(|_| Ok(created()));

        let runner = ContractRunner::new(api);
        let outcome = runner.run(Scenario::InvalidEmail).await.unwrap();

        assert!(!outcome.passed());
        match outcome.result {
            Err(ContractViolation::UnexpectedStatus {
                expected, actual, ..
            }) => {
                assert_eq!(expected, StatusCode::BAD_REQUEST);
                assert_eq!(actual, StatusCode::CREATED);
            }
            other => panic!("Expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_duplicate_scenario_signs_up_same_user_twice() {
        let mut api = MockSignUpApi::new();
        let mut first_username: Option<String> = None;
        api.expect_sign_up().times(2).returning(move |user| {
            if let Some(first) = first_username.as_deref() {
                assert_eq!(first, user.username());
                return Ok(ApiResponse::from_json(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    &json!({"message": "Username is already in use"}),
                ));
            }

            first_username = Some(user.username().to_string());
            Ok(created())
        });

        let runner = ContractRunner::new(api);
        let outcome = runner.run(Scenario::DuplicateUsername).await.unwrap();

        assert!(outcome.passed(), "{:?}", outcome.result);
        assert_eq!(outcome.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_duplicate_scenario_reports_failed_setup() {
        let mut api = MockSignUpApi::new();
        api.expect_sign_up().times(1).returning(|_| {
            Ok(ApiResponse::from_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                &json!({"message": "boom"}),
            ))
        });

        let runner = ContractRunner::new(api);
        let outcome = runner.run(Scenario::DuplicateUsername).await.unwrap();

        assert!(!outcome.passed());
        assert_eq!(outcome.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_transport_error_aborts_run() {
        let mut api = MockSignUpApi::new();
        api.expect_sign_up()
            .returning(|_| Err(DomainError::transport("connection refused")));

        let runner = ContractRunner::new(api);
        let result = runner.run_all().await;

        assert!(matches!(result, Err(DomainError::Transport { .. })));
    }

    #[tokio::test]
    async fn test_run_all_against_conforming_api() {
        let mut api = MockSignUpApi::new();
        let mut registered = std::collections::HashSet::new();
        api.expect_sign_up().returning(move |user| {
            if let Err(errors) = user.validate() {
                return Ok(ApiResponse::from_json(
                    StatusCode::BAD_REQUEST,
                    &errors.to_body(),
                ));
            }
            if !registered.insert(user.username().to_string()) {
                return Ok(ApiResponse::from_json(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    &json!({"message": "Username is already in use"}),
                ));
            }
            Ok(created())
        });

        let runner = ContractRunner::new(api);
        let report = runner.run_all().await.unwrap();

        assert_eq!(report.outcomes().len(), Scenario::ALL.len());
        assert!(report.all_passed(), "{:?}", report.failures().collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_report_lists_failures() {
        let mut api = MockSignUpApi::new();
        api.expect_sign_up().returning(|_| {
            Ok(ApiResponse::from_json(
                StatusCode::BAD_REQUEST,
                &json!({"roles": "Please pick at least one role"}),
            ))
        });

        let runner = ContractRunner::new(api);
        let report = runner.run_all().await.unwrap();

        let failed: Vec<Scenario> = report.failures().map(|o| o.scenario).collect();
        assert!(failed.contains(&Scenario::SuccessfulSignup));
        assert!(!failed.contains(&Scenario::MissingRoles));
        assert!(!report.all_passed());
    }
}
