//! Contract runner infrastructure

mod runner;

pub use runner::{ContractReport, ContractRunner, ScenarioOutcome};
