//! Validation utilities.

use reviewload_config::{ApiDriver, Config, RunnerConfig};
use thiserror::Error;

use crate::harness::pacing::spawn_interval;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on configuration:\n{}", errors)]
    ConfigurationError { errors: String },
}

#[derive(Default)]
struct ErrorList(String);

impl ErrorList {
    fn missing(&mut self, name: &str) {
        self.push(format!("Missing value: {name}"));
    }

    fn invalid(&mut self, name: &str, reason: &str) {
        self.push(format!("Invalid value: {name} ({reason})"));
    }

    fn push(&mut self, line: String) {
        self.0.push('\n');
        self.0.push_str("  - ");
        self.0.push_str(&line);
    }

    fn into_result(self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::ConfigurationError { errors: self.0 })
        }
    }
}

fn check_runner(errors: &mut ErrorList, runner: &RunnerConfig) {
    if runner.users == 0 {
        errors.invalid("LOAD_RUNNER_USERS", "at least one user is needed");
    }
    if runner.spawn_rate.is_nan() || runner.spawn_rate <= 0.0 {
        errors.invalid("LOAD_RUNNER_SPAWN_RATE", "must be positive");
    } else if spawn_interval(runner.spawn_rate).is_err() {
        errors.invalid("LOAD_RUNNER_SPAWN_RATE", "too low");
    }
    if runner.wait_min > runner.wait_max {
        errors.invalid(
            "LOAD_RUNNER_WAIT_MIN",
            "must not be greater than LOAD_RUNNER_WAIT_MAX",
        );
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    let mut errors = ErrorList::default();

    if config.api.driver == ApiDriver::Http && config.api.http.host.is_empty() {
        errors.missing("LOAD_API_HTTP_HOST");
    }
    if config.scenario.team_name.is_empty() {
        errors.missing("LOAD_SCENARIO_TEAM_NAME");
    }
    if config.scenario.author_id.is_empty() {
        errors.missing("LOAD_SCENARIO_AUTHOR_ID");
    }

    errors.into_result()
}

/// Validate runner configuration, after command line overrides.
pub fn validate_runner_configuration(runner: &RunnerConfig) -> Result<(), ValidationError> {
    let mut errors = ErrorList::default();
    check_runner(&mut errors, runner);
    errors.into_result()
}
