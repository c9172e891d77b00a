//! Config module.

mod drivers;

use std::{
    env,
    str::FromStr,
    time::{SystemTime, UNIX_EPOCH},
};

pub use drivers::{ApiDriver, DriverError};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// HTTP options.
    pub http: ApiHttpConfig,
}

#[derive(Debug, Clone)]
pub struct ApiHttpConfig {
    /// Target service root URL.
    pub host: String,
    /// Connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// Per-request timeout (in milliseconds).
    pub request_timeout: u64,
}

#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Name of the team registered by every virtual user.
    pub team_name: String,
    /// Author of every created pull request, shared by all virtual users.
    pub author_id: String,
}

#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Virtual users count.
    pub users: u32,
    /// Virtual users started per second.
    pub spawn_rate: f64,
    /// Run duration (in seconds).
    pub run_time: u64,
    /// Minimum wait between two iterations (in milliseconds).
    pub wait_min: u64,
    /// Maximum wait between two iterations (in milliseconds).
    pub wait_max: u64,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Load test configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Scenario options.
    pub scenario: ScenarioConfig,
    /// Runner options.
    pub runner: RunnerConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Random seed
    pub random_seed: u64,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        Ok(Config {
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("LOAD_API_DRIVER", "http"))?,
                http: ApiHttpConfig {
                    host: env_to_str("LOAD_API_HTTP_HOST", "http://localhost:8080"),
                    connect_timeout: env_to_u64("LOAD_API_HTTP_CONNECT_TIMEOUT", 5000),
                    request_timeout: env_to_u64("LOAD_API_HTTP_REQUEST_TIMEOUT", 30000),
                },
            },
            scenario: ScenarioConfig {
                team_name: env_to_str("LOAD_SCENARIO_TEAM_NAME", "payments"),
                author_id: env_to_str("LOAD_SCENARIO_AUTHOR_ID", "u1"),
            },
            runner: RunnerConfig {
                users: env_to_u32("LOAD_RUNNER_USERS", 10),
                spawn_rate: env_to_f64("LOAD_RUNNER_SPAWN_RATE", 10.0),
                run_time: env_to_u64("LOAD_RUNNER_RUN_TIME", 60),
                wait_min: env_to_u64("LOAD_RUNNER_WAIT_MIN", 200),
                wait_max: env_to_u64("LOAD_RUNNER_WAIT_MAX", 200),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("LOAD_LOGGING_USE_BUNYAN", false),
            },
            random_seed: env_to_u64("LOAD_RANDOM_SEED", random_seed()),
            version,
        })
    }

    pub fn from_env_no_version() -> Result<Self, DriverError> {
        Self::from_env("0.0.0".into())
    }
}

fn random_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn env_to_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        // Only check values nobody sets in a test environment.
        let config = Config::from_env("1.2.3".into()).unwrap();

        assert_eq!(config.version, "1.2.3");
        assert!(config.runner.wait_min <= config.runner.wait_max);
        assert!(!config.scenario.team_name.is_empty());
    }

    #[test]
    fn parse_helpers_fall_back_on_garbage() {
        env::set_var("LOAD_CONFIG_TEST_GARBAGE", "not-a-number");

        assert_eq!(env_to_u32("LOAD_CONFIG_TEST_GARBAGE", 4), 4);
        assert_eq!(env_to_u64("LOAD_CONFIG_TEST_GARBAGE", 5), 5);
        assert_eq!(env_to_f64("LOAD_CONFIG_TEST_GARBAGE", 1.5), 1.5);
        assert!(env_to_bool("LOAD_CONFIG_TEST_GARBAGE", false));
        assert_eq!(env_to_str("LOAD_CONFIG_TEST_MISSING", "x"), "x");
    }
}
