//! CLI module.

pub use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::Parser;
use reviewload_config::Config;
use reviewload_logging::configure_logging;
use tracing::info;

pub(crate) mod args;
mod commands;
mod config_validator;
pub(crate) mod harness;
#[cfg(test)]
mod testutils;

/// Get version data.
pub fn get_version_data() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string())?;
    configure_logging(env!("CARGO_PKG_NAME"), &config)?;

    info!("{}", get_version_data());

    let args = Args::parse();
    CommandExecutor::parse_args(config, args)
}
