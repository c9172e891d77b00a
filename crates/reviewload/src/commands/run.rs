use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use tracing::info;

use super::{Command, CommandContext};
use crate::{
    config_validator::validate_runner_configuration, harness::attack::run_attack, Result,
};

/// Run the load test
#[derive(Parser)]
pub(crate) struct RunCommand {
    /// Virtual users count
    #[arg(long, short)]
    users: Option<u32>,

    /// Virtual users started per second
    #[arg(long, short = 'r')]
    spawn_rate: Option<f64>,

    /// Run duration, in seconds
    #[arg(long, short = 't')]
    run_time: Option<u64>,

    /// Minimum wait between two iterations, in milliseconds
    #[arg(long)]
    wait_min: Option<u64>,

    /// Maximum wait between two iterations, in milliseconds
    #[arg(long)]
    wait_max: Option<u64>,
}

#[async_trait]
impl Command for RunCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let mut runner = ctx.config.runner.clone();
        runner.users = self.users.unwrap_or(runner.users);
        runner.spawn_rate = self.spawn_rate.unwrap_or(runner.spawn_rate);
        runner.run_time = self.run_time.unwrap_or(runner.run_time);
        runner.wait_min = self.wait_min.unwrap_or(runner.wait_min);
        runner.wait_max = self.wait_max.unwrap_or(runner.wait_max);
        validate_runner_configuration(&runner)?;

        let random_seed = ctx.config.random_seed;
        let writer = ctx.writer.clone();
        let report = run_attack(Arc::new(ctx), &runner, random_seed).await?;

        info!(
            users = report.users,
            iterations = report.iterations,
            requests = report.summary.total().requests(),
            failures = report.summary.total().failures,
            "Load test complete"
        );
        write!(writer.write().await, "{}", report.summary)?;

        Ok(())
    }
}
