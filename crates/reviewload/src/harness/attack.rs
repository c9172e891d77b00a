//! Virtual users fan-out.

use std::{sync::Arc, time::Duration};

use futures::future::join_all;
use reviewload_config::RunnerConfig;
use reviewload_core::use_cases::users::RunVirtualUserInterface;
use shaku::HasComponent;
use tokio::time::{sleep, Instant};
use tracing::{error, info, info_span, Instrument};

use super::{
    pacing::{spawn_interval, PacedSchedule, WaitTime},
    stats::{RunSummary, StatsRecorder},
};
use crate::{commands::CommandContext, Result};

/// Outcome of a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    pub users: u32,
    pub iterations: u64,
    pub summary: RunSummary,
}

/// Start `runner.users` virtual users at `runner.spawn_rate` users per
/// second, each one running until `runner.run_time` elapses.
pub(crate) async fn run_attack(
    ctx: Arc<CommandContext>,
    runner: &RunnerConfig,
    random_seed: u64,
) -> Result<AttackReport> {
    let recorder = Arc::new(StatsRecorder::new());
    let wait_time = WaitTime::from_config(runner);
    let deadline = Instant::now() + Duration::from_secs(runner.run_time);
    let spawn_interval = spawn_interval(runner.spawn_rate)?;

    info!(
        users = runner.users,
        spawn_rate = runner.spawn_rate,
        run_time = runner.run_time,
        "Starting load test"
    );

    let mut handles = Vec::with_capacity(runner.users as usize);
    for user_index in 0..runner.users {
        if user_index > 0 {
            sleep(spawn_interval).await;
        }
        if Instant::now() >= deadline {
            info!(
                started = user_index,
                "Run time elapsed before every user was started"
            );
            break;
        }

        let ctx = ctx.clone();
        let recorder = recorder.clone();
        let mut schedule = PacedSchedule::new(
            deadline,
            wait_time,
            random_seed.wrapping_add(user_index.into()),
        );

        handles.push(tokio::spawn(
            async move {
                let core_ctx = ctx.as_core_context();
                let run_virtual_user: &dyn RunVirtualUserInterface =
                    core_ctx.core_module.resolve_ref();

                run_virtual_user
                    .run(&core_ctx, recorder.as_ref(), &mut schedule)
                    .await
            }
            .instrument(info_span!("virtual_user", user_index)),
        ));
    }

    let users = handles.len() as u32;
    let mut iterations = 0;
    for result in join_all(handles).await {
        match result {
            Ok(report) => iterations += report.iterations,
            Err(e) => error!(error = %e, "Virtual user task failed"),
        }
    }

    Ok(AttackReport {
        users,
        iterations,
        summary: recorder.summary(),
    })
}
