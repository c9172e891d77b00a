use async_trait::async_trait;
use clap::Parser;
use reviewload_core::{
    recorder::MemoryRecorder, schedule::IterationLimit,
    use_cases::users::RunVirtualUserInterface,
};
use reviewload_models::Outcome;
use shaku::HasComponent;

use super::{Command, CommandContext};
use crate::Result;

/// Run a single virtual user and print every outcome
#[derive(Parser)]
pub(crate) struct OnceCommand {
    /// Workflow iterations to run after the team registration
    #[arg(long, default_value_t = 1)]
    iterations: u64,
}

#[async_trait]
impl Command for OnceCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let recorder = MemoryRecorder::new();
        let core_ctx = ctx.as_core_context();
        let run_virtual_user: &dyn RunVirtualUserInterface = core_ctx.core_module.resolve_ref();

        run_virtual_user
            .run(
                &core_ctx,
                &recorder,
                &mut IterationLimit::new(self.iterations),
            )
            .await;

        let mut writer = ctx.writer.write().await;
        for recorded in recorder.outcomes() {
            match recorded.outcome {
                Outcome::Success => writeln!(
                    writer,
                    "{:<10} OK     ({} ms)",
                    recorded.endpoint,
                    recorded.elapsed.as_millis()
                )?,
                Outcome::Failure { message } => writeln!(
                    writer,
                    "{:<10} FAILED ({} ms): {message}",
                    recorded.endpoint,
                    recorded.elapsed.as_millis()
                )?,
            }
        }

        Ok(())
    }
}
