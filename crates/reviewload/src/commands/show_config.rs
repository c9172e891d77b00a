use async_trait::async_trait;
use clap::Parser;

use super::{Command, CommandContext};
use crate::Result;

/// Show resolved configuration
#[derive(Parser)]
pub(crate) struct ShowConfigCommand;

#[async_trait]
impl Command for ShowConfigCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        writeln!(ctx.writer.write().await, "{:#?}", ctx.config)?;
        writeln!(ctx.writer.write().await, "{:#?}", ctx.scenario)?;

        Ok(())
    }
}
