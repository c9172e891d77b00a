//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use reviewload_api_interface::ApiService;
use reviewload_config::Config;
use reviewload_core::{CoreContext, CoreModule, Scenario};
use tokio::sync::RwLock;

use self::{once::OnceCommand, run::RunCommand, show_config::ShowConfigCommand};
use crate::Result;

mod once;
mod run;
mod show_config;

pub(crate) struct CommandContext {
    pub config: Config,
    pub scenario: Scenario,
    pub core_module: CoreModule,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            scenario: &self.scenario,
            api_service: self.api_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Run(RunCommand),
    Once(OnceCommand),
    ShowConfig(ShowConfigCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Run(sub) => sub.execute(ctx).await,
            Self::Once(sub) => sub.execute(ctx).await,
            Self::ShowConfig(sub) => sub.execute(ctx).await,
        }
    }
}
