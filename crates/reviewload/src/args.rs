use std::sync::Arc;

use clap::Parser;
use reviewload_api_http::HttpApiService;
use reviewload_api_interface::ApiService;
use reviewload_api_null::NullApiService;
use reviewload_config::{ApiDriver, Config};
use reviewload_core::{CoreModule, Scenario};
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    config_validator::validate_configuration,
    Result,
};

#[derive(Parser)]
#[command(version, about = "Load test for the reviewer assignment service", long_about = None)]
pub struct Args {
    /// Target service root URL (overrides `LOAD_API_HTTP_HOST`)
    #[arg(long, global = true)]
    host: Option<String>,

    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let config = Self::resolve_config(config, &args)?;

        let api_service: Box<dyn ApiService + Send + Sync + 'static> = {
            if config.api.driver == ApiDriver::Http {
                info!(host = %config.api.http.host, "Using HttpApiService API driver");
                Box::new(HttpApiService::new(config.clone())?)
            } else {
                info!("Using NullApiService API driver");
                Box::new(NullApiService::new())
            }
        };

        let ctx = CommandContext {
            scenario: Scenario::from_config(&config.scenario),
            config,
            core_module: CoreModule::builder().build(),
            api_service,
            writer: Arc::new(RwLock::new(std::io::stdout())),
        };

        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(Self::parse_args_async(args, ctx))
    }

    /// Apply global overrides, then validate what every command shares.
    ///
    /// Runner values are checked by the `run` command, after its own overrides.
    pub(crate) fn resolve_config(mut config: Config, args: &Args) -> Result<Config> {
        if let Some(host) = &args.host {
            config.api.http.host = host.clone();
        }
        validate_configuration(&config)?;

        Ok(config)
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
