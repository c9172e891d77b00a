//! Tracing subscriber setup.

use std::str::FromStr;

use reviewload_config::Config;
use thiserror::Error;
use tracing::{subscriber::SetGlobalDefaultError, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_error::ErrorLayer;
use tracing_log::{log::SetLoggerError, LogTracer};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

const DEFAULT_FILTER: &str = "info,reviewload=debug,reviewload_core=debug";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not bridge `log` records to tracing,\n  caused by: {}", source)]
    LogBridgeError {
        #[from]
        source: SetLoggerError,
    },
    #[error("A global tracing subscriber is already set,\n  caused by: {}", source)]
    GlobalSubscriberError {
        #[from]
        source: SetGlobalDefaultError,
    },
    #[error("Invalid log filter `{}`,\n  caused by: {}", filter, source)]
    FilterError { filter: String, source: ParseError },
}

/// What gets logged, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `EnvFilter` directives.
    pub filter: String,
    /// Bunyan application name, when JSON output is enabled.
    pub bunyan_app: Option<String>,
}

impl LogSettings {
    /// `RUST_LOG` wins over the default filter.
    pub fn new(app: &str, config: &Config) -> Self {
        Self {
            filter: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
            bunyan_app: config
                .logging
                .use_bunyan
                .then(|| format!("{app}-{}", config.version)),
        }
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        EnvFilter::from_str(&self.filter).map_err(|e| LoggingError::FilterError {
            filter: self.filter.clone(),
            source: e,
        })
    }
}

/// Build the subscriber without installing it.
pub fn build_subscriber(
    settings: &LogSettings,
) -> Result<impl Subscriber + Send + Sync + 'static, LoggingError> {
    let tree_layer = HierarchicalLayer::new(2)
        .with_targets(true)
        .with_bracketed_fields(true);
    let bunyan_layers = settings.bunyan_app.clone().map(|app| {
        (
            JsonStorageLayer,
            BunyanFormattingLayer::new(app, std::io::stdout),
        )
    });
    let (json_storage_layer, bunyan_layer) = bunyan_layers.unzip();

    Ok(tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(tree_layer)
        .with(settings.env_filter()?)
        .with(json_storage_layer)
        .with(bunyan_layer))
}

/// Install the global subscriber for `app`.
pub fn configure_logging(app: &str, config: &Config) -> Result<(), LoggingError> {
    let subscriber = build_subscriber(&LogSettings::new(app, config))?;

    LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
