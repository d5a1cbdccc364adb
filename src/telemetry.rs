use anyhow::Result;
use serde::Deserialize;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Name attached to every log line.
    #[serde(default = "default_service")]
    pub service: String,
    /// Default filter, `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            service: default_service(),
            level: default_level(),
        }
    }
}

fn default_service() -> String {
    "graphql".to_owned()
}

fn default_level() -> String {
    "info".to_owned()
}

/// Installs the global subscriber emitting bunyan JSON lines on stdout.
pub fn init(config: &LoggingConfig) -> Result<()> {
    LogTracer::init()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let formatting_layer = BunyanFormattingLayer::new(config.service.clone(), std::io::stdout);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
