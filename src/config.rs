use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

use crate::dynamodb::DynamoDBConfig;
use crate::telemetry::LoggingConfig;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_stage")]
    pub stage: String,
    pub dynamodb: DynamoDBConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_stage() -> String {
    "dev".to_owned()
}

/// `App.toml`, then `APP_` variables (`__` nests), then the `DATABASE` and `STAGE` deployment variables.
fn figment() -> Figment {
    Figment::new()
        .merge(Toml::file("App.toml"))
        .merge(Env::prefixed("APP_").split("__"))
        .merge(Env::raw().only(&["DATABASE"]).map(|_| "dynamodb.table".into()))
        .merge(Env::raw().only(&["STAGE"]).map(|_| "stage".into()))
}

pub fn load() -> Result<Config> {
    let config = figment().extract()?;
    Ok(config)
}
