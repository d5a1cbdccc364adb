use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{info, info_span, Instrument};

use crate::dynamodb::DynamoTable;
use crate::resolver::Resolver;

mod config;
mod dynamodb;
mod entity;
mod fragment;
mod model;
mod resolver;
mod selection;
mod telemetry;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = config::load()?;
    telemetry::init(&config.logging)?;
    info!(stage = %config.stage, table = %config.dynamodb.table, "Configuration loaded");

    let table = DynamoTable::load(&config.dynamodb).await?;
    let resolver = Resolver::new(Box::new(table), config.dynamodb.query_limit);

    let resolver = &resolver;
    let stage = config.stage.as_str();
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        let LambdaEvent { payload, context } = event;
        let span = info_span!("invocation", request_id = %context.request_id, stage);
        Ok::<_, Error>(resolver.handle(payload).instrument(span).await)
    }))
    .await
}
