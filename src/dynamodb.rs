use aws_sdk_dynamodb::client::fluent_builders::{PutItem, Query, Scan};
use aws_sdk_dynamodb::output::{PutItemOutput, QueryOutput};
use aws_sdk_dynamodb::Client;
use tokio_stream::StreamExt;
use tracing::{error, info};

pub use config::DynamoDBConfig;
pub use errors::{DynamoDbErrors, Result};
pub use item::{AttributesGetterExt, RawAttributes};

mod config;
mod errors;
mod item;

pub struct DynamoTable {
    client: Client,
    pub config: DynamoDBConfig,
}

impl DynamoTable {
    pub async fn load(config: &DynamoDBConfig) -> anyhow::Result<DynamoTable> {
        let aws_config = aws_config::load_from_env().await;
        let client = Client::new(&aws_config);
        let config = config.clone();

        info!(table = %config.table, "DynamoDB database configured.");
        Ok(DynamoTable { client, config })
    }

    pub async fn put_item<C>(&self, item: RawAttributes, configure: C) -> Result<PutItemOutput>
    where
        C: FnOnce(PutItem) -> PutItem,
    {
        let req = self
            .client
            .put_item()
            .table_name(&self.config.table)
            .set_item(Some(item));
        configure(req).send().await.map_err(|e| {
            error!("{}", e);
            DynamoDbErrors::RequestFailure(e.to_string())
        })
    }

    pub async fn query_items<C>(&self, configure: C) -> Result<QueryOutput>
    where
        C: FnOnce(Query) -> Query,
    {
        let req = self.client.query().table_name(&self.config.table);
        configure(req).send().await.map_err(|e| {
            error!("{}", e);
            DynamoDbErrors::RequestFailure(e.to_string())
        })
    }

    /// Scans the whole table, following pagination until the last page.
    pub async fn scan_items<C>(&self, configure: C) -> Result<Vec<RawAttributes>>
    where
        C: FnOnce(Scan) -> Scan,
    {
        let req = self.client.scan().table_name(&self.config.table);
        let mut paginator = configure(req).into_paginator().send();

        let mut items: Vec<RawAttributes> = Vec::new();
        while let Some(output) = paginator.next().await {
            let output = output.map_err(|e| {
                error!("{}", e);
                DynamoDbErrors::RequestFailure(e.to_string())
            })?;
            items.extend(output.items.unwrap_or_default());
        }
        Ok(items)
    }
}
