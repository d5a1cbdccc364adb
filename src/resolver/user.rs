use serde_json::Value;
use tracing::{debug, info};
use ulid::Ulid;

use crate::entity::{EntitySchema, FetchOptions, Record};
use crate::model::USER;
use crate::selection;

use super::{Resolver, ResolverError, ResolverEvent, Result};

impl Resolver {
    pub(super) async fn get_users(&self, event: &ResolverEvent) -> Result<Value> {
        info!("getUsers");
        let selection = selection::group(&event.selection_set_list, &USER);

        let response = self
            .entity(&USER)
            .scan()
            .fetch(FetchOptions::default().attributes(selection.found))
            .await?;
        debug!(count = response.data.len(), "Fetched users");

        Ok(Value::Array(
            response.data.into_iter().map(Value::Object).collect(),
        ))
    }

    pub(super) async fn get_user(&self, event: &ResolverEvent) -> Result<Value> {
        let user_id = event.input_string("userId")?;
        info!(user_id, "getUser");
        let selection = selection::group(&event.selection_set_list, &USER);

        let mut key = Record::new();
        key.insert("userId".to_owned(), Value::String(user_id.to_owned()));
        let response = self
            .entity(&USER)
            .query(key)
            .fetch(
                FetchOptions::default()
                    .limit(1)
                    .attributes(selection.found),
            )
            .await?;
        debug!(records = ?response.data, "Fetched user");

        response
            .data
            .into_iter()
            .next()
            .map(Value::Object)
            .ok_or_else(|| ResolverError::NotFound(format!("No user found for {}", user_id)))
    }

    pub(super) async fn create_user(&self, event: &ResolverEvent) -> Result<Value> {
        self.create(&USER, "userId", event).await
    }

    /// Writes `input` with a fresh identifier under `id_attribute` and returns what was stored.
    pub(super) async fn create(
        &self,
        schema: &'static EntitySchema,
        id_attribute: &str,
        event: &ResolverEvent,
    ) -> Result<Value> {
        let mut record = event.input()?.clone();
        record.insert(
            id_attribute.to_owned(),
            Value::String(Ulid::new().to_string()),
        );
        info!(entity = schema.entity, ?record, "Creating record");

        let response = self.entity(schema).put(record).await?;
        debug!(data = ?response.data, "Stored record");

        response
            .data
            .map(Value::Object)
            .ok_or(ResolverError::Internal)
    }
}
