//! In-memory entity store used by the resolver tests.

use async_trait::async_trait;
use aws_sdk_dynamodb::model::AttributeValue;
use tokio::sync::RwLock;

use crate::dynamodb::RawAttributes;

use super::{codec, key, EntitySchema, EntityStore, FetchOptions, FetchResponse, PutResponse, Record, Result};

/// Stores encoded items in a vector, keyed the same way as the DynamoDB table.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: RwLock<Vec<RawAttributes>>,
    /// Simulates a write that reports no data back.
    drop_put_data: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dropping_put_data() -> Self {
        InMemoryStore {
            drop_put_data: true,
            ..Self::default()
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

fn string_field<'a>(item: &'a RawAttributes, field: &str) -> Option<&'a str> {
    item.get(field)
        .and_then(|value| value.as_s().ok())
        .map(String::as_str)
}

fn project(mut record: Record, options: &FetchOptions) -> Record {
    if let Some(attributes) = &options.attributes {
        record.retain(|name, _| attributes.contains(name));
    }
    record
}

fn finish(records: Vec<Record>, options: &FetchOptions) -> FetchResponse {
    let limit = options
        .limit
        .map(|limit| limit.max(0) as usize)
        .unwrap_or(usize::MAX);
    FetchResponse {
        data: records
            .into_iter()
            .take(limit)
            .map(|record| project(record, options))
            .collect(),
    }
}

#[async_trait]
impl EntityStore for InMemoryStore {
    async fn put(&self, schema: &'static EntitySchema, record: Record) -> Result<PutResponse> {
        let (written, item) = codec::encode(schema, &record)?;
        let (pk, sk) = (schema.index.pk.field, schema.index.sk.field);

        let mut items = self.items.write().await;
        items.retain(|existing| existing.get(pk) != item.get(pk) || existing.get(sk) != item.get(sk));
        items.push(item);

        Ok(PutResponse {
            data: if self.drop_put_data { None } else { Some(written) },
        })
    }

    async fn query(
        &self,
        schema: &'static EntitySchema,
        key: &Record,
        options: &FetchOptions,
    ) -> Result<FetchResponse> {
        let pk = AttributeValue::S(key::partition_key(schema, key)?);
        let sk_prefix = key::sort_key_prefix(schema, key);

        let items = self.items.read().await;
        let mut records = Vec::new();
        for item in items.iter().filter(|item| {
            item.get(schema.index.pk.field) == Some(&pk)
                && string_field(item, schema.index.sk.field)
                    .map_or(false, |sk| sk.starts_with(&sk_prefix))
        }) {
            if let Some(record) = codec::decode(schema, item)? {
                records.push(record);
            }
        }
        Ok(finish(records, options))
    }

    async fn scan(
        &self,
        schema: &'static EntitySchema,
        options: &FetchOptions,
    ) -> Result<FetchResponse> {
        let items = self.items.read().await;
        let mut records = Vec::new();
        for item in items.iter() {
            if let Some(record) = codec::decode(schema, item)? {
                records.push(record);
            }
        }
        Ok(finish(records, options))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::entity::Entity;
    use crate::model::{FULL_TIME_JOB, USER};

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    fn user(id: &str, email: &str) -> Record {
        record(json!({
            "userId": id,
            "email": email,
            "location": "Lisbon",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "role": "engineer",
        }))
    }

    #[tokio::test]
    async fn query_reads_back_a_put_record_with_projection() {
        let store = InMemoryStore::new();
        let users = Entity::new(&USER, &store);
        users.put(user("u1", "ada@example.com")).await.unwrap();
        users.put(user("u2", "bob@example.com")).await.unwrap();

        let response = users
            .query(record(json!({ "userId": "u1" })))
            .fetch(FetchOptions::default().attributes(vec!["email".into()]))
            .await
            .unwrap();
        assert_eq!(response.data, vec![record(json!({ "email": "ada@example.com" }))]);
    }

    #[tokio::test]
    async fn put_replaces_an_item_with_the_same_keys() {
        let store = InMemoryStore::new();
        let users = Entity::new(&USER, &store);
        users.put(user("u1", "ada@example.com")).await.unwrap();
        let mut updated = user("u1", "ada@example.com");
        updated.insert("role".into(), json!("manager"));
        users.put(updated).await.unwrap();

        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn scan_returns_only_records_of_the_entity() {
        let store = InMemoryStore::new();
        Entity::new(&USER, &store)
            .put(user("u1", "ada@example.com"))
            .await
            .unwrap();
        Entity::new(&FULL_TIME_JOB, &store)
            .put(record(json!({
                "userId": "u1",
                "jobId": "j1",
                "company": "Acme",
                "from": "2020-01",
                "pensionPlan": true,
                "yearlySalary": 90000,
            })))
            .await
            .unwrap();

        let response = Entity::new(&USER, &store)
            .scan()
            .fetch(FetchOptions::default())
            .await
            .unwrap();
        assert_eq!(response.data, vec![user("u1", "ada@example.com")]);
    }
}
