use async_trait::async_trait;
use serde_json::{Map, Value};

pub use errors::{Result, StoreError};
pub use schema::{Attribute, AttributeType, EntitySchema, IndexDefinition, KeyDefinition};

pub mod codec;
mod dynamo;
pub mod errors;
pub mod key;
#[cfg(test)]
pub mod memory;
pub mod schema;

/// A plain record as exchanged with the API: attribute name to JSON value.
pub type Record = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub limit: Option<i32>,
    /// Attributes to project. `None` fetches every attribute.
    pub attributes: Option<Vec<String>>,
}

impl FetchOptions {
    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn attributes(mut self, attributes: Vec<String>) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PutResponse {
    pub data: Option<Record>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub data: Vec<Record>,
}

/// Data access for schema-defined entities.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn put(&self, schema: &'static EntitySchema, record: Record) -> Result<PutResponse>;

    /// Records of the partition designated by `key`, narrowed by any sort composites it holds.
    async fn query(
        &self,
        schema: &'static EntitySchema,
        key: &Record,
        options: &FetchOptions,
    ) -> Result<FetchResponse>;

    async fn scan(
        &self,
        schema: &'static EntitySchema,
        options: &FetchOptions,
    ) -> Result<FetchResponse>;
}

/// An entity schema bound to a store.
pub struct Entity<'a> {
    schema: &'static EntitySchema,
    store: &'a dyn EntityStore,
}

impl<'a> Entity<'a> {
    pub fn new(schema: &'static EntitySchema, store: &'a dyn EntityStore) -> Self {
        Entity { schema, store }
    }

    pub async fn put(&self, record: Record) -> Result<PutResponse> {
        self.store.put(self.schema, record).await
    }

    pub fn query(&self, key: Record) -> QueryRequest<'a> {
        QueryRequest {
            schema: self.schema,
            store: self.store,
            key,
        }
    }

    pub fn scan(&self) -> ScanRequest<'a> {
        ScanRequest {
            schema: self.schema,
            store: self.store,
        }
    }
}

pub struct QueryRequest<'a> {
    schema: &'static EntitySchema,
    store: &'a dyn EntityStore,
    key: Record,
}

impl QueryRequest<'_> {
    pub async fn fetch(self, options: FetchOptions) -> Result<FetchResponse> {
        self.store.query(self.schema, &self.key, &options).await
    }
}

pub struct ScanRequest<'a> {
    schema: &'static EntitySchema,
    store: &'a dyn EntityStore,
}

impl ScanRequest<'_> {
    pub async fn fetch(self, options: FetchOptions) -> Result<FetchResponse> {
        self.store.scan(self.schema, &options).await
    }
}
