use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DynamoDBConfig {
    pub table: String,
    /// Page size of the per-user job queries.
    #[serde(default = "default_query_limit")]
    pub query_limit: i32,
}

fn default_query_limit() -> i32 {
    10
}
