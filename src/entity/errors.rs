use crate::dynamodb::DynamoDbErrors;

pub type Result<K, E = StoreError> = std::result::Result<K, E>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Missing required attribute '{attribute}' on {entity}")]
    MissingAttribute {
        entity: &'static str,
        attribute: &'static str,
    },

    #[error("Invalid value for attribute '{attribute}' on {entity}, expected a {expected}")]
    InvalidAttribute {
        entity: &'static str,
        attribute: &'static str,
        expected: &'static str,
    },

    #[error("Missing key composite '{attribute}' for {entity}")]
    MissingKeyComposite {
        entity: &'static str,
        attribute: &'static str,
    },

    #[error(transparent)]
    Database(#[from] DynamoDbErrors),
}
