use serde::Serialize;
use serde_json::json;

use crate::entity::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("{0}")]
    NotFound(String),

    #[error("Internal error")]
    Internal,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Could not serialize the response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResolverError {
    pub fn code(&self) -> &'static str {
        match self {
            ResolverError::NotFound(_) => "NOT_FOUND",
            ResolverError::Internal => "INTERNAL",
            ResolverError::InvalidInput(_) => "INVALID_INPUT",
            ResolverError::UnknownField(_) => "UNKNOWN_FIELD",
            ResolverError::Store(_) => "STORE",
            ResolverError::Serialization(_) => "SERIALIZATION",
        }
    }
}

/// Failure response returned in place of the resolved value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub status_code: u16,
    pub body: String,
}

impl From<&ResolverError> for ErrorEnvelope {
    fn from(err: &ResolverError) -> Self {
        ErrorEnvelope {
            status_code: 500,
            body: json!({ "code": err.code(), "message": err.to_string() }).to_string(),
        }
    }
}
