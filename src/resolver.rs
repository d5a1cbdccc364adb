use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, info_span, Instrument};

use crate::entity::{Entity, EntitySchema, EntityStore};

pub use error::{ErrorEnvelope, ResolverError};
pub use event::ResolverEvent;

pub mod error;
pub mod event;
mod job;
mod user;

type Result<T, E = ResolverError> = std::result::Result<T, E>;

/// Fields this function resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    GetUsers,
    GetUser,
    CreateUser,
    AddFullTimeJob,
    AddContractJob,
    GetJobs,
    Jobs,
}

impl FromStr for Operation {
    type Err = ResolverError;

    fn from_str(field_name: &str) -> Result<Self> {
        Ok(match field_name {
            "getUsers" => Operation::GetUsers,
            "getUser" => Operation::GetUser,
            "createUser" => Operation::CreateUser,
            "addFullTimeJob" => Operation::AddFullTimeJob,
            "addContractJob" => Operation::AddContractJob,
            "getJobs" => Operation::GetJobs,
            "jobs" => Operation::Jobs,
            other => return Err(ResolverError::UnknownField(other.to_owned())),
        })
    }
}

/// What the function returns for an event: the resolved value or an error envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Data(Value),
    Error(ErrorEnvelope),
}

pub struct Resolver {
    store: Box<dyn EntityStore>,
    query_limit: i32,
}

impl Resolver {
    pub fn new(store: Box<dyn EntityStore>, query_limit: i32) -> Self {
        Resolver { store, query_limit }
    }

    fn entity(&self, schema: &'static EntitySchema) -> Entity<'_> {
        Entity::new(schema, self.store.as_ref())
    }

    /// Resolves one event. Every failure is turned into an [`ErrorEnvelope`] here.
    pub async fn handle(&self, payload: Value) -> Response {
        let result = match serde_json::from_value::<ResolverEvent>(payload) {
            Ok(event) => {
                let span = info_span!(
                    "resolve",
                    field_name = %event.field_name,
                    parent_type = event.parent_type_name.as_deref().unwrap_or_default(),
                );
                self.dispatch(&event).instrument(span).await
            }
            Err(e) => Err(ResolverError::InvalidInput(format!("malformed event: {}", e))),
        };

        match result {
            Ok(value) => Response::Data(value),
            Err(err) => {
                error!(code = err.code(), error = %err, "Resolver failed");
                Response::Error(ErrorEnvelope::from(&err))
            }
        }
    }

    async fn dispatch(&self, event: &ResolverEvent) -> Result<Value> {
        info!(
            selection_set_list = ?event.selection_set_list,
            selection_set_graphql = %event.selection_set_graphql,
            "Resolving field"
        );
        match event.field_name.parse::<Operation>()? {
            Operation::GetUsers => self.get_users(event).await,
            Operation::GetUser => self.get_user(event).await,
            Operation::CreateUser => self.create_user(event).await,
            Operation::AddFullTimeJob => self.add_full_time_job(event).await,
            Operation::AddContractJob => self.add_contract_job(event).await,
            Operation::GetJobs => {
                let user_id = event.input_string("userId")?;
                self.jobs_of_user(user_id, event).await
            }
            Operation::Jobs => {
                let user_id = event.source_string("userId")?;
                self.jobs_of_user(user_id, event).await
            }
        }
    }
}
