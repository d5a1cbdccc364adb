use serde_json::Value;
use tracing::{debug, info};

use crate::entity::{FetchOptions, Record};
use crate::fragment;
use crate::model::{JobKind, JobRecord, CONTRACT_JOB, FULL_TIME_JOB, JOB, JOB_INTERFACE};
use crate::selection;

use super::{Resolver, ResolverEvent, Result};

impl Resolver {
    pub(super) async fn add_full_time_job(&self, event: &ResolverEvent) -> Result<Value> {
        self.create(&FULL_TIME_JOB, "jobId", event).await
    }

    pub(super) async fn add_contract_job(&self, event: &ResolverEvent) -> Result<Value> {
        self.create(&CONTRACT_JOB, "jobId", event).await
    }

    /// Jobs of every kind held by `user_id`, full-time jobs first.
    ///
    /// Each kind is fetched with the top-level selection plus the fields its own
    /// inline fragment (or a `... on Job` fragment) asks for. A kind nobody asked
    /// anything of is not queried.
    pub(super) async fn jobs_of_user(&self, user_id: &str, event: &ResolverEvent) -> Result<Value> {
        info!(user_id, "Fetching jobs");
        let fragments = fragment::parse(&event.selection_set_graphql);
        let shared = fragments
            .get(JOB_INTERFACE)
            .map(|fields| selection::group(fields, &JOB).found)
            .unwrap_or_default();

        let mut key = Record::new();
        key.insert("userId".to_owned(), Value::String(user_id.to_owned()));

        let mut jobs: Vec<JobRecord> = Vec::new();
        for kind in JobKind::ALL {
            let extras = fragments
                .get(kind.type_name())
                .map(Vec::as_slice)
                .unwrap_or_default();
            if event.selection_set_list.is_empty() && extras.is_empty() && shared.is_empty() {
                debug!(kind = kind.type_name(), "Nothing selected, skipping");
                continue;
            }

            let requested: Vec<&str> = event
                .selection_set_list
                .iter()
                .chain(extras)
                .chain(&shared)
                .map(String::as_str)
                .collect();
            let selection = selection::group(&requested, kind.schema());

            let response = self
                .entity(kind.schema())
                .query(key.clone())
                .fetch(
                    FetchOptions::default()
                        .limit(self.query_limit)
                        .attributes(selection.found),
                )
                .await?;
            debug!(kind = kind.type_name(), count = response.data.len(), "Fetched jobs");
            jobs.extend(response.data.into_iter().map(|record| kind.tag(record)));
        }

        Ok(serde_json::to_value(jobs)?)
    }
}
