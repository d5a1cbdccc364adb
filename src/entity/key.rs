//! Key composition for the single-table layout.
//!
//! Partition keys read `$<service>#<attr>_<value>`, sort keys read
//! `$<entity>_<version>#<attr>_<value>`. Both are stored lower-cased.

use serde_json::Value;

use super::errors::{Result, StoreError};
use super::schema::{EntitySchema, KeyDefinition};
use super::Record;

pub const ENTITY_FIELD: &str = "__edb_e__";
pub const VERSION_FIELD: &str = "__edb_v__";

pub fn partition_key(schema: &EntitySchema, record: &Record) -> Result<String> {
    let prefix = format!("${}", schema.service);
    compose(schema, &schema.index.pk, prefix, record)
}

pub fn sort_key(schema: &EntitySchema, record: &Record) -> Result<String> {
    compose(schema, &schema.index.sk, sort_prefix(schema), record)
}

/// Sort key built from the leading composites the record supplies, used with
/// `begins_with` when querying a partition.
pub fn sort_key_prefix(schema: &EntitySchema, record: &Record) -> String {
    let mut key = sort_prefix(schema);
    for attribute in schema.index.sk.composite {
        match record.get(*attribute).and_then(composite_value) {
            Some(value) => push_composite(&mut key, attribute, &value),
            None => break,
        }
    }
    key.to_lowercase()
}

fn sort_prefix(schema: &EntitySchema) -> String {
    format!("${}_{}", schema.entity, schema.version)
}

fn compose(
    schema: &EntitySchema,
    definition: &KeyDefinition,
    mut key: String,
    record: &Record,
) -> Result<String> {
    for attribute in definition.composite {
        let value = record
            .get(*attribute)
            .and_then(composite_value)
            .ok_or(StoreError::MissingKeyComposite {
                entity: schema.entity,
                attribute: *attribute,
            })?;
        push_composite(&mut key, attribute, &value);
    }
    Ok(key.to_lowercase())
}

fn push_composite(key: &mut String, attribute: &str, value: &str) {
    key.push('#');
    key.push_str(attribute);
    key.push('_');
    key.push_str(value);
}

fn composite_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{CONTRACT_JOB, USER};

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn keys_are_prefixed_and_lowercased() {
        let user = record(json!({ "userId": "01GE7ABC", "email": "Ada@Example.com" }));
        assert_eq!(partition_key(&USER, &user).unwrap(), "$user#userid_01ge7abc");
        assert_eq!(
            sort_key(&USER, &user).unwrap(),
            "$user_1#email_ada@example.com"
        );
    }

    #[test]
    fn missing_composite_is_reported() {
        let job = record(json!({ "jobId": "j1" }));
        assert!(matches!(
            partition_key(&CONTRACT_JOB, &job),
            Err(StoreError::MissingKeyComposite {
                attribute: "userId",
                ..
            })
        ));
    }

    #[test]
    fn sort_prefix_stops_at_first_missing_composite() {
        let partial = record(json!({ "userId": "u1" }));
        assert_eq!(sort_key_prefix(&CONTRACT_JOB, &partial), "$contractjob_1");

        let full = record(json!({ "userId": "u1", "jobId": "J1" }));
        assert_eq!(
            sort_key_prefix(&CONTRACT_JOB, &full),
            "$contractjob_1#jobid_j1"
        );
    }
}
