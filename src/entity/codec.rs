//! Conversion between plain records and stored items.

use aws_sdk_dynamodb::model::AttributeValue;
use serde_json::Value;
use tracing::debug;

use crate::dynamodb::{AttributesGetterExt, RawAttributes};

use super::errors::{Result, StoreError};
use super::key::{self, ENTITY_FIELD, VERSION_FIELD};
use super::schema::{AttributeType, EntitySchema};
use super::Record;

/// Validates `record` against the schema and builds the item to store.
///
/// Returns the record as written (schema attributes only) alongside the item.
pub fn encode(schema: &EntitySchema, record: &Record) -> Result<(Record, RawAttributes)> {
    let mut written = Record::new();
    let mut item = RawAttributes::new();

    for attribute in schema.attributes {
        let value = match record.get(attribute.name) {
            Some(Value::Null) | None if attribute.required => {
                return Err(StoreError::MissingAttribute {
                    entity: schema.entity,
                    attribute: attribute.name,
                })
            }
            Some(Value::Null) | None => continue,
            Some(value) => value,
        };
        if !attribute.kind.accepts(value) {
            return Err(StoreError::InvalidAttribute {
                entity: schema.entity,
                attribute: attribute.name,
                expected: attribute.kind.name(),
            });
        }
        item.insert(attribute.name.to_owned(), to_attribute(attribute.kind, value));
        written.insert(attribute.name.to_owned(), value.clone());
    }

    let ignored: Vec<&String> = record
        .keys()
        .filter(|name| !schema.has_attribute(name))
        .collect();
    if !ignored.is_empty() {
        debug!(entity = schema.entity, ?ignored, "Ignoring attributes absent from the schema");
    }

    item.insert(
        schema.index.pk.field.to_owned(),
        AttributeValue::S(key::partition_key(schema, &written)?),
    );
    item.insert(
        schema.index.sk.field.to_owned(),
        AttributeValue::S(key::sort_key(schema, &written)?),
    );
    item.insert(
        ENTITY_FIELD.to_owned(),
        AttributeValue::S(schema.entity.to_owned()),
    );
    item.insert(
        VERSION_FIELD.to_owned(),
        AttributeValue::S(schema.version.to_owned()),
    );
    Ok((written, item))
}

/// Decodes a stored item, or `None` when it belongs to another entity.
pub fn decode(schema: &EntitySchema, item: &RawAttributes) -> Result<Option<Record>> {
    let entity = item.get_string(ENTITY_FIELD)?;
    let version = item.get_string(VERSION_FIELD)?;
    if entity != schema.entity || version != schema.version {
        return Ok(None);
    }

    let mut record = Record::new();
    for name in schema.attribute_names() {
        if let Some(value) = item.get_json(name)? {
            record.insert(name.to_owned(), value);
        }
    }
    Ok(Some(record))
}

fn to_attribute(kind: AttributeType, value: &Value) -> AttributeValue {
    match (kind, value) {
        (AttributeType::Boolean, Value::Bool(b)) => AttributeValue::Bool(*b),
        (AttributeType::Number, Value::Number(n)) => AttributeValue::N(n.to_string()),
        (_, Value::String(s)) => AttributeValue::S(s.clone()),
        (_, other) => AttributeValue::S(other.to_string()),
    }
}
