use std::convert::identity;

use async_trait::async_trait;
use aws_sdk_dynamodb::model::AttributeValue;
use tracing::debug;

use crate::dynamodb::{DynamoTable, RawAttributes};

use super::key::{self, ENTITY_FIELD, VERSION_FIELD};
use super::{codec, EntitySchema, EntityStore, FetchOptions, FetchResponse, PutResponse, Record, Result};

/// Projection expression and the attribute name placeholders it references.
#[derive(Debug, PartialEq)]
struct Projection {
    expression: String,
    names: Vec<(String, String)>,
}

/// Always projects the key fields and entity markers so fetched items can be decoded.
fn projection(schema: &EntitySchema, attributes: &[String]) -> Projection {
    let fields = [
        schema.index.pk.field,
        schema.index.sk.field,
        ENTITY_FIELD,
        VERSION_FIELD,
    ]
    .into_iter()
    .chain(
        attributes
            .iter()
            .map(String::as_str)
            .filter(|name| schema.has_attribute(name)),
    );

    let names: Vec<(String, String)> = fields
        .map(|field| (format!("#{}", field), field.to_owned()))
        .collect();
    let expression = names
        .iter()
        .map(|(placeholder, _)| placeholder.as_str())
        .collect::<Vec<_>>()
        .join(",");
    Projection { expression, names }
}

fn decode_all(schema: &EntitySchema, items: Vec<RawAttributes>) -> Result<Vec<Record>> {
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        if let Some(record) = codec::decode(schema, &item)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Backs every entity with the configured DynamoDB table.
#[async_trait]
impl EntityStore for DynamoTable {
    async fn put(&self, schema: &'static EntitySchema, record: Record) -> Result<PutResponse> {
        let (written, item) = codec::encode(schema, &record)?;
        self.put_item(item, identity).await?;
        Ok(PutResponse {
            data: Some(written),
        })
    }

    async fn query(
        &self,
        schema: &'static EntitySchema,
        key: &Record,
        options: &FetchOptions,
    ) -> Result<FetchResponse> {
        let pk = key::partition_key(schema, key)?;
        let sk = key::sort_key_prefix(schema, key);
        debug!(entity = schema.entity, index = schema.index.name, %pk, %sk, ?options, "Querying index");

        let output = self
            .query_items(|mut req| {
                let (pk_field, sk_field) = (schema.index.pk.field, schema.index.sk.field);
                req = req
                    .key_condition_expression(format!(
                        "#{} = :pk and begins_with(#{}, :sk)",
                        pk_field, sk_field
                    ))
                    .expression_attribute_names(format!("#{}", pk_field), pk_field)
                    .expression_attribute_names(format!("#{}", sk_field), sk_field)
                    .expression_attribute_values(":pk", AttributeValue::S(pk))
                    .expression_attribute_values(":sk", AttributeValue::S(sk))
                    .set_limit(options.limit);
                if let Some(attributes) = &options.attributes {
                    let Projection { expression, names } = projection(schema, attributes);
                    req = names
                        .into_iter()
                        .fold(req, |req, (placeholder, name)| {
                            req.expression_attribute_names(placeholder, name)
                        })
                        .projection_expression(expression);
                }
                req
            })
            .await?;

        Ok(FetchResponse {
            data: decode_all(schema, output.items.unwrap_or_default())?,
        })
    }

    async fn scan(
        &self,
        schema: &'static EntitySchema,
        options: &FetchOptions,
    ) -> Result<FetchResponse> {
        debug!(entity = schema.entity, ?options, "Scanning table");

        let items = self
            .scan_items(|mut req| {
                req = req
                    .filter_expression(format!(
                        "#{} = :entity and #{} = :version",
                        ENTITY_FIELD, VERSION_FIELD
                    ))
                    .expression_attribute_names(format!("#{}", ENTITY_FIELD), ENTITY_FIELD)
                    .expression_attribute_names(format!("#{}", VERSION_FIELD), VERSION_FIELD)
                    .expression_attribute_values(
                        ":entity",
                        AttributeValue::S(schema.entity.to_owned()),
                    )
                    .expression_attribute_values(
                        ":version",
                        AttributeValue::S(schema.version.to_owned()),
                    );
                if let Some(attributes) = &options.attributes {
                    let Projection { expression, names } = projection(schema, attributes);
                    req = names
                        .into_iter()
                        .fold(req, |req, (placeholder, name)| {
                            req.expression_attribute_names(placeholder, name)
                        })
                        .projection_expression(expression);
                }
                req
            })
            .await?;

        let mut data = decode_all(schema, items)?;
        if let Some(limit) = options.limit {
            data.truncate(limit.max(0) as usize);
        }
        Ok(FetchResponse { data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::USER;

    #[test]
    fn projection_includes_keys_markers_and_known_attributes() {
        let projection = projection(
            &USER,
            &["email".to_string(), "jobs".to_string(), "firstName".to_string()],
        );
        assert_eq!(
            projection.expression,
            "#PK,#SK,#__edb_e__,#__edb_v__,#email,#firstName"
        );
        assert!(projection
            .names
            .contains(&("#__edb_e__".to_string(), "__edb_e__".to_string())));
        assert!(!projection.names.iter().any(|(_, name)| name == "jobs"));
    }
}
