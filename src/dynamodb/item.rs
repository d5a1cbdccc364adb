use std::collections::HashMap;

use aws_sdk_dynamodb::model::AttributeValue;
use serde_json::{Map, Number, Value};
use tracing::error;

use super::errors::{DynamoDbErrors, Result};

pub type RawAttributes = HashMap<String, AttributeValue>;

/// Extension used to access easily attributes from the returned HashMap of the AWS SDK.
pub trait AttributesGetterExt {
    fn get_string(&self, key: &str) -> Result<&String>;
    fn get_json(&self, key: &str) -> Result<Option<Value>>;
}

impl AttributesGetterExt for RawAttributes {
    fn get_string(&self, key: &str) -> Result<&String> {
        get_attr(self, key)?.as_s().map_err(|_| {
            let message = format!("Expected key '{}' to be a string", key);
            error!(message);
            DynamoDbErrors::UnexpectedDataFormat(message)
        })
    }

    fn get_json(&self, key: &str) -> Result<Option<Value>> {
        self.get(key).map(attribute_to_json).transpose()
    }
}

fn get_attr<'a>(map: &'a RawAttributes, key: &str) -> Result<&'a AttributeValue> {
    if let Some(value) = map.get(key) {
        Ok(value)
    } else {
        let message = format!("Missing key '{}'", key);
        error!(message);
        Err(DynamoDbErrors::UnexpectedDataFormat(message))
    }
}

pub fn attribute_to_json(value: &AttributeValue) -> Result<Value> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(n).map(Value::Number),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Ss(set) => Ok(Value::Array(
            set.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(set) => set
            .iter()
            .map(|n| parse_number(n).map(Value::Number))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        AttributeValue::L(list) => list
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(key, value)| Ok((key.clone(), attribute_to_json(value)?)))
            .collect::<Result<Map<_, _>>>()
            .map(Value::Object),
        other => {
            let message = format!("Unsupported attribute value {:?}", other);
            error!(message);
            Err(DynamoDbErrors::UnexpectedDataFormat(message))
        }
    }
}

fn parse_number(n: &str) -> Result<Number> {
    if let Ok(integer) = n.parse::<i64>() {
        return Ok(Number::from(integer));
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| {
            let message = format!("Could not parse '{}' as a number", n);
            error!(message);
            DynamoDbErrors::UnexpectedDataFormat(message)
        })
}
