use serde::Deserialize;
use serde_json::Value;

use crate::entity::Record;

use super::error::ResolverError;

/// Payload forwarded by the GraphQL layer for one field resolution.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverEvent {
    pub field_name: String,
    #[serde(default)]
    pub parent_type_name: Option<String>,
    #[serde(default, alias = "arguments")]
    pub args: Arguments,
    #[serde(default)]
    pub selection_set_list: Vec<String>,
    #[serde(default, rename = "selectionSetGraphQL")]
    pub selection_set_graphql: String,
    /// Parent object when resolving a field of a type, e.g. `User.jobs`.
    #[serde(default)]
    pub source: Option<Record>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Arguments {
    #[serde(default)]
    pub input: Option<Record>,
}

impl ResolverEvent {
    pub fn input(&self) -> Result<&Record, ResolverError> {
        self.args
            .input
            .as_ref()
            .ok_or_else(|| ResolverError::InvalidInput("missing 'input' argument".to_owned()))
    }

    pub fn input_string(&self, name: &str) -> Result<&str, ResolverError> {
        string_field(self.input()?, name, "input")
    }

    pub fn source_string(&self, name: &str) -> Result<&str, ResolverError> {
        let source = self
            .source
            .as_ref()
            .ok_or_else(|| ResolverError::InvalidInput("missing source object".to_owned()))?;
        string_field(source, name, "source")
    }
}

fn string_field<'a>(record: &'a Record, name: &str, origin: &str) -> Result<&'a str, ResolverError> {
    match record.get(name) {
        Some(Value::String(value)) => Ok(value),
        _ => Err(ResolverError::InvalidInput(format!(
            "expected '{}' to be a string in {}",
            name, origin
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_a_query_event() {
        let event: ResolverEvent = serde_json::from_value(json!({
            "fieldName": "getUser",
            "parentTypeName": "Query",
            "variables": {},
            "selectionSetList": ["userId", "email"],
            "selectionSetGraphQL": "{\n  userId\n  email\n}",
            "args": { "input": { "userId": "u1" } },
            "source": null,
        }))
        .unwrap();

        assert_eq!(event.field_name, "getUser");
        assert_eq!(event.parent_type_name.as_deref(), Some("Query"));
        assert_eq!(event.selection_set_list, vec!["userId", "email"]);
        assert_eq!(event.input_string("userId").unwrap(), "u1");
        assert!(event.source.is_none());
    }

    #[test]
    fn accepts_arguments_alias_and_missing_optional_fields() {
        let event: ResolverEvent = serde_json::from_value(json!({
            "fieldName": "jobs",
            "arguments": {},
            "source": { "userId": "u1" },
        }))
        .unwrap();

        assert!(event.selection_set_list.is_empty());
        assert!(event.selection_set_graphql.is_empty());
        assert_eq!(event.source_string("userId").unwrap(), "u1");
        assert!(matches!(event.input(), Err(ResolverError::InvalidInput(_))));
    }

    #[test]
    fn non_string_identifiers_are_rejected() {
        let event: ResolverEvent = serde_json::from_value(json!({
            "fieldName": "getJobs",
            "args": { "input": { "userId": 42 } },
        }))
        .unwrap();

        assert!(matches!(
            event.input_string("userId"),
            Err(ResolverError::InvalidInput(_))
        ));
    }
}
