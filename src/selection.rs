use std::collections::HashSet;

use tracing::debug;

use crate::entity::EntitySchema;

/// Requested field names split by whether the entity stores them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouped {
    /// Requested names that are schema attributes, in schema order.
    pub found: Vec<String>,
    /// Requested names unknown to the schema, in first-request order.
    pub other: Vec<String>,
}

/// Partitions `requested` against the attributes of `schema`. Duplicates collapse.
pub fn group<S: AsRef<str>>(requested: &[S], schema: &EntitySchema) -> Grouped {
    let requested_set: HashSet<&str> = requested.iter().map(AsRef::as_ref).collect();

    let found: Vec<String> = schema
        .attribute_names()
        .filter(|name| requested_set.contains(name))
        .map(String::from)
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let other: Vec<String> = requested
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !schema.has_attribute(name) && seen.insert(*name))
        .map(String::from)
        .collect();

    debug!(entity = schema.entity, ?found, ?other, "Grouped selection set");
    Grouped { found, other }
}
