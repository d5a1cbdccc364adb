use serde_json::Value;

/// Primitive type tag of a stored attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Number,
    Boolean,
}

impl AttributeType {
    pub fn name(self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Number => "number",
            AttributeType::Boolean => "boolean",
        }
    }

    pub fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (AttributeType::String, Value::String(_))
                | (AttributeType::Number, Value::Number(_))
                | (AttributeType::Boolean, Value::Bool(_))
        )
    }
}

#[derive(Debug)]
pub struct Attribute {
    pub name: &'static str,
    pub kind: AttributeType,
    pub required: bool,
}

/// A key field and the attributes it is composed of, in order.
#[derive(Debug)]
pub struct KeyDefinition {
    pub field: &'static str,
    pub composite: &'static [&'static str],
}

#[derive(Debug)]
pub struct IndexDefinition {
    pub name: &'static str,
    pub pk: KeyDefinition,
    pub sk: KeyDefinition,
}

/// Static description of an entity kind stored in the single table.
#[derive(Debug)]
pub struct EntitySchema {
    pub entity: &'static str,
    pub version: &'static str,
    pub service: &'static str,
    pub attributes: &'static [Attribute],
    pub index: IndexDefinition,
}

impl EntitySchema {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attribute| attribute.name == name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes.iter().map(|attribute| attribute.name)
    }
}
