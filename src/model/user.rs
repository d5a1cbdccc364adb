use crate::entity::{Attribute, AttributeType, EntitySchema, IndexDefinition, KeyDefinition};

pub static USER: EntitySchema = EntitySchema {
    entity: "user",
    version: "1",
    service: "user",
    attributes: &[
        Attribute {
            name: "userId",
            kind: AttributeType::String,
            required: true,
        },
        Attribute {
            name: "email",
            kind: AttributeType::String,
            required: true,
        },
        Attribute {
            name: "location",
            kind: AttributeType::String,
            required: true,
        },
        Attribute {
            name: "firstName",
            kind: AttributeType::String,
            required: true,
        },
        Attribute {
            name: "lastName",
            kind: AttributeType::String,
            required: true,
        },
        Attribute {
            name: "role",
            kind: AttributeType::String,
            required: true,
        },
    ],
    index: IndexDefinition {
        name: "byUser",
        pk: KeyDefinition {
            field: "PK",
            composite: &["userId"],
        },
        sk: KeyDefinition {
            field: "SK",
            composite: &["email"],
        },
    },
};
