use serde::Serialize;

use crate::entity::{
    Attribute, AttributeType, EntitySchema, IndexDefinition, KeyDefinition, Record,
};

/// Type name of the interface shared by every job variant.
pub const JOB_INTERFACE: &str = "Job";

const BY_USER: IndexDefinition = IndexDefinition {
    name: "byUser",
    pk: KeyDefinition {
        field: "PK",
        composite: &["userId"],
    },
    sk: KeyDefinition {
        field: "SK",
        composite: &["jobId"],
    },
};

/// Attributes common to every job.
pub static JOB: EntitySchema = EntitySchema {
    entity: "job",
    version: "1",
    service: "job",
    attributes: &[
        Attribute {
            name: "userId",
            kind: AttributeType::String,
            required: true,
        },
        Attribute {
            name: "jobId",
            kind: AttributeType::String,
            required: true,
        },
        Attribute {
            name: "company",
            kind: AttributeType::String,
            required: true,
        },
        Attribute {
            name: "from",
            kind: AttributeType::Number,
            required: true,
        },
        Attribute {
            name: "to",
            kind: AttributeType::Number,
            required: true,
        },
    ],
    index: BY_USER,
};

pub static FULL_TIME_JOB: EntitySchema = EntitySchema {
    entity: "fullTimeJob",
    version: "1",
    service: "fullTimeJob",
    attributes: &[
        Attribute {
            name: "userId",
            kind: AttributeType::String,
            required: true,
        },
        Attribute {
            name: "jobId",
            kind: AttributeType::String,
            required: true,
        },
        Attribute {
            name: "company",
            kind: AttributeType::String,
            required: true,
        },
        Attribute {
            name: "from",
            kind: AttributeType::String,
            required: true,
        },
        Attribute {
            name: "to",
            kind: AttributeType::String,
            required: false,
        },
        Attribute {
            name: "pensionPlan",
            kind: AttributeType::Boolean,
            required: true,
        },
        Attribute {
            name: "yearlySalary",
            kind: AttributeType::Number,
            required: true,
        },
    ],
    index: BY_USER,
};

pub static CONTRACT_JOB: EntitySchema = EntitySchema {
    entity: "contractJob",
    version: "1",
    service: "contractJob",
    attributes: &[
        Attribute {
            name: "userId",
            kind: AttributeType::String,
            required: true,
        },
        Attribute {
            name: "jobId",
            kind: AttributeType::String,
            required: true,
        },
        Attribute {
            name: "company",
            kind: AttributeType::String,
            required: true,
        },
        Attribute {
            name: "from",
            kind: AttributeType::Number,
            required: true,
        },
        Attribute {
            name: "to",
            kind: AttributeType::Number,
            required: false,
        },
        Attribute {
            name: "hourlySalary",
            kind: AttributeType::Number,
            required: true,
        },
    ],
    index: BY_USER,
};

/// Job variants stored as their own entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    FullTime,
    Contract,
}

impl JobKind {
    pub const ALL: [JobKind; 2] = [JobKind::FullTime, JobKind::Contract];

    /// GraphQL type name, also used as the discriminator value.
    pub fn type_name(self) -> &'static str {
        match self {
            JobKind::FullTime => "FullTimeJob",
            JobKind::Contract => "ContractJob",
        }
    }

    pub fn schema(self) -> &'static EntitySchema {
        match self {
            JobKind::FullTime => &FULL_TIME_JOB,
            JobKind::Contract => &CONTRACT_JOB,
        }
    }

    pub fn tag(self, record: Record) -> JobRecord {
        match self {
            JobKind::FullTime => JobRecord::FullTimeJob(record),
            JobKind::Contract => JobRecord::ContractJob(record),
        }
    }
}

/// A fetched job, serialized with its variant under `__typename`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename")]
pub enum JobRecord {
    FullTimeJob(Record),
    ContractJob(Record),
}
