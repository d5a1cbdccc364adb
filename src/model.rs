pub use job::{JobKind, JobRecord, CONTRACT_JOB, FULL_TIME_JOB, JOB, JOB_INTERFACE};
pub use user::USER;

pub mod job;
pub mod user;
