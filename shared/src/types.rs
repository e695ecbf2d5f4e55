//! Common types for the shared crate

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Issue identifier. Seed data uses small integers, submitted reports use
/// snowflake ids; both fit in a JavaScript safe integer.
pub type IssueId = i64;
