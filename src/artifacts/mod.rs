//! Plain data types and parsing
//!
//! - `branch`: validated branch names
//! - `command`: the git invocations gitpush issues
//! - `core`: errors and output plumbing
//! - `status`: porcelain status parsing and change summaries
//! - `workflow`: workflow stages, outcomes and the message prompt

pub mod branch;
pub mod command;
pub mod core;
pub mod status;
pub mod workflow;
