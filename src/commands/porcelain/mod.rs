//! User-facing operations
//!
//! - `status`: repository inspection (branch, status, recent history)
//! - `commit`: the stage/commit/push workflow
//! - `settings`: saving and showing the persisted settings

pub mod commit;
pub mod settings;
pub mod status;
