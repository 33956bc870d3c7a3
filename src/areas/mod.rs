//! Stateful building blocks
//!
//! - `repository`: the working tree an operation targets
//! - `runner`: execution of the external git executable
//! - `settings`: the persisted settings file

pub mod repository;
pub mod runner;
pub mod settings;
