//! Command implementations
//!
//! gitpush only has porcelain commands: each one composes git invocations
//! into an operation a user triggers directly.

pub mod porcelain;
