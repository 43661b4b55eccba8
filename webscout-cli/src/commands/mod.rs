//! CLI command implementations

pub mod serve;
