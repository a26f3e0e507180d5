//! CLI command implementations.

pub mod generate;
pub mod list;
pub mod version;
