//! CLI command implementations

pub mod files;
pub mod get;
pub mod pack;
pub mod project;
pub mod unpack;
