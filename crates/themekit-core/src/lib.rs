//! Themekit Core - Foundational types for theme synchronization
//!
//! This crate provides the types every other Themekit crate depends on:
//! - `ThemeError` and the `Result` alias
//! - `ContentHash` - SHA-256 checksums of resolved asset contents

mod error;
mod hash;

pub use error::{Result, ThemeError};
pub use hash::ContentHash;
