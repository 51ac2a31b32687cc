//! Themekit Asset - the local side of theme synchronization
//!
//! This crate maps a directory tree of theme source files onto the remote
//! asset store's `{key, value, attachment}` records and back again:
//! scanning, ignore filtering, loading, content resolution and writing.

mod asset;
mod classify;
mod config;
mod content;
mod filter;
mod loader;
mod scan;
mod writer;

#[cfg(test)]
mod fixtures;

pub use asset::{Asset, AssetContent, Attachment};
pub use classify::{
    is_json_key, ContentClassifier, ExtensionClassifier, DEFAULT_BINARY_EXTENSIONS,
    DEFAULT_TEXT_EXTENSIONS,
};
pub use config::ProjectConfig;
pub use content::{normalize_json, resolve_contents};
pub use filter::{AcceptAll, FilterSet, IgnoreFilter, PatternFilter, DEFAULT_IGNORES};
pub use loader::{load_asset, load_assets_from_directory, AssetLoader};
pub use scan::{find_all_files, relative_key, scan, ScanEntry};
pub use writer::AssetWriter;
