//! Recursive directory scanning

use std::path::{Component, Path, PathBuf};
use themekit_core::{Result, ThemeError};
use walkdir::WalkDir;

/// One path discovered under a scan root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// List every file and directory below `root`, depth first.
///
/// Siblings are visited in file name order so an unchanged tree always
/// produces the same listing. The root itself is not included.
pub fn scan<P: AsRef<Path>>(root: P) -> Result<Vec<ScanEntry>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(ThemeError::NotADirectory(root.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.into_path();
        // Follows symlinks so a linked directory is never read as a file
        let is_dir = path.is_dir();
        entries.push(ScanEntry { path, is_dir });
    }

    tracing::debug!(root = %root.display(), entries = entries.len(), "scanned theme directory");
    Ok(entries)
}

/// Paths of every file and directory below `root`
pub fn find_all_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    Ok(scan(root)?.into_iter().map(|e| e.path).collect())
}

/// Key of `path` relative to `root`, joined with forward slashes.
///
/// Returns `None` when `path` is not below `root`.
pub fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let key = path_to_key(relative);
    (!key.is_empty()).then_some(key)
}

/// Check that `key` names a path below a theme root.
///
/// Only normal components (and `.`) are allowed, so `..`, rooted and
/// prefixed paths are rejected.
pub(crate) fn checked_relative(key: &str) -> Result<&Path> {
    let relative = Path::new(key);
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(ThemeError::InvalidAsset(format!(
            "key '{}' points outside the theme root",
            key
        )));
    }
    Ok(relative)
}

/// Join the normal components of a relative path with `/`
pub(crate) fn path_to_key(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
