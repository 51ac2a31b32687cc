//! Materializing assets onto disk

use crate::asset::Asset;
use crate::classify::{ContentClassifier, ExtensionClassifier};
use crate::content::resolve_contents;
use crate::scan::checked_relative;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use themekit_core::{Result, ThemeError};

/// Writes assets below a theme root
#[derive(Debug, Clone)]
pub struct AssetWriter<C = ExtensionClassifier> {
    root: PathBuf,
    classifier: C,
}

impl AssetWriter<ExtensionClassifier> {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self::with_classifier(root, ExtensionClassifier::default())
    }
}

impl<C: ContentClassifier> AssetWriter<C> {
    pub fn with_classifier<P: AsRef<Path>>(root: P, classifier: C) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            classifier,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write the resolved contents of `asset` to `root/key`.
    ///
    /// Missing parent directories are created, but the root itself must
    /// already exist. Existing files are overwritten.
    pub fn write(&self, asset: &Asset) -> Result<PathBuf> {
        if !self.root.is_dir() {
            return Err(ThemeError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("theme root {} is not a directory", self.root.display()),
            )));
        }

        let path = self.root.join(checked_relative(&asset.key)?);
        let contents = resolve_contents(asset, &self.classifier)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &contents)?;

        tracing::debug!(key = %asset.key, bytes = contents.len(), "wrote asset");
        Ok(path)
    }
}

impl Asset {
    /// Write this asset below `root` with the default classification policy
    pub fn write<P: AsRef<Path>>(&self, root: P) -> Result<PathBuf> {
        AssetWriter::new(root).write(self)
    }
}
