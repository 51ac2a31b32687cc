//! Building assets from files on disk

use crate::asset::{Asset, AssetContent, Attachment};
use crate::classify::{ContentClassifier, ExtensionClassifier};
use crate::filter::IgnoreFilter;
use crate::scan::{checked_relative, path_to_key, relative_key, scan};
use std::fs;
use std::path::Path;
use themekit_core::{Result, ThemeError};

impl Asset {
    /// Build an asset from file bytes, classifying them with `classifier`
    pub fn from_bytes(
        key: impl Into<String>,
        bytes: Vec<u8>,
        classifier: &dyn ContentClassifier,
    ) -> Self {
        let key = key.into();
        let content = if classifier.is_binary(&key, &bytes) {
            AssetContent::Binary(Attachment::encode(&bytes))
        } else {
            match String::from_utf8(bytes) {
                Ok(text) => AssetContent::Text(text),
                Err(e) => AssetContent::Binary(Attachment::encode(e.as_bytes())),
            }
        };
        Asset { key, content }
    }
}

/// Loads theme files as assets using a classification policy
#[derive(Debug, Clone, Default)]
pub struct AssetLoader<C = ExtensionClassifier> {
    classifier: C,
}

impl AssetLoader<ExtensionClassifier> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: ContentClassifier> AssetLoader<C> {
    /// Create a loader with a custom classification policy
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Load the file at `root/key`.
    ///
    /// Fails with `IsADirectory` when the key names a directory and with
    /// `InvalidAsset` when the key points outside `root`.
    pub fn load_asset<P: AsRef<Path>>(&self, root: P, key: &str) -> Result<Asset> {
        let relative = checked_relative(key)?;
        let path = root.as_ref().join(relative);
        if fs::metadata(&path)?.is_dir() {
            return Err(ThemeError::IsADirectory(path));
        }

        let bytes = fs::read(&path)?;
        let asset = Asset::from_bytes(path_to_key(relative), bytes, &self.classifier);
        tracing::trace!(key = %asset.key, binary = asset.content.is_binary(), "loaded asset");
        Ok(asset)
    }

    /// Load every file under `root`, or under `root/scope` when given.
    ///
    /// Keys stay relative to `root`. Directories and keys the filter
    /// ignores are skipped; any read failure fails the whole call.
    pub fn load_assets_from_directory<P, F>(
        &self,
        root: P,
        scope: Option<&str>,
        filter: &F,
    ) -> Result<Vec<Asset>>
    where
        P: AsRef<Path>,
        F: IgnoreFilter + ?Sized,
    {
        let root = root.as_ref();
        let scan_root = match scope {
            Some(scope) if !scope.is_empty() => root.join(checked_relative(scope)?),
            _ => root.to_path_buf(),
        };

        let mut assets = Vec::new();
        let mut ignored = 0usize;
        for entry in scan(&scan_root)? {
            if entry.is_dir {
                continue;
            }
            let Some(key) = relative_key(root, &entry.path) else {
                continue;
            };
            if filter.is_ignored(&key) {
                tracing::trace!(key = %key, "ignored");
                ignored += 1;
                continue;
            }
            assets.push(self.load_asset(root, &key)?);
        }

        tracing::debug!(
            root = %scan_root.display(),
            loaded = assets.len(),
            ignored,
            "loaded assets from directory"
        );
        Ok(assets)
    }
}

/// Load `root/key` with the default classification policy
pub fn load_asset<P: AsRef<Path>>(root: P, key: &str) -> Result<Asset> {
    AssetLoader::new().load_asset(root, key)
}

/// Load a directory tree with the default classification policy
pub fn load_assets_from_directory<P, F>(
    root: P,
    scope: Option<&str>,
    filter: &F,
) -> Result<Vec<Asset>>
where
    P: AsRef<Path>,
    F: IgnoreFilter + ?Sized,
{
    AssetLoader::new().load_assets_from_directory(root, scope, filter)
}
