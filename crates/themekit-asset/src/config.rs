//! Layered project configuration
//!
//! Config is loaded with three layers of precedence (highest wins):
//! 1. Environment variables: `THEMEKIT_DIRECTORY`, `THEMEKIT_IGNORE_FILES`
//! 2. Project-local: `<root>/.themekit/config.toml`
//! 3. Global: `~/.themekit/config.toml`

use crate::classify::ExtensionClassifier;
use crate::filter::{FilterSet, PatternFilter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use themekit_core::Result;

const CONFIG_DIR: &str = ".themekit";
const CONFIG_FILE: &str = "config.toml";

/// How a theme project maps onto the remote asset store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Subdirectory the project is scoped to
    #[serde(default)]
    pub directory: Option<String>,
    /// Inline ignore patterns
    #[serde(default)]
    pub ignore_files: Vec<String>,
    /// Files holding ignore patterns, relative to the project root
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub binary_extensions: Vec<String>,
    #[serde(default)]
    pub text_extensions: Vec<String>,
}

impl ProjectConfig {
    /// Load config for the project at `root`: global < project < env vars
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config.merge(Self::load_file(&global_path)?);
            }
        }

        let local_path = root.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);
        if local_path.exists() {
            config.merge(Self::load_file(&local_path)?);
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load config from a specific file, still honoring env overrides
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load_file(path.as_ref())?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Later layers replace the scope and extend every list
    fn merge(&mut self, other: Self) {
        if other.directory.is_some() {
            self.directory = other.directory;
        }
        self.ignore_files.extend(other.ignore_files);
        self.ignores.extend(other.ignores);
        self.binary_extensions.extend(other.binary_extensions);
        self.text_extensions.extend(other.text_extensions);
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var("THEMEKIT_DIRECTORY").ok(),
            std::env::var("THEMEKIT_IGNORE_FILES").ok(),
        );
    }

    fn apply_overrides(&mut self, directory: Option<String>, ignore_files: Option<String>) {
        if let Some(dir) = directory.filter(|d| !d.trim().is_empty()) {
            self.directory = Some(dir.trim().to_string());
        }
        if let Some(patterns) = ignore_files {
            self.ignore_files.extend(
                patterns
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from),
            );
        }
    }

    /// Default rules, inline patterns, then each pattern file under `root`
    pub fn build_filter<P: AsRef<Path>>(&self, root: P) -> Result<FilterSet> {
        let mut set = FilterSet::new().with(PatternFilter::defaults());
        if !self.ignore_files.is_empty() {
            set.push(PatternFilter::new(&self.ignore_files)?);
        }
        for file in &self.ignores {
            set.push(PatternFilter::from_file(root.as_ref().join(file))?);
        }
        Ok(set)
    }

    /// Classification policy with the configured extension overrides
    pub fn classifier(&self) -> ExtensionClassifier {
        ExtensionClassifier::new()
            .with_binary_extensions(&self.binary_extensions)
            .with_text_extensions(&self.text_extensions)
    }
}
