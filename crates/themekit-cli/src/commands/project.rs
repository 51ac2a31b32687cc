//! Shared project options and setup

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use themekit_asset::{AssetLoader, ExtensionClassifier, FilterSet, ProjectConfig};

#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Theme project root
    #[arg(long, default_value = ".")]
    pub dir: String,

    /// Restrict to a subdirectory of the root (e.g., assets)
    #[arg(long)]
    pub scope: Option<String>,

    /// Config file (defaults to <dir>/.themekit/config.toml and ~/.themekit/config.toml)
    #[arg(long)]
    pub config: Option<String>,
}

/// A theme project ready to load assets from
pub struct Project {
    pub root: PathBuf,
    pub scope: Option<String>,
    pub filter: FilterSet,
    pub loader: AssetLoader<ExtensionClassifier>,
}

impl Project {
    pub fn open(args: &ProjectArgs) -> Result<Self> {
        let root = PathBuf::from(&args.dir);
        let config = match &args.config {
            Some(path) => ProjectConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config '{}'", path))?,
            None => ProjectConfig::load(&root).context("Failed to load project config")?,
        };

        let filter = config
            .build_filter(&root)
            .context("Failed to build ignore rules")?;
        let scope = args.scope.clone().or_else(|| config.directory.clone());

        Ok(Self {
            loader: AssetLoader::with_classifier(config.classifier()),
            root,
            scope,
            filter,
        })
    }

    pub fn load_all(&self) -> Result<Vec<themekit_asset::Asset>> {
        self.loader
            .load_assets_from_directory(&self.root, self.scope.as_deref(), &self.filter)
            .with_context(|| format!("Failed to load assets from '{}'", self.root.display()))
    }
}
