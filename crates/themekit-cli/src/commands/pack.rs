//! Pack command

use super::project::{Project, ProjectArgs};
use anyhow::{Context, Result};
use themekit_asset::Asset;

pub fn run(args: &ProjectArgs, pretty: bool) -> Result<()> {
    let project = Project::open(args)?;
    let assets = valid_assets(project.load_all()?);

    let output = if pretty {
        serde_json::to_string_pretty(&assets)
    } else {
        serde_json::to_string(&assets)
    }
    .context("Failed to serialize assets")?;

    println!("{}", output);
    Ok(())
}

/// Drop assets the remote store would reject, such as empty files
pub fn valid_assets(assets: Vec<Asset>) -> Vec<Asset> {
    assets
        .into_iter()
        .filter(|asset| {
            let valid = asset.is_valid();
            if !valid {
                tracing::warn!(key = %asset.key, "skipping asset without key or content");
            }
            valid
        })
        .collect()
}
