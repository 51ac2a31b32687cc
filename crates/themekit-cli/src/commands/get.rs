//! Get command

use super::project::{Project, ProjectArgs};
use anyhow::{Context, Result};

pub fn run(key: &str, args: &ProjectArgs) -> Result<()> {
    let project = Project::open(args)?;

    let asset = match project.loader.load_asset(&project.root, key) {
        Ok(asset) => asset,
        Err(e) if e.is_dir() => {
            anyhow::bail!("'{}' is a directory; use `theme files --scope {}`", key, key)
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to load '{}'", key)),
    };

    let output = serde_json::to_string_pretty(&asset).context("Failed to serialize asset")?;
    println!("{}", output);
    Ok(())
}
