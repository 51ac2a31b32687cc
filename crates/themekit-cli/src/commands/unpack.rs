//! Unpack command

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use themekit_asset::{Asset, AssetWriter};

/// Outcome of writing a batch of assets
#[derive(Debug, Default)]
pub struct UnpackReport {
    pub written: usize,
    pub skipped: Vec<String>,
}

pub fn run(input: &str, dir: &str) -> Result<()> {
    let content =
        fs::read_to_string(input).with_context(|| format!("Failed to read '{}'", input))?;
    let assets: Vec<Asset> =
        serde_json::from_str(&content).with_context(|| format!("Invalid asset JSON in '{}'", input))?;

    let report = unpack(&assets, Path::new(dir))?;

    for key in &report.skipped {
        eprintln!("  ! skipped invalid asset '{}'", key);
    }
    println!("Wrote {} asset(s) to {}", report.written, dir);
    Ok(())
}

/// Write every valid asset below `root`, skipping invalid ones
pub fn unpack(assets: &[Asset], root: &Path) -> Result<UnpackReport> {
    let writer = AssetWriter::new(root);
    let mut report = UnpackReport::default();

    for asset in assets {
        if !asset.is_valid() {
            tracing::warn!(key = %asset.key, "skipping asset without key or content");
            report.skipped.push(asset.key.clone());
            continue;
        }
        writer
            .write(asset)
            .with_context(|| format!("Failed to write '{}'", asset.key))?;
        report.written += 1;
    }

    Ok(report)
}
