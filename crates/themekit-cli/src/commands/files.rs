//! Files command

use super::project::{Project, ProjectArgs};
use anyhow::Result;
use themekit_asset::resolve_contents;

pub fn run(args: &ProjectArgs) -> Result<()> {
    let project = Project::open(args)?;
    let assets = project.load_all()?;

    for asset in &assets {
        let contents = resolve_contents(asset, project.loader.classifier());
        match contents {
            Ok(bytes) => {
                let checksum = themekit_core::ContentHash::from_bytes(&bytes);
                println!(
                    "{}\t{}\t{}\t{}",
                    &checksum.to_hex()[..12],
                    if asset.content.is_binary() { "binary" } else { "text" },
                    bytes.len(),
                    asset.key
                );
            }
            Err(e) => eprintln!("  ! {}: {}", asset.key, e),
        }
    }

    println!("{} file(s)", assets.len());
    Ok(())
}
