//! `artlink harvest` — print the harvested items without matching anything.

use crate::config::HarvestConfig;
use crate::harvest;
use crate::renderer::chromium::ChromiumSurface;
use anyhow::Result;

/// Run the harvest command. Items go to stdout, one tab-separated
/// title/URL pair per line, or a JSON array with `--json`.
pub async fn run(config: &HarvestConfig, json: bool, quiet: bool) -> Result<()> {
    let surface = Box::new(ChromiumSurface::launch().await?);
    let items = harvest::harvest(surface, config).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in &items {
            println!("{}\t{}", item.title, item.url);
        }
    }

    if !quiet {
        eprintln!("  [OK] {} items harvested", items.len());
    }
    Ok(())
}
