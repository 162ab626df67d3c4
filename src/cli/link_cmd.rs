//! `artlink link <input> <output>` — harvest the collection page and
//! annotate a catalog CSV with matched asset URLs.

use crate::catalog::{Catalog, URL_COLUMN};
use crate::config::{HarvestConfig, MatchConfig};
use crate::harvest;
use crate::reconcile;
use crate::renderer::chromium::ChromiumSurface;
use anyhow::Result;
use std::path::Path;
use tracing::warn;

/// Run the link command.
pub async fn run(
    input: &Path,
    output: &Path,
    harvest_cfg: &HarvestConfig,
    match_cfg: &MatchConfig,
    quiet: bool,
) -> Result<()> {
    let catalog = Catalog::read(input)?;
    if !quiet {
        eprintln!(
            "  Loaded {} catalog rows from {}",
            catalog.len(),
            input.display()
        );
    }

    // A missing browser degrades like an unreachable page: the run still
    // completes and writes an all-absent URL column.
    let items = match ChromiumSurface::launch().await {
        Ok(surface) => harvest::harvest(Box::new(surface), harvest_cfg).await,
        Err(e) => {
            warn!("browser unavailable, continuing with no items: {e:#}");
            Vec::new()
        }
    };

    if !quiet {
        if items.is_empty() {
            eprintln!("  [!!] No items harvested; every {URL_COLUMN} cell will be empty");
        } else {
            eprintln!("  Harvested {} items from the collection page", items.len());
        }
    }

    let urls = reconcile::reconcile(&catalog.titles(), &items, match_cfg.threshold);
    let matched = urls.iter().filter(|u| u.is_some()).count();

    catalog.write_annotated(output, &urls)?;
    if !quiet {
        eprintln!(
            "  [OK] {matched} of {} rows matched; wrote {}",
            catalog.len(),
            output.display()
        );
    }
    Ok(())
}
