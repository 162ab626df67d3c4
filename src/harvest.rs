//! Harvester: drives a rendering surface until the page stops growing, then
//! extracts every asset anchor.
//!
//! The collection page loads more entries whenever the viewport reaches the
//! bottom, so the loop alternates scroll-to-bottom with a settle pause and
//! compares the document height against the previous round's measurement.
//! Equal heights mean the page has stopped growing. A page that never settles
//! is cut off by the round budget and extraction proceeds on whatever is
//! rendered; the output does not distinguish the two cases.

use crate::config::HarvestConfig;
use crate::renderer::{Anchor, RenderSurface};
use anyhow::{Context, Result};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

const SCROLL_TO_BOTTOM: &str = "window.scrollTo(0, document.body.scrollHeight)";
const MEASURE_HEIGHT: &str = "document.body.scrollHeight";

/// One discovered collection entry: trimmed anchor text plus absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarvestedItem {
    pub title: String,
    pub url: String,
}

/// Harvest every asset anchor from the collection page.
///
/// Navigation failures and pages without matching anchors degrade to an
/// empty list rather than an error; the surface is closed before returning
/// in every case.
pub async fn harvest(
    mut surface: Box<dyn RenderSurface>,
    config: &HarvestConfig,
) -> Vec<HarvestedItem> {
    let items = match run(surface.as_mut(), config).await {
        Ok(items) => items,
        Err(e) => {
            warn!("harvest failed, continuing with no items: {e:#}");
            Vec::new()
        }
    };
    if let Err(e) = surface.close().await {
        warn!("failed to close rendering surface: {e:#}");
    }
    items
}

async fn run(
    surface: &mut dyn RenderSurface,
    config: &HarvestConfig,
) -> Result<Vec<HarvestedItem>> {
    let start = Instant::now();
    info!("harvesting {}", config.collection_url);

    surface
        .navigate(&config.collection_url, config.nav_timeout_ms)
        .await?;

    scroll_until_settled(surface, config).await?;

    let anchors = surface.query_anchors(&config.asset_prefix).await?;
    let items = collect_items(&anchors, &config.origin);
    info!(
        "extracted {} items in {:.1}s",
        items.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(items)
}

/// Scroll-and-settle loop. The height measured right after navigation is the
/// baseline for round 1, so a fully loaded page converges after one round
/// and at least one comparison always runs.
async fn scroll_until_settled(
    surface: &mut dyn RenderSurface,
    config: &HarvestConfig,
) -> Result<()> {
    let mut last_height = measure_height(surface).await?;

    for round in 1..=config.max_scroll_rounds {
        surface.evaluate(SCROLL_TO_BOTTOM).await?;
        tokio::time::sleep(std::time::Duration::from_millis(config.settle_ms)).await;

        let height = measure_height(surface).await?;
        debug!("round {round}: height {last_height} -> {height}");
        if height == last_height {
            info!("page settled after {round} round(s) at height {height}");
            return Ok(());
        }
        last_height = height;
    }

    info!(
        "round budget ({}) exhausted at height {last_height}, extracting anyway",
        config.max_scroll_rounds
    );
    Ok(())
}

async fn measure_height(surface: &mut dyn RenderSurface) -> Result<i64> {
    let value = surface.evaluate(MEASURE_HEIGHT).await?;
    value
        .as_i64()
        .with_context(|| format!("document height was not an integer: {value}"))
}

/// Anchors missing an href or visible text are skipped; titles are trimmed
/// and hrefs absolutized against the origin.
fn collect_items(anchors: &[Anchor], origin: &str) -> Vec<HarvestedItem> {
    anchors
        .iter()
        .filter_map(|anchor| {
            let href = anchor.href.as_deref().filter(|h| !h.is_empty())?;
            let text = anchor.text.as_deref().filter(|t| !t.is_empty())?;
            Some(HarvestedItem {
                title: text.trim().to_string(),
                url: format!("{origin}{href}"),
            })
        })
        .collect()
}
