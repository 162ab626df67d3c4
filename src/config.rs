// Copyright 2026 Artlink Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tunable parameters for harvesting and matching, with documented defaults.

/// Default collection page: the Auckland War Memorial Museum assets view.
pub const DEFAULT_COLLECTION_URL: &str =
    "https://artsandculture.google.com/explore/collections/auckland-war-memorial-museum?c=assets";

/// Origin prepended to relative asset hrefs when building absolute URLs.
pub const DEFAULT_ORIGIN: &str = "https://artsandculture.google.com";

/// Href prefix identifying an individual asset page.
pub const DEFAULT_ASSET_PREFIX: &str = "/asset/";

/// Parameters of the scroll-and-settle harvest.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Collection page to harvest.
    pub collection_url: String,
    /// Origin prepended to relative anchor hrefs.
    pub origin: String,
    /// Anchors whose href starts with this prefix are collected.
    pub asset_prefix: String,
    /// Upper bound on scroll rounds. Pages that never stop growing are cut
    /// off here and extraction proceeds on whatever is rendered.
    pub max_scroll_rounds: u32,
    /// Pause after each scroll so lazily-loaded content can arrive.
    pub settle_ms: u64,
    /// Navigation timeout.
    pub nav_timeout_ms: u64,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            collection_url: DEFAULT_COLLECTION_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            asset_prefix: DEFAULT_ASSET_PREFIX.to_string(),
            max_scroll_rounds: 30,
            settle_ms: 2000,
            nav_timeout_ms: 30_000,
        }
    }
}

/// Parameters of the fuzzy-matching step.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Similarity floor on the [0, 100] scale. A candidate must score
    /// strictly above it to be attached.
    pub threshold: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { threshold: 75.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harvest_defaults() {
        let cfg = HarvestConfig::default();
        assert_eq!(cfg.max_scroll_rounds, 30);
        assert_eq!(cfg.settle_ms, 2000);
        assert_eq!(cfg.asset_prefix, "/asset/");
        assert!(cfg.collection_url.starts_with(cfg.origin.as_str()));
    }

    #[test]
    fn match_defaults() {
        assert_eq!(MatchConfig::default().threshold, 75.0);
    }
}
