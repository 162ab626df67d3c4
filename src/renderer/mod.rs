//! Rendering-surface abstraction for browser-driven harvesting.
//!
//! Defines the `RenderSurface` trait that abstracts over the browser engine
//! (currently Chromium via chromiumoxide) so the harvest loop can be tested
//! against deterministic fakes without a live browser.

pub mod chromium;

use anyhow::Result;
use async_trait::async_trait;

/// Raw readout of a discovery anchor. Either attribute may be missing;
/// the harvester owns the skip policy, not the surface.
#[derive(Debug, Clone)]
pub struct Anchor {
    /// Value of the `href` attribute, usually a relative path.
    pub href: Option<String>,
    /// Visible text of the element, untrimmed.
    pub text: Option<String>,
}

/// A single exclusively-owned browser page.
#[async_trait]
pub trait RenderSurface: Send {
    /// Navigate to a URL with a timeout.
    async fn navigate(&mut self, url: &str, timeout_ms: u64) -> Result<()>;

    /// Evaluate JavaScript in the page and return its value. Void
    /// expressions (e.g. `window.scrollTo`) yield `null`.
    async fn evaluate(&mut self, script: &str) -> Result<serde_json::Value>;

    /// Every anchor whose href attribute starts with `href_prefix`, in
    /// document order at the time of the call.
    async fn query_anchors(&mut self, href_prefix: &str) -> Result<Vec<Anchor>>;

    /// Close the surface, releasing the underlying page.
    async fn close(self: Box<Self>) -> Result<()>;
}
