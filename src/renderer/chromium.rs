//! Chromium-based rendering surface using chromiumoxide.

use super::{Anchor, RenderSurface};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::path::PathBuf;

/// Find the Chromium binary path.
pub fn find_chromium() -> Option<PathBuf> {
    // 1. ARTLINK_CHROMIUM_PATH env
    if let Ok(p) = std::env::var("ARTLINK_CHROMIUM_PATH") {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }

    // 2. ~/.artlink/chromium/
    if let Some(home) = dirs::home_dir() {
        let candidates = if cfg!(target_os = "macos") {
            vec![
                home.join(".artlink/chromium/chrome-mac-arm64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing"),
                home.join(".artlink/chromium/chrome-mac-x64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing"),
                home.join(".artlink/chromium/chrome"),
            ]
        } else {
            vec![
                home.join(".artlink/chromium/chrome-linux64/chrome"),
                home.join(".artlink/chromium/chrome"),
            ]
        };
        for c in candidates {
            if c.exists() {
                return Some(c);
            }
        }
    }

    // 3. System PATH
    if let Ok(path) = which::which("google-chrome") {
        return Some(path);
    }
    if let Ok(path) = which::which("chromium") {
        return Some(path);
    }
    if let Ok(path) = which::which("chromium-browser") {
        return Some(path);
    }

    // 4. Common macOS locations
    if cfg!(target_os = "macos") {
        let common =
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if common.exists() {
            return Some(common);
        }
    }

    None
}

/// A headless Chromium page, owned for the duration of one harvest.
pub struct ChromiumSurface {
    browser: Browser,
    page: Page,
}

impl ChromiumSurface {
    /// Launch a headless Chromium instance and open a blank page.
    pub async fn launch() -> Result<Self> {
        let chrome_path = find_chromium().context(
            "Chromium not found. Install Chrome/Chromium or set ARTLINK_CHROMIUM_PATH.",
        )?;

        let config = BrowserConfig::builder()
            .chrome_executable(chrome_path)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .arg("--disable-background-networking")
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build browser config: {e}"))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch Chromium")?;

        // The handler must be polled for the browser's lifetime
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .context("failed to create page")?;

        Ok(Self { browser, page })
    }
}

#[async_trait]
impl RenderSurface for ChromiumSurface {
    async fn navigate(&mut self, url: &str, timeout_ms: u64) -> Result<()> {
        let result = tokio::time::timeout(
            std::time::Duration::from_millis(timeout_ms),
            self.page.goto(url),
        )
        .await;

        match result {
            Ok(Ok(_)) => {
                let _ = self.page.wait_for_navigation().await;
                Ok(())
            }
            Ok(Err(e)) => bail!("navigation failed: {e}"),
            Err(_) => bail!("navigation timed out after {timeout_ms}ms"),
        }
    }

    async fn evaluate(&mut self, script: &str) -> Result<serde_json::Value> {
        let result = self
            .page
            .evaluate(script)
            .await
            .context("JS evaluation failed")?;

        // Void expressions have no value; map them to null
        Ok(result.value().cloned().unwrap_or(serde_json::Value::Null))
    }

    async fn query_anchors(&mut self, href_prefix: &str) -> Result<Vec<Anchor>> {
        let selector = format!("a[href^='{href_prefix}']");
        let elements = self
            .page
            .find_elements(selector)
            .await
            .context("anchor query failed")?;

        let mut anchors = Vec::with_capacity(elements.len());
        for element in elements {
            let href = element.attribute("href").await.unwrap_or(None);
            let text = element.inner_text().await.unwrap_or(None);
            anchors.push(Anchor { href, text });
        }
        Ok(anchors)
    }

    async fn close(self: Box<Self>) -> Result<()> {
        let this = *self;
        let _ = this.page.close().await;
        // Browser process is killed when the handle drops
        drop(this.browser);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires Chromium to be installed
    async fn navigate_and_query_anchors() {
        let mut surface = Box::new(
            ChromiumSurface::launch()
                .await
                .expect("failed to launch browser"),
        );

        surface
            .navigate(
                "data:text/html,<a href='/asset/vase/1'> Vase </a><a href='/other/x'>Other</a>",
                10_000,
            )
            .await
            .expect("navigation failed");

        let height = surface
            .evaluate("document.body.scrollHeight")
            .await
            .expect("evaluation failed");
        assert!(height.as_i64().unwrap() > 0);

        let anchors = surface
            .query_anchors("/asset/")
            .await
            .expect("anchor query failed");
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].href.as_deref(), Some("/asset/vase/1"));
        assert_eq!(anchors[0].text.as_deref().map(str::trim), Some("Vase"));

        surface.close().await.expect("close failed");
    }
}
