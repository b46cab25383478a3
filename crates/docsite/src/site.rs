//! Site orchestrator: route rendering and static site builds.

use crate::config::SiteConfig;
use crate::docgen::docgen;
use crate::routes::Router;
use crate::telemetry::{SiteCounters, counters_json, maybe_emit};
use anyhow::{Error, anyhow};
use log::{debug, info, warn};
use std::path::Path;
use std::time::Instant;
use widgets::markup;

/// The documentation site: a route table plus the configuration and counters
/// shared by every render.
#[derive(Debug)]
pub struct Site {
    router: Router,
    config: SiteConfig,
    counters: SiteCounters,
}

impl Site {
    pub fn new(config: SiteConfig) -> Self {
        Self { router: Router::new(), config, counters: SiteCounters::default() }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn counters(&self) -> &SiteCounters {
        &self.counters
    }

    /// Render the page at `path` to a complete HTML document.
    ///
    /// Page assembly suspends on the docgen fetch. A descriptor that fails to
    /// resolve downgrades to an absent one with a warning, so the page still
    /// renders its full section sequence with empty header fields.
    ///
    /// # Errors
    /// Returns an error for unknown routes or if lowering/emission fails.
    pub async fn render_route(&mut self, path: &str) -> Result<String, Error> {
        let spec = *self.router.resolve(path)?;
        let render_started = Instant::now();

        let fetch_started = Instant::now();
        let descriptor = match docgen(spec.component_name, &self.config).await {
            Ok(descriptor) => Some(descriptor),
            Err(err) => {
                warn!("No docgen descriptor for {}: {err:#}", spec.component_name);
                self.counters.docgen_misses += 1;
                None
            }
        };
        self.counters.docgen_fetch_ms_total += fetch_started.elapsed().as_millis() as u64;

        let page = (spec.build)(descriptor.as_ref());
        let tree = page.lower()?;
        let html = markup::document(&tree, "en", &page.title)?;

        self.counters.pages_rendered += 1;
        self.counters.sections_emitted += page.section_count() as u64;
        self.counters.cards_emitted += page.card_count() as u64;
        self.counters.render_ms_total += render_started.elapsed().as_millis() as u64;
        debug!("rendered {path} ({} sections)", page.section_count());
        maybe_emit(self.config.telemetry_enabled, &counters_json(&self.counters)?);
        Ok(html)
    }

    /// Render every route to `<out_dir>/web/<name>.html`.
    ///
    /// # Errors
    /// Returns an error if any route fails to render or write.
    pub async fn build(&mut self, out_dir: &Path) -> Result<usize, Error> {
        let mut written = 0;
        for path in self.router.paths() {
            let html = self.render_route(path).await?;
            let relative = path.trim_start_matches('/');
            let file = out_dir.join(relative).with_extension("html");
            let parent = file
                .parent()
                .ok_or_else(|| anyhow!("Output path {} has no parent", file.display()))?;
            tokio::fs::create_dir_all(parent).await?;
            tokio::fs::write(&file, html).await?;
            info!("wrote {}", file.display());
            written += 1;
        }
        Ok(written)
    }
}
