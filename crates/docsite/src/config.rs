//! Configuration settings for the documentation site.
//!
//! Controls where docgen descriptors are fetched from and whether telemetry
//! counters are emitted. Configuration can be loaded from environment
//! variables or constructed programmatically.

use anyhow::{Error, anyhow};
use std::env;
use url::Url;

/// Default location of docgen descriptors: assets embedded in the binary.
pub const DEFAULT_DOCGEN_ROOT: &str = "plinth://docgen/";

/// Runtime configuration for site assembly.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Base URL the docgen descriptors are resolved against.
    /// Supports `plinth://` (embedded), `file://`, and `http(s)://` roots.
    pub docgen_root: Url,
    /// Whether to emit telemetry counter lines after rendering.
    pub telemetry_enabled: bool,
}

impl SiteConfig {
    /// Construct a `SiteConfig` with explicit values.
    #[must_use]
    pub fn new(docgen_root: Url, telemetry_enabled: bool) -> Self {
        Self { docgen_root, telemetry_enabled }
    }

    /// Load configuration from environment variables.
    ///
    /// - `PLINTH_DOCGEN_ROOT`: base URL for docgen descriptors
    ///   (default: embedded assets)
    /// - `PLINTH_TELEMETRY`: set to "1" to emit telemetry counters
    ///
    /// An unparseable root URL falls back to the embedded default with a
    /// warning rather than failing startup.
    #[must_use]
    pub fn from_env() -> Self {
        let docgen_root = env::var("PLINTH_DOCGEN_ROOT")
            .ok()
            .and_then(|raw| match Url::parse(&raw) {
                Ok(url) => Some(url),
                Err(err) => {
                    log::warn!("Ignoring invalid PLINTH_DOCGEN_ROOT {raw:?}: {err}");
                    None
                }
            })
            .unwrap_or_else(default_docgen_root);
        let telemetry_enabled = env::var("PLINTH_TELEMETRY").ok().as_deref() == Some("1");
        Self { docgen_root, telemetry_enabled }
    }

    /// Resolve the descriptor URL for a component name.
    ///
    /// # Errors
    /// Returns an error if the name does not join onto the configured root.
    pub fn docgen_url(&self, component_name: &str) -> Result<Url, Error> {
        self.docgen_root
            .join(&format!("{component_name}.json"))
            .map_err(|err| anyhow!("Cannot resolve docgen URL for {component_name}: {err}"))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { docgen_root: default_docgen_root(), telemetry_enabled: false }
    }
}

// The default is a compile-time literal; parsing it cannot fail.
#[allow(clippy::unwrap_used, reason = "constant URL literal")]
fn default_docgen_root() -> Url {
    Url::parse(DEFAULT_DOCGEN_ROOT).unwrap()
}
