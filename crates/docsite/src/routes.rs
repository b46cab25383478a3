//! Route table for the documentation site.
//!
//! One page per documented component, reachable at a predictable path under
//! `/web/`. The audit harness navigates these paths directly.

use crate::docgen::DocGen;
use crate::model::Page;
use crate::pages;
use anyhow::{Error, anyhow};

/// A routable documentation page: its path, the component whose descriptor it
/// needs, and the pure constructor for its content.
#[derive(Debug, Clone, Copy)]
pub struct PageSpec {
    pub path: &'static str,
    pub component_name: &'static str,
    pub build: fn(Option<&DocGen>) -> Page,
}

/// The site's route table.
#[derive(Debug)]
pub struct Router {
    specs: Vec<PageSpec>,
}

impl Router {
    /// The full route table for the documented components.
    pub fn new() -> Self {
        Self {
            specs: vec![
                PageSpec {
                    path: "/web/modalalert",
                    component_name: "ModalAlert",
                    build: pages::modal_alert_page,
                },
                PageSpec {
                    path: "/web/buttongroup",
                    component_name: "ButtonGroup",
                    build: pages::button_group_page,
                },
            ],
        }
    }

    /// Resolve a path to its page spec.
    ///
    /// # Errors
    /// Returns an error for paths outside the route table.
    pub fn resolve(&self, path: &str) -> Result<&PageSpec, Error> {
        self.specs
            .iter()
            .find(|spec| spec.path == path)
            .ok_or_else(|| anyhow!("No documentation page at {path}"))
    }

    /// Every routable path, in table order.
    pub fn paths(&self) -> Vec<&'static str> {
        self.specs.iter().map(|spec| spec.path).collect()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
