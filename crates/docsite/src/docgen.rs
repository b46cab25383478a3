//! Docgen collaborator contract.
//!
//! The docgen service produces structured documentation metadata from
//! component source. This site only consumes the descriptors; generation
//! lives elsewhere. Descriptors arrive as JSON named after the component,
//! resolved against the configured docgen root.

use crate::config::SiteConfig;
use crate::fetch::fetch_bytes;
use anyhow::{Context as _, Error};
use log::debug;
use serde::{Deserialize, Serialize};

/// Documentation for a single component prop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDoc {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// The descriptor the docgen service produces for one component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocGen {
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub props: Vec<PropDoc>,
}

/// Fetch and decode the descriptor for a component.
///
/// This is the only asynchronous suspension point in page assembly: the page
/// render waits until the descriptor resolves.
///
/// # Errors
/// Returns an error if the descriptor cannot be fetched or decoded. Callers
/// that tolerate a missing descriptor downgrade the error themselves.
pub async fn docgen(component_name: &str, config: &SiteConfig) -> Result<DocGen, Error> {
    let url = config.docgen_url(component_name)?;
    debug!("fetching docgen descriptor for {component_name} from {url}");
    let data = fetch_bytes(&url).await?;
    let descriptor: DocGen = serde_json::from_slice(&data)
        .with_context(|| format!("Malformed docgen descriptor for {component_name}"))?;
    Ok(descriptor)
}
