//! Page-level audit harness.
//!
//! Navigates a documentation route through the site, parses the page it
//! produced, and audits it. This is a pass/fail gate: a violation fails the
//! whole check and nothing is retried or triaged.

use crate::parser::parse_html;
use crate::rules::{AuditReport, audit};
use anyhow::{Error, anyhow};
use docsite::Site;
use log::info;

/// Render and audit one route.
///
/// # Errors
/// Returns an error if the route fails to render or parse; audit findings
/// are reported in the returned report, not as errors.
pub async fn audit_route(site: &mut Site, path: &str) -> Result<AuditReport, Error> {
    let html = site.render_route(path).await?;
    let dom = parse_html(&html)?;
    let report = audit(&dom);
    info!("audited {path}: {} violation(s)", report.violations.len());
    Ok(report)
}

/// Assert that a route renders an accessible page.
///
/// # Errors
/// Returns an error describing every violation when the audit finds any,
/// or if the route fails to render.
pub async fn expect_accessible_page(site: &mut Site, path: &str) -> Result<(), Error> {
    let report = audit_route(site, path).await?;
    if report.is_clean() {
        Ok(())
    } else {
        Err(anyhow!("Accessibility audit failed for {path}:\n{}", report.summary()))
    }
}
