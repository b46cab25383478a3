use a11y::expect_accessible_page;
use anyhow::Error;
use docsite::{Site, SiteConfig};
use tokio::runtime::Runtime;

/// ModalAlert accessibility check.
#[test]
fn modal_alert_page_is_accessible() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let rt = Runtime::new()?;
    let mut site = Site::new(SiteConfig::default());
    rt.block_on(expect_accessible_page(&mut site, "/web/modalalert"))?;
    Ok(())
}
