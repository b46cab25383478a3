use a11y::audit;
use anyhow::Error;

mod common;

/// A page built to satisfy every rule audits clean.
#[test]
fn clean_fixture_has_no_violations() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let dom = common::parse_fixture("clean.html")?;
    let report = audit(&dom);
    assert!(report.is_clean(), "unexpected violations:\n{}", report.summary());
    Ok(())
}

/// Every rule fires on the deliberately broken page.
#[test]
fn broken_fixture_trips_every_rule() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let dom = common::parse_fixture("broken.html")?;
    let report = audit(&dom);

    let fired: Vec<&str> = report.violations.iter().map(|violation| violation.rule).collect();
    for rule in [
        "document-title",
        "html-lang",
        "image-alt",
        "button-name",
        "link-name",
        "heading-order",
        "duplicate-id",
        "dialog-name",
    ] {
        assert!(fired.contains(&rule), "rule {rule} did not fire; got {fired:?}");
    }
    Ok(())
}

/// The decorative empty-alt marker is allowed; a missing attribute is not.
#[test]
fn empty_alt_is_decorative_not_violation() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let dom = a11y::parse_html(
        "<!DOCTYPE html><html lang=\"en\"><head><title>t</title></head>\
         <body><h1>t</h1><img src=\"a.png\" alt=\"\"></body></html>",
    )?;
    let report = audit(&dom);
    assert!(report.is_clean(), "unexpected violations:\n{}", report.summary());
    Ok(())
}

/// Heading levels may restart upward but never skip downward levels.
#[test]
fn heading_order_allows_restarts() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let dom = a11y::parse_html(
        "<!DOCTYPE html><html lang=\"en\"><head><title>t</title></head>\
         <body><h1>a</h1><h2>b</h2><h3>c</h3><h2>d</h2><h3>e</h3></body></html>",
    )?;
    let report = audit(&dom);
    assert!(report.is_clean(), "unexpected violations:\n{}", report.summary());
    Ok(())
}
