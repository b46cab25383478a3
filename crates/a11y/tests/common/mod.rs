#![allow(dead_code)]
use a11y::PageDom;
use a11y::parse_html;
use anyhow::{Result, anyhow};
use std::fs;
use std::path::PathBuf;

/// Returns the directory containing HTML fixtures for integration tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Load and parse a fixture page by file name.
pub fn parse_fixture(name: &str) -> Result<PageDom> {
    let path = fixtures_dir().join(name);
    let html = fs::read_to_string(&path)
        .map_err(|err| anyhow!("Failed to read fixture {}: {err}", path.display()))?;
    parse_html(&html)
}
