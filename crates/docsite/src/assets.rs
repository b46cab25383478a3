//! Embedded docgen descriptors for the `plinth://` URL scheme.
//! This module maps known descriptor paths to embedded byte slices using
//! `include_bytes!`, so the site renders without any external docgen service
//! running.
//!
//! Paths are resolved relative to the crate's `assets/docgen` directory.

/// Return embedded bytes for a given docgen descriptor path.
///
/// Supported forms:
/// - "plinth://docgen/ModalAlert.json"
/// - path after the authority: "/ModalAlert.json"
/// - bare filename: "ModalAlert.json"
pub fn embedded_docgen_asset(path: &str) -> Option<&'static [u8]> {
    let normalized = normalize_path(path);
    match normalized {
        "ModalAlert.json" => Some(include_bytes!("../assets/docgen/ModalAlert.json")),
        "ButtonGroup.json" => Some(include_bytes!("../assets/docgen/ButtonGroup.json")),
        _ => None,
    }
}

/// Normalize descriptor path inputs to a bare filename.
fn normalize_path(input: &str) -> &str {
    let trimmed = input
        .strip_prefix("plinth://docgen/")
        .or_else(|| input.strip_prefix("plinth://docgen"))
        .unwrap_or(input);
    trimmed.strip_prefix('/').unwrap_or(trimmed)
}
