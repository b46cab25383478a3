use a11y::{ax_tree_snapshot, parse_html};
use anyhow::Error;
use widgets::{ActionSpec, ModalAlertSpec, WidgetKind, WidgetTree, markup};

mod common;

/// Verify that the AX snapshot JSON contains expected roles for simple
/// elements.
#[test]
fn ax_tree_contains_basic_roles() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let dom = common::parse_fixture("clean.html")?;
    let ax = ax_tree_snapshot(&dom)?;

    assert!(ax.contains("\"role\":\"button\""), "AX should include a button role: {ax}");
    assert!(ax.contains("\"role\":\"img\""), "AX should include an img role: {ax}");
    assert!(ax.contains("\"role\":\"dialog\""), "AX should include a dialog role: {ax}");
    assert!(ax.contains("Save the board"), "AX should include aria-label as name: {ax}");
    assert!(ax.contains("Logo"), "AX should include alt text as name: {ax}");
    Ok(())
}

/// An explicit role attribute overrides the tag mapping.
#[test]
fn role_attribute_overrides_tag() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let dom = parse_html(
        "<!DOCTYPE html><html lang=\"en\"><head><title>t</title></head>\
         <body><div role=\"group\"><span role=\"button\" aria-label=\"Go\"></span></div></body></html>",
    )?;
    let ax = ax_tree_snapshot(&dom)?;
    assert!(ax.contains("\"role\":\"group\""), "missing group role: {ax}");
    assert!(ax.contains("\"role\":\"button\""), "missing overridden button role: {ax}");
    Ok(())
}

/// Emitted ModalAlert markup round-trips into the expected dialog subtree.
#[test]
fn modal_alert_markup_projects_to_dialog() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let spec = ModalAlertSpec::new(
        "Delete board 70s Furniture",
        "Delete this board",
        ActionSpec::new("Yes, delete", "Confirm delete board"),
    )
    .with_secondary_action(ActionSpec::new("No, keep", "Cancel board deletion"));

    let mut tree = WidgetTree::new();
    tree.insert(tree.root(), WidgetKind::ModalAlert { spec })?;
    let html = markup::document(&tree, "en", "ModalAlert demo")?;

    let dom = parse_html(&html)?;
    let ax = ax_tree_snapshot(&dom)?;
    assert!(ax.contains("\"role\":\"dialog\""), "missing dialog: {ax}");
    assert!(ax.contains("Delete board 70s Furniture"), "missing modal label: {ax}");
    assert!(ax.contains("\"role\":\"heading\""), "missing heading: {ax}");
    assert!(ax.contains("Confirm delete board"), "missing action label: {ax}");
    Ok(())
}
