use anyhow::Error;
use widgets::markup;
use widgets::{ActionSpec, ContainerConfig, Dimension, ModalAlertSpec, Overflow, WidgetKind, WidgetTree};

/// Defaults follow the component contract: full height, auto overflow.
#[test]
fn container_defaults() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = ContainerConfig::default();
    assert_eq!(config.height, Dimension::Pct(100.0));
    assert_eq!(config.overflow, Overflow::Auto);
    assert_eq!(config.style(), "height: 100%; overflow: auto");
    Ok(())
}

/// Every overflow mode renders without error and lands in the emitted style.
#[test]
fn container_renders_for_all_overflow_modes() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    for overflow in Overflow::ALL {
        let mut tree = WidgetTree::new();
        let config = ContainerConfig { height: Dimension::Px(300.0), overflow };
        let container =
            tree.insert(tree.root(), WidgetKind::ScrollBoundary { config })?;
        tree.insert(container, WidgetKind::Paragraph)?;

        let html = markup::fragment(&tree, container)?;
        assert!(html.contains("height: 300px"), "missing height in {html}");
        assert!(html.contains(overflow.to_css()), "missing {:?} in {html}", overflow);
        assert!(html.contains("data-scroll-boundary"), "missing marker in {html}");
    }
    Ok(())
}

#[test]
fn document_shell_carries_lang_and_title() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tree = WidgetTree::new();
    let heading = tree.insert(tree.root(), WidgetKind::Heading { level: 1 })?;
    tree.insert(heading, WidgetKind::Text { text: "Overview".to_owned() })?;

    let html = markup::document(&tree, "en", "Overview · Plinth")?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<title>Overview · Plinth</title>"));
    assert!(html.contains("<h1>Overview</h1>"));
    Ok(())
}

/// Text and attribute content is escaped on the way out.
#[test]
fn markup_escapes_content() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tree = WidgetTree::new();
    let para = tree.insert(tree.root(), WidgetKind::Paragraph)?;
    tree.insert(para, WidgetKind::Text { text: "a < b & \"c\"".to_owned() })?;
    let link = tree.insert(
        tree.root(),
        WidgetKind::Link { href: "/web/modal?x=1&y=\"2\"".to_owned() },
    )?;
    tree.insert(link, WidgetKind::Text { text: "details".to_owned() })?;

    let html = markup::document(&tree, "en", "Escaping")?;
    assert!(html.contains("a &lt; b &amp; \"c\""));
    assert!(html.contains("href=\"/web/modal?x=1&amp;y=&quot;2&quot;\""));
    Ok(())
}

/// Dialog markup carries its spoken label and renders the dismissing action
/// before the confirming one.
#[test]
fn modal_alert_markup_contract() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let spec = ModalAlertSpec::new(
        "Delete board 70s Furniture",
        "Delete this board",
        ActionSpec::new("Yes, delete", "Confirm delete board"),
    )
    .with_secondary_action(ActionSpec::new("No, keep", "Cancel board deletion"));

    let mut tree = WidgetTree::new();
    let modal = tree.insert(tree.root(), WidgetKind::ModalAlert { spec })?;
    let body = tree.insert(modal, WidgetKind::Paragraph)?;
    tree.insert(
        body,
        WidgetKind::Text { text: "Your board and all of its Pins will be deleted forever.".to_owned() },
    )?;

    let html = markup::fragment(&tree, modal)?;
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("aria-label=\"Delete board 70s Furniture\""));
    assert!(html.contains("<h2>Delete this board</h2>"));
    let cancel = html.find("No, keep").ok_or_else(|| anyhow::anyhow!("missing secondary"))?;
    let confirm = html.find("Yes, delete").ok_or_else(|| anyhow::anyhow!("missing primary"))?;
    assert!(cancel < confirm, "secondary action should render first");
    Ok(())
}

/// Images always carry their alternative text, even when it is the
/// deliberate empty decorative marker.
#[test]
fn image_markup_always_emits_alt() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tree = WidgetTree::new();
    tree.insert(
        tree.root(),
        WidgetKind::Image { src: "logo.png".to_owned(), alt: "Logo".to_owned() },
    )?;
    tree.insert(
        tree.root(),
        WidgetKind::Image { src: "divider.png".to_owned(), alt: String::new() },
    )?;

    let html = markup::document(&tree, "en", "Images")?;
    assert!(html.contains("<img src=\"logo.png\" alt=\"Logo\">"));
    assert!(html.contains("<img src=\"divider.png\" alt=\"\">"));
    Ok(())
}

/// Button groups wrap their buttons in a group role.
#[test]
fn button_group_markup() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tree = WidgetTree::new();
    let group = tree.insert(tree.root(), WidgetKind::ButtonGroup)?;
    for label in ["Follow", "Save"] {
        let button = tree.insert(group, WidgetKind::Button)?;
        tree.insert(button, WidgetKind::Text { text: label.to_owned() })?;
    }

    let html = markup::fragment(&tree, group)?;
    assert!(html.contains("role=\"group\""));
    assert!(html.contains("<button type=\"button\">Follow</button>"));
    assert!(html.contains("<button type=\"button\">Save</button>"));
    Ok(())
}
