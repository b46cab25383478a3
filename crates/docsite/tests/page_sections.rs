use anyhow::Error;
use docsite::docgen::DocGen;
use docsite::pages::{button_group_page, modal_alert_page};
use widgets::markup;

/// The fixed heading sequence every guideline page renders.
const FIXED_SECTIONS: [&str; 8] = [
    "Usage guidelines",
    "Best practices",
    "Accessibility",
    "Localization",
    "Variants",
    "Writing",
    "Component quality checklist",
    "Related",
];

fn descriptor() -> DocGen {
    DocGen {
        display_name: "ModalAlert".to_owned(),
        description: "A simple modal dialog used to alert a user of an issue.".to_owned(),
        props: Vec::new(),
    }
}

#[test]
fn modal_alert_page_renders_all_sections_with_descriptor() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let descriptor = descriptor();
    let page = modal_alert_page(Some(&descriptor));
    let html = markup::document(&page.lower()?, "en", &page.title)?;

    for section in FIXED_SECTIONS {
        assert!(html.contains(&format!("<h2>{section}</h2>")), "missing section {section}");
    }
    assert!(html.contains("<h1>ModalAlert</h1>"));
    assert!(html.contains("pilot"));
    Ok(())
}

/// An absent descriptor renders the same sections with empty header fields
/// instead of failing.
#[test]
fn modal_alert_page_renders_all_sections_without_descriptor() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let page = modal_alert_page(None);
    assert!(page.title.is_empty());
    assert!(page.header.name.is_empty());
    assert!(page.props.is_empty());

    let html = markup::document(&page.lower()?, "en", "ModalAlert")?;
    for section in FIXED_SECTIONS {
        assert!(html.contains(&format!("<h2>{section}</h2>")), "missing section {section}");
    }
    Ok(())
}

#[test]
fn button_group_page_renders_all_sections() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    for descriptor in [None, Some(&descriptor())] {
        let page = button_group_page(descriptor);
        let html = markup::document(&page.lower()?, "en", "ButtonGroup")?;
        for section in FIXED_SECTIONS {
            assert!(html.contains(&format!("<h2>{section}</h2>")), "missing section {section}");
        }
    }
    Ok(())
}

/// Do/don't guidance lands in cards tagged with their type.
#[test]
fn usage_cards_carry_do_dont_markers() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let page = modal_alert_page(None);
    let html = markup::document(&page.lower()?, "en", "ModalAlert")?;
    assert!(html.contains("data-card-type=\"do\""));
    assert!(html.contains("data-card-type=\"dont\""));
    assert!(html.contains("When to use"));
    assert!(html.contains("When not to use"));
    Ok(())
}

/// The page content region is a scroll boundary container with defaults.
#[test]
fn page_content_sits_in_scroll_boundary() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let page = modal_alert_page(None);
    let html = markup::document(&page.lower()?, "en", "ModalAlert")?;
    assert!(html.contains("data-scroll-boundary"));
    assert!(html.contains("height: 100%; overflow: auto"));
    Ok(())
}

/// Prop documentation from the descriptor renders as a table.
#[test]
fn prop_table_renders_from_descriptor() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut descriptor = descriptor();
    descriptor.props.push(docsite::PropDoc {
        name: "heading".to_owned(),
        type_name: "string".to_owned(),
        required: true,
        default_value: None,
        description: "The text used for the dialog title.".to_owned(),
    });
    let page = modal_alert_page(Some(&descriptor));
    let html = markup::document(&page.lower()?, "en", &page.title)?;
    assert!(html.contains("<h2>Props</h2>"));
    assert!(html.contains("<th>Name</th>"));
    assert!(html.contains("heading (required)"));
    Ok(())
}
