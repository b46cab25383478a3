//! Markup emission for mounted widget trees.
//!
//! Pages are emitted as complete HTML documents so the audit pipeline can
//! inspect exactly what a browser would receive. Emission keeps the audit
//! contract of each widget kind: images carry their alternative text, dialog
//! wrappers carry their spoken label, buttons and links contain their visible
//! label as text.

use crate::components::ModalAlertSpec;
use crate::tree::{WidgetKey, WidgetKind, WidgetTree};
use anyhow::{Error, anyhow};

/// Escape text content for element bodies.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Escape an attribute value for double-quoted emission.
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Render a mounted tree as a full HTML document.
///
/// The language tag and title land on `<html>`/`<title>`; the tree's widgets
/// become the document body in mount order.
pub fn document(tree: &WidgetTree, lang: &str, title: &str) -> Result<String, Error> {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"{}\">\n", escape_attr(lang)));
    out.push_str("<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_text(title)));
    out.push_str("</head>\n<body>\n");
    for child in tree.children(tree.root()) {
        emit(tree, child, &mut out)?;
        out.push('\n');
    }
    out.push_str("</body>\n</html>\n");
    Ok(out)
}

/// Render a single widget subtree (without the document shell).
pub fn fragment(tree: &WidgetTree, key: WidgetKey) -> Result<String, Error> {
    let mut out = String::new();
    emit(tree, key, &mut out)?;
    Ok(out)
}

fn open_tag(out: &mut String, tag: &str, attrs: &[(String, String)], extra: &[(&str, String)]) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in extra {
        out.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
    }
    for (name, value) in attrs {
        out.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
    }
    out.push('>');
}

fn emit_children(tree: &WidgetTree, key: WidgetKey, out: &mut String) -> Result<(), Error> {
    for child in tree.children(key) {
        emit(tree, child, out)?;
    }
    Ok(())
}

fn emit_element(
    tree: &WidgetTree,
    key: WidgetKey,
    tag: &str,
    extra: &[(&str, String)],
    out: &mut String,
) -> Result<(), Error> {
    let widget = tree.widget(key).ok_or_else(|| anyhow!("Widget {key:?} missing"))?;
    let attrs: Vec<(String, String)> = widget.attrs.iter().cloned().collect();
    open_tag(out, tag, &attrs, extra);
    emit_children(tree, key, out)?;
    out.push_str(&format!("</{tag}>"));
    Ok(())
}

fn emit_modal_alert(
    tree: &WidgetTree,
    key: WidgetKey,
    spec: &ModalAlertSpec,
    out: &mut String,
) -> Result<(), Error> {
    out.push_str(&format!(
        "<div role=\"dialog\" aria-label=\"{}\" aria-modal=\"true\">",
        escape_attr(&spec.accessibility_modal_label)
    ));
    out.push_str(&format!("<h2>{}</h2>", escape_text(&spec.heading)));
    emit_children(tree, key, out)?;
    out.push_str("<div role=\"group\">");
    // Secondary (dismissing) action renders before the confirming one.
    if let Some(secondary) = &spec.secondary_action {
        emit_action_button(out, &secondary.label, &secondary.accessibility_label);
    }
    emit_action_button(out, &spec.primary_action.label, &spec.primary_action.accessibility_label);
    out.push_str("</div></div>");
    Ok(())
}

fn emit_action_button(out: &mut String, label: &str, accessibility_label: &str) {
    out.push_str(&format!(
        "<button type=\"button\" aria-label=\"{}\">{}</button>",
        escape_attr(accessibility_label),
        escape_text(label)
    ));
}

fn emit(tree: &WidgetTree, key: WidgetKey, out: &mut String) -> Result<(), Error> {
    let widget = tree.widget(key).ok_or_else(|| anyhow!("Widget {key:?} missing"))?;
    match &widget.kind {
        WidgetKind::Document => emit_children(tree, key, out),
        WidgetKind::Block => emit_element(tree, key, "div", &[], out),
        WidgetKind::Heading { level } => {
            let level = (*level).clamp(1, 6);
            emit_element(tree, key, &format!("h{level}"), &[], out)
        }
        WidgetKind::Text { text } => {
            out.push_str(&escape_text(text));
            Ok(())
        }
        WidgetKind::Paragraph => emit_element(tree, key, "p", &[], out),
        WidgetKind::Link { href } => {
            emit_element(tree, key, "a", &[("href", href.clone())], out)
        }
        WidgetKind::Image { src, alt } => {
            let attrs: Vec<(String, String)> = widget.attrs.iter().cloned().collect();
            open_tag(
                out,
                "img",
                &attrs,
                &[("src", src.clone()), ("alt", alt.clone())],
            );
            Ok(())
        }
        WidgetKind::Button => {
            emit_element(tree, key, "button", &[("type", "button".to_owned())], out)
        }
        WidgetKind::List => emit_element(tree, key, "ul", &[], out),
        WidgetKind::ListItem => emit_element(tree, key, "li", &[], out),
        WidgetKind::Table => emit_element(tree, key, "table", &[], out),
        WidgetKind::TableRow => emit_element(tree, key, "tr", &[], out),
        WidgetKind::TableCell { header } => {
            emit_element(tree, key, if *header { "th" } else { "td" }, &[], out)
        }
        WidgetKind::ScrollBoundary { config } => emit_element(
            tree,
            key,
            "div",
            &[
                ("style", config.style()),
                ("data-scroll-boundary", "true".to_owned()),
            ],
            out,
        ),
        WidgetKind::ModalAlert { spec } => emit_modal_alert(tree, key, spec, out),
        WidgetKind::ButtonGroup => {
            emit_element(tree, key, "div", &[("role", "group".to_owned())], out)
        }
    }
}
