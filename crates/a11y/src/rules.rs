//! Audit rules.
//!
//! Each rule scans the parsed page and reports violations; the audit is the
//! union of every rule's findings. Rules mirror the automated checks the
//! documentation pages are gated on in CI.

use crate::ax::name_of;
use crate::dom::{DomKey, NodeData, PageDom};
use std::collections::HashMap;

/// A single failed check.
#[derive(Debug, Clone)]
pub struct Violation {
    pub rule: &'static str,
    pub node: DomKey,
    pub message: String,
}

/// The outcome of auditing one page.
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub violations: Vec<Violation>,
}

impl AuditReport {
    /// Whether the page passed every rule.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// One line per violation, for failure messages.
    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .map(|violation| format!("[{}] {}", violation.rule, violation.message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Run every rule against a parsed page.
pub fn audit(dom: &PageDom) -> AuditReport {
    let mut violations = Vec::new();
    document_title(dom, &mut violations);
    html_lang(dom, &mut violations);
    image_alt(dom, &mut violations);
    control_names(dom, &mut violations);
    heading_order(dom, &mut violations);
    duplicate_id(dom, &mut violations);
    dialog_name(dom, &mut violations);
    AuditReport { violations }
}

fn document_title(dom: &PageDom, out: &mut Vec<Violation>) {
    let titled = dom
        .elements_with_tag("title")
        .iter()
        .any(|title| !dom.text_content(*title).is_empty());
    if !titled {
        out.push(Violation {
            rule: "document-title",
            node: dom.root(),
            message: "Document has no non-empty <title>".to_owned(),
        });
    }
}

fn html_lang(dom: &PageDom, out: &mut Vec<Violation>) {
    for html in dom.elements_with_tag("html") {
        let lang = dom.data(html).and_then(|data| data.attr("lang")).unwrap_or("");
        if lang.is_empty() {
            out.push(Violation {
                rule: "html-lang",
                node: html,
                message: "<html> element has no lang attribute".to_owned(),
            });
        }
    }
}

fn image_alt(dom: &PageDom, out: &mut Vec<Violation>) {
    for img in dom.elements_with_tag("img") {
        // alt="" is a deliberate decorative marker; a missing attribute is not.
        if dom.data(img).and_then(|data| data.attr("alt")).is_none() {
            out.push(Violation {
                rule: "image-alt",
                node: img,
                message: "Image has no alt attribute".to_owned(),
            });
        }
    }
}

fn control_names(dom: &PageDom, out: &mut Vec<Violation>) {
    for (tag, rule) in [("button", "button-name"), ("a", "link-name")] {
        for control in dom.elements_with_tag(tag) {
            if name_of(dom, control).is_empty() {
                out.push(Violation {
                    rule,
                    node: control,
                    message: format!("<{tag}> element has no accessible name"),
                });
            }
        }
    }
}

fn heading_order(dom: &PageDom, out: &mut Vec<Violation>) {
    let mut previous: Option<u8> = None;
    for key in dom.document_order() {
        let Some(NodeData::Element { tag, .. }) = dom.data(key) else {
            continue;
        };
        let Some(level) = heading_level(tag) else {
            continue;
        };
        if let Some(previous) = previous
            && level > previous + 1
        {
            out.push(Violation {
                rule: "heading-order",
                node: key,
                message: format!("Heading level h{level} follows h{previous}"),
            });
        }
        previous = Some(level);
    }
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn duplicate_id(dom: &PageDom, out: &mut Vec<Violation>) {
    let mut seen: HashMap<String, DomKey> = HashMap::new();
    for key in dom.document_order() {
        let Some(id) = dom.data(key).and_then(|data| data.attr("id")) else {
            continue;
        };
        if id.is_empty() {
            continue;
        }
        if seen.contains_key(id) {
            out.push(Violation {
                rule: "duplicate-id",
                node: key,
                message: format!("Duplicate id \"{id}\""),
            });
        } else {
            seen.insert(id.to_owned(), key);
        }
    }
}

fn dialog_name(dom: &PageDom, out: &mut Vec<Violation>) {
    for key in dom.document_order() {
        let Some(data) = dom.data(key) else {
            continue;
        };
        let is_dialog = data.tag() == Some("dialog") || data.attr("role") == Some("dialog");
        if !is_dialog {
            continue;
        }
        let labelled = data.attr("aria-label").is_some_and(|label| !label.is_empty())
            || data.attr("aria-labelledby").is_some_and(|label| !label.is_empty());
        if !labelled {
            out.push(Violation {
                rule: "dialog-name",
                node: key,
                message: "Dialog has no accessible label".to_owned(),
            });
        }
    }
}
