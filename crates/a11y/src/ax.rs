//! Accessibility tree projection.
//!
//! The parsed page is projected into a tree of roles and accessible names:
//! explicit `role` attributes win over the tag mapping, names resolve from
//! `aria-label`, then `alt`, then collapsed text content.

use crate::dom::{DomKey, NodeData, PageDom};
use anyhow::Error;
use serde::Serialize;

/// Accessibility role of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Document,
    Heading,
    Link,
    Button,
    #[serde(rename = "img")]
    Image,
    List,
    #[serde(rename = "listitem")]
    ListItem,
    Table,
    Row,
    Cell,
    Dialog,
    Group,
    #[serde(rename = "textbox")]
    TextBox,
    Text,
    Generic,
}

impl Role {
    /// Parse an explicit `role` attribute value.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "document" => Some(Self::Document),
            "heading" => Some(Self::Heading),
            "link" => Some(Self::Link),
            "button" => Some(Self::Button),
            "img" => Some(Self::Image),
            "list" => Some(Self::List),
            "listitem" => Some(Self::ListItem),
            "table" => Some(Self::Table),
            "row" => Some(Self::Row),
            "cell" => Some(Self::Cell),
            "dialog" => Some(Self::Dialog),
            "group" => Some(Self::Group),
            "textbox" => Some(Self::TextBox),
            _ => None,
        }
    }

    /// The implicit role of an element tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "a" => Self::Link,
            "button" => Self::Button,
            "img" => Self::Image,
            "input" | "textarea" => Self::TextBox,
            "ul" | "ol" => Self::List,
            "li" => Self::ListItem,
            "table" => Self::Table,
            "tr" => Self::Row,
            "td" | "th" => Self::Cell,
            "dialog" => Self::Dialog,
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Self::Heading,
            _ => Self::Generic,
        }
    }
}

/// One node of the accessibility tree.
#[derive(Debug, Clone, Serialize)]
pub struct AxNode {
    pub role: Role,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AxNode>,
}

/// Resolve the role of a parsed node.
pub fn role_of(dom: &PageDom, key: DomKey) -> Role {
    match dom.data(key) {
        Some(NodeData::Document) => Role::Document,
        Some(NodeData::Text { .. }) => Role::Text,
        Some(data @ NodeData::Element { .. }) => data
            .attr("role")
            .and_then(Role::from_attr)
            .unwrap_or_else(|| Role::from_tag(data.tag().unwrap_or(""))),
        _ => Role::Generic,
    }
}

/// Resolve the accessible name of a parsed node.
pub fn name_of(dom: &PageDom, key: DomKey) -> String {
    let Some(data) = dom.data(key) else {
        return String::new();
    };
    if let Some(label) = data.attr("aria-label") {
        return label.to_owned();
    }
    if let Some(alt) = data.attr("alt") {
        return alt.to_owned();
    }
    match role_of(dom, key) {
        Role::Text | Role::Heading | Role::Link | Role::Button | Role::Cell => {
            dom.text_content(key)
        }
        _ => String::new(),
    }
}

/// Project the whole page into an accessibility tree.
pub fn ax_tree(dom: &PageDom) -> AxNode {
    build_node(dom, dom.root())
}

fn build_node(dom: &PageDom, key: DomKey) -> AxNode {
    let children = dom
        .children(key)
        .into_iter()
        .filter(|child| match dom.data(*child) {
            // Whitespace-only text and comments carry no accessible content.
            Some(NodeData::Text { text }) => !text.trim().is_empty(),
            Some(NodeData::Comment { .. }) | None => false,
            _ => true,
        })
        .map(|child| build_node(dom, child))
        .collect();
    AxNode { role: role_of(dom, key), name: name_of(dom, key), children }
}

/// Serialize the accessibility tree as JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn ax_tree_snapshot(dom: &PageDom) -> Result<String, Error> {
    Ok(serde_json::to_string(&ax_tree(dom))?)
}
