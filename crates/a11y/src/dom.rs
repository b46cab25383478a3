//! Parsed page tree.
//!
//! The parser streams updates over a channel; the tree folds them into an
//! `indextree` arena keyed by stable `DomKey`s, mirroring how the engine's
//! other tree consumers apply update batches.

use anyhow::{Error, anyhow};
use indextree::{Arena, NodeId};
use smallvec::SmallVec;
use std::collections::HashMap;

/// A stable key for parsed nodes, minted by the parser.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DomKey(pub u64);

impl DomKey {
    /// The document node key (always present).
    pub const DOCUMENT: DomKey = DomKey(0);
}

/// Data stored for each parsed node.
#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Element { tag: String, attrs: SmallVec<(String, String), 4> },
    Text { text: String },
    Comment { text: String },
}

impl NodeData {
    /// The element tag, for element nodes.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    /// Attribute lookup, for element nodes.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Self::Element { attrs, .. } => attrs
                .iter()
                .find(|(attr, _)| attr == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }
}

/// Update sent during parsing to build the page tree.
#[derive(Debug, Clone)]
pub enum DomUpdate {
    CreateNode { key: DomKey, data: NodeData },
    AppendChild { parent: DomKey, child: DomKey },
    SetAttr { key: DomKey, name: String, value: String },
}

/// The parsed page: an arena plus the key-to-node mapping.
#[derive(Debug)]
pub struct PageDom {
    arena: Arena<(DomKey, NodeData)>,
    ids: HashMap<DomKey, NodeId>,
    root: NodeId,
}

impl PageDom {
    /// A tree holding only the document node.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node((DomKey::DOCUMENT, NodeData::Document));
        let mut ids = HashMap::new();
        ids.insert(DomKey::DOCUMENT, root);
        Self { arena, ids, root }
    }

    /// Apply one parser update.
    ///
    /// # Errors
    /// Returns an error for updates referencing unknown nodes.
    pub fn apply_update(&mut self, update: DomUpdate) -> Result<(), Error> {
        match update {
            DomUpdate::CreateNode { key, data } => {
                let node = self.arena.new_node((key, data));
                self.ids.insert(key, node);
            }
            DomUpdate::AppendChild { parent, child } => {
                let parent_id = self.id_of(parent)?;
                let child_id = self.id_of(child)?;
                parent_id.append(child_id, &mut self.arena);
            }
            DomUpdate::SetAttr { key, name, value } => {
                let id = self.id_of(key)?;
                if let Some((_, NodeData::Element { attrs, .. })) =
                    self.arena.get_mut(id).map(|node| node.get_mut())
                {
                    if let Some(entry) = attrs.iter_mut().find(|(attr, _)| *attr == name) {
                        entry.1 = value;
                    } else {
                        attrs.push((name, value));
                    }
                }
            }
        }
        Ok(())
    }

    fn id_of(&self, key: DomKey) -> Result<NodeId, Error> {
        self.ids
            .get(&key)
            .copied()
            .ok_or_else(|| anyhow!("Unknown parsed node {key:?}"))
    }

    /// The document key.
    pub fn root(&self) -> DomKey {
        DomKey::DOCUMENT
    }

    /// Borrow a node's data.
    pub fn data(&self, key: DomKey) -> Option<&NodeData> {
        let id = self.ids.get(&key)?;
        self.arena.get(*id).map(|node| &node.get().1)
    }

    /// Child keys in document order.
    pub fn children(&self, key: DomKey) -> Vec<DomKey> {
        let Some(id) = self.ids.get(&key) else {
            return Vec::new();
        };
        id.children(&self.arena)
            .filter_map(|child| self.arena.get(child).map(|node| node.get().0))
            .collect()
    }

    /// Every node key in document (preorder) order.
    pub fn document_order(&self) -> Vec<DomKey> {
        self.root
            .descendants(&self.arena)
            .filter_map(|node| self.arena.get(node).map(|n| n.get().0))
            .collect()
    }

    /// Every element key with the given tag, in document order.
    pub fn elements_with_tag(&self, tag: &str) -> Vec<DomKey> {
        self.document_order()
            .into_iter()
            .filter(|key| self.data(*key).and_then(NodeData::tag) == Some(tag))
            .collect()
    }

    /// Concatenated, whitespace-collapsed text below a node.
    pub fn text_content(&self, key: DomKey) -> String {
        let mut parts = String::new();
        self.collect_text(key, &mut parts);
        collapse_whitespace(&parts)
    }

    fn collect_text(&self, key: DomKey, out: &mut String) {
        if let Some(NodeData::Text { text }) = self.data(key) {
            out.push_str(text);
            out.push(' ');
        }
        for child in self.children(key) {
            self.collect_text(child, out);
        }
    }
}

impl Default for PageDom {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_space = true;
    for symbol in text.chars() {
        if symbol.is_whitespace() {
            if !in_space {
                collapsed.push(' ');
                in_space = true;
            }
        } else {
            collapsed.push(symbol);
            in_space = false;
        }
    }
    collapsed.trim_end().to_owned()
}
