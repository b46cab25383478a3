//! Streaming HTML parsing into a [`PageDom`].
//!
//! A `TreeSink` implementation mints stable keys and streams tree updates
//! over a channel; the caller folds the updates into the arena once parsing
//! finishes. The sink never holds the arena itself, so the parser side stays
//! free of borrows into the tree it is building.

use crate::dom::{DomKey, DomUpdate, NodeData, PageDom};
use anyhow::Error;
use html5ever::tendril::{StrTendril, TendrilSink as _};
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{
    Attribute, ExpandedName, ParseOpts, QualName, local_name, ns, parse_document,
};
use log::trace;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::cell::Cell;
use std::sync::mpsc;

/// Parser-side node handle: the stable key plus the element name the tree
/// builder consults during construction.
#[derive(Debug, Clone)]
pub struct ParseHandle {
    key: DomKey,
    name: QualName,
}

/// `TreeSink` that streams updates to the given channel.
pub struct TreeBuilder {
    next_key: Cell<u64>,
    document: ParseHandle,
    tx: mpsc::Sender<DomUpdate>,
}

impl TreeBuilder {
    pub fn new(tx: mpsc::Sender<DomUpdate>) -> Self {
        let document = ParseHandle {
            key: DomKey::DOCUMENT,
            name: QualName::new(None, ns!(), local_name!("")),
        };
        Self { next_key: Cell::new(1), document, tx }
    }

    fn mint_key(&self) -> DomKey {
        let key = DomKey(self.next_key.get());
        self.next_key.set(self.next_key.get() + 1);
        key
    }

    fn send_update(&self, update: DomUpdate) {
        // The receiver outlives the parse; a closed channel only means the
        // caller already gave up on the result.
        let _ = self.tx.send(update);
    }
}

impl TreeSink for TreeBuilder {
    type Handle = ParseHandle;
    type Output = ();
    type ElemName<'a> = ExpandedName<'a>;

    fn finish(self) -> Self::Output {}

    fn parse_error(&self, msg: Cow<'static, str>) {
        trace!("parse error: {msg}");
    }

    fn get_document(&self) -> Self::Handle {
        self.document.clone()
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> ExpandedName<'a> {
        target.name.expanded()
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let key = self.mint_key();
        let mut stored: SmallVec<(String, String), 4> = SmallVec::new();
        for attr in attrs {
            stored.push((attr.name.local.to_string(), attr.value.to_string()));
        }
        self.send_update(DomUpdate::CreateNode {
            key,
            data: NodeData::Element { tag: name.local.to_string(), attrs: stored },
        });
        ParseHandle { key, name }
    }

    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        let key = self.mint_key();
        self.send_update(DomUpdate::CreateNode {
            key,
            data: NodeData::Comment { text: text.to_string() },
        });
        ParseHandle { key, name: QualName::new(None, ns!(), local_name!("")) }
    }

    fn create_pi(&self, _target: StrTendril, _data: StrTendril) -> Self::Handle {
        let key = self.mint_key();
        self.send_update(DomUpdate::CreateNode {
            key,
            data: NodeData::Comment { text: String::new() },
        });
        ParseHandle { key, name: QualName::new(None, ns!(), local_name!("")) }
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        match child {
            NodeOrText::AppendNode(node) => {
                self.send_update(DomUpdate::AppendChild { parent: parent.key, child: node.key });
            }
            NodeOrText::AppendText(text) => {
                let key = self.mint_key();
                self.send_update(DomUpdate::CreateNode {
                    key,
                    data: NodeData::Text { text: text.to_string() },
                });
                self.send_update(DomUpdate::AppendChild { parent: parent.key, child: key });
            }
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        _prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        self.append(element, child);
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        target.clone()
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x.key == y.key
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    fn append_before_sibling(&self, _sibling: &Self::Handle, _new_node: NodeOrText<Self::Handle>) {
        // The audited pages never trigger foster parenting.
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Attribute>) {
        for attr in attrs {
            self.send_update(DomUpdate::SetAttr {
                key: target.key,
                name: attr.name.local.to_string(),
                value: attr.value.to_string(),
            });
        }
    }

    fn remove_from_parent(&self, _target: &Self::Handle) {}

    fn reparent_children(&self, _node: &Self::Handle, _new_parent: &Self::Handle) {}
}

/// Parse a complete HTML document into a page tree.
///
/// # Errors
/// Returns an error if folding the update stream into the arena fails.
pub fn parse_html(html: &str) -> Result<PageDom, Error> {
    let (tx, rx) = mpsc::channel();
    let sink = TreeBuilder::new(tx);
    parse_document(sink, ParseOpts::default()).one(StrTendril::from(html));

    let mut dom = PageDom::new();
    while let Ok(update) = rx.recv() {
        dom.apply_update(update)?;
    }
    Ok(dom)
}
