//! Widget tree storage and mutation.
//!
//! The tree mirrors the arena-plus-stable-key layout used elsewhere in the
//! engine: widgets live in an `indextree` arena, while callers address them
//! through `WidgetKey`s that stay valid across arena internals changing.

use crate::boundary::{BoundaryRegistry, ContainerConfig};
use crate::components::ModalAlertSpec;
use anyhow::{Error, anyhow};
use indextree::{Arena, NodeId};
use log::{debug, trace};
use smallvec::SmallVec;
use std::collections::HashMap;

/// A stable key for widgets, minted by the owning tree.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct WidgetKey(pub u64);

impl WidgetKey {
    /// The document root key (always present).
    pub const ROOT: WidgetKey = WidgetKey(0);
}

/// The kind of a widget node, with any per-kind payload.
#[derive(Debug, Clone)]
pub enum WidgetKind {
    /// Tree root; emitted as the document body.
    Document,
    /// A generic block container.
    Block,
    /// A heading of the given level (clamped to 1..=6 at emission).
    Heading { level: u8 },
    /// An inline run of text.
    Text { text: String },
    /// A paragraph container.
    Paragraph,
    /// An anchor with a destination.
    Link { href: String },
    /// An image with its alternative text.
    Image { src: String, alt: String },
    /// A push button.
    Button,
    /// An unordered list.
    List,
    /// A single list entry.
    ListItem,
    /// A data table.
    Table,
    /// One table row.
    TableRow,
    /// One table cell; header cells emit as `th`.
    TableCell { header: bool },
    /// A scrollable region that registers itself as the scroll boundary for
    /// its subtree.
    ScrollBoundary { config: ContainerConfig },
    /// An alert dialog composed from its spec.
    ModalAlert { spec: ModalAlertSpec },
    /// A grouped run of buttons.
    ButtonGroup,
}

/// A single widget: its kind plus free-form attributes.
#[derive(Debug, Clone)]
pub struct Widget {
    pub key: WidgetKey,
    pub kind: WidgetKind,
    pub attrs: SmallVec<(String, String), 4>,
}

impl Widget {
    fn new(key: WidgetKey, kind: WidgetKind) -> Self {
        Self { key, kind, attrs: SmallVec::new() }
    }

    /// Look up an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }
}

/// The mounted widget tree for one page or demo surface.
///
/// Structural changes keep the scroll boundary registry in sync, so container
/// lookups are valid immediately after every insert or removal.
#[derive(Debug)]
pub struct WidgetTree {
    arena: Arena<Widget>,
    ids: HashMap<WidgetKey, NodeId>,
    root: NodeId,
    next_key: u64,
    registry: BoundaryRegistry,
}

impl WidgetTree {
    /// Create a tree holding only the document root.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(Widget::new(WidgetKey::ROOT, WidgetKind::Document));
        let mut ids = HashMap::new();
        ids.insert(WidgetKey::ROOT, root);
        Self { arena, ids, root, next_key: 1, registry: BoundaryRegistry::new() }
    }

    /// The root widget key.
    pub fn root(&self) -> WidgetKey {
        WidgetKey::ROOT
    }

    fn id_of(&self, key: WidgetKey) -> Result<NodeId, Error> {
        self.ids
            .get(&key)
            .copied()
            .ok_or_else(|| anyhow!("Unknown widget key {key:?}"))
    }

    /// Mount a new widget as the last child of `parent`, returning its key.
    pub fn insert(&mut self, parent: WidgetKey, kind: WidgetKind) -> Result<WidgetKey, Error> {
        let parent_id = self.id_of(parent)?;
        let key = WidgetKey(self.next_key);
        self.next_key += 1;
        let node = self.arena.new_node(Widget::new(key, kind));
        parent_id.append(node, &mut self.arena);
        self.ids.insert(key, node);
        // Incremental form of the mount walk: a widget binds to its parent
        // when the parent is itself a boundary, otherwise it inherits the
        // parent's binding.
        let binding = if matches!(self.kind(parent), Some(WidgetKind::ScrollBoundary { .. })) {
            Some(parent)
        } else {
            self.registry.scroll_boundary_of(parent)
        };
        if let Some(container) = binding {
            self.registry.bind(key, container);
        }
        trace!("mounted widget {key:?} under {parent:?}");
        Ok(key)
    }

    /// Set an attribute on a widget, replacing any previous value.
    pub fn set_attr(&mut self, key: WidgetKey, name: &str, value: &str) -> Result<(), Error> {
        let id = self.id_of(key)?;
        let widget = self
            .arena
            .get_mut(id)
            .ok_or_else(|| anyhow!("Widget {key:?} missing from arena"))?
            .get_mut();
        if let Some(entry) = widget.attrs.iter_mut().find(|(attr, _)| attr == name) {
            entry.1 = value.to_owned();
        } else {
            widget.attrs.push((name.to_owned(), value.to_owned()));
        }
        Ok(())
    }

    /// Unmount a widget and its entire subtree.
    ///
    /// Registrations owned by the removed subtree are cleared; the root
    /// cannot be removed.
    pub fn remove(&mut self, key: WidgetKey) -> Result<(), Error> {
        if key == WidgetKey::ROOT {
            return Err(anyhow!("Cannot remove the document root"));
        }
        let id = self.id_of(key)?;
        let removed: Vec<WidgetKey> = id
            .descendants(&self.arena)
            .filter_map(|node| self.arena.get(node).map(|n| n.get().key))
            .collect();
        id.remove_subtree(&mut self.arena);
        for gone in &removed {
            self.ids.remove(gone);
        }
        self.registry.unbind_all(&removed);
        debug!("unmounted {key:?} ({} widgets)", removed.len());
        Ok(())
    }

    /// Borrow a widget by key.
    pub fn widget(&self, key: WidgetKey) -> Option<&Widget> {
        let id = self.ids.get(&key)?;
        self.arena.get(*id).map(|node| node.get())
    }

    /// The kind of a widget, if mounted.
    pub fn kind(&self, key: WidgetKey) -> Option<&WidgetKind> {
        self.widget(key).map(|widget| &widget.kind)
    }

    /// The parent of a widget, if any.
    pub fn parent(&self, key: WidgetKey) -> Option<WidgetKey> {
        let id = self.ids.get(&key)?;
        let parent = self.arena.get(*id)?.parent()?;
        self.arena.get(parent).map(|node| node.get().key)
    }

    /// Child keys of a widget in mount order.
    pub fn children(&self, key: WidgetKey) -> Vec<WidgetKey> {
        let Some(id) = self.ids.get(&key) else {
            return Vec::new();
        };
        id.children(&self.arena)
            .filter_map(|child| self.arena.get(child).map(|node| node.get().key))
            .collect()
    }

    /// All mounted keys in document (preorder) order.
    pub fn document_order(&self) -> Vec<WidgetKey> {
        self.root
            .descendants(&self.arena)
            .filter_map(|node| self.arena.get(node).map(|n| n.get().key))
            .collect()
    }

    /// Number of mounted widgets, including the root.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the tree holds only the root.
    pub fn is_empty(&self) -> bool {
        self.ids.len() <= 1
    }

    /// The nearest enclosing scroll boundary container for a widget.
    ///
    /// Containers shadow their ancestors: a nested container rebinds its
    /// whole subtree to itself, so at most one registration is ever visible
    /// from a given widget.
    pub fn scroll_boundary_of(&self, key: WidgetKey) -> Option<WidgetKey> {
        self.registry.scroll_boundary_of(key)
    }

    /// Recompute every container binding from scratch with a full mount walk.
    ///
    /// Incremental maintenance keeps the registry current; this walk exists
    /// for remounts and as the reference the incremental path must agree with.
    pub fn rebuild_bindings(&mut self) {
        let mut registry = BoundaryRegistry::new();
        registry.rebuild(self);
        self.registry = registry;
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}
