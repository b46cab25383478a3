//! Scroll boundary containers and their scoped registration.
//!
//! Anchored widgets (tooltips, popovers, dropdowns) measure against the
//! nearest enclosing scrollable region. A `ScrollBoundary` widget publishes
//! its own key as that region for everything mounted below it. Each container
//! opens a fresh scope that shadows any outer one, so a lookup sees exactly
//! one registration; nesting never merges.
//!
//! The registration table is maintained with push-on-enter / pop-on-exit
//! discipline over the mount walk, rather than an ambient context lookup.

use crate::tree::{WidgetKey, WidgetKind, WidgetTree};
use std::collections::HashMap;

/// A length for the container's block size.
///
/// Numbers are pixels, percentage strings in the source material map to
/// `Pct`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Px(f64),
    Pct(f64),
}

impl Dimension {
    /// CSS serialization of the dimension.
    pub fn to_css(self) -> String {
        match self {
            Self::Px(px) => format!("{px}px"),
            Self::Pct(pct) => format!("{pct}%"),
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::Pct(100.0)
    }
}

/// Scroll behavior of a boundary container.
///
/// Invalid values are unrepresentable; there is no runtime validation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    Scroll,
    ScrollX,
    ScrollY,
    #[default]
    Auto,
}

impl Overflow {
    /// The CSS declaration this overflow mode emits.
    pub fn to_css(self) -> &'static str {
        match self {
            Self::Scroll => "overflow: scroll",
            Self::ScrollX => "overflow-x: scroll",
            Self::ScrollY => "overflow-y: scroll",
            Self::Auto => "overflow: auto",
        }
    }

    /// Every representable overflow mode.
    pub const ALL: [Overflow; 4] = [Self::Scroll, Self::ScrollX, Self::ScrollY, Self::Auto];
}

/// Immutable per-mount configuration of a scroll boundary container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerConfig {
    pub height: Dimension,
    pub overflow: Overflow,
}

impl ContainerConfig {
    /// The inline style a container renders with.
    pub fn style(&self) -> String {
        format!("height: {}; {}", self.height.to_css(), self.overflow.to_css())
    }
}

/// The per-tree registration table: widget key to the innermost enclosing
/// scroll boundary at mount time.
#[derive(Debug, Default)]
pub struct BoundaryRegistry {
    bindings: HashMap<WidgetKey, WidgetKey>,
}

impl BoundaryRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Register `widget` against `container`.
    pub(crate) fn bind(&mut self, widget: WidgetKey, container: WidgetKey) {
        self.bindings.insert(widget, container);
    }

    /// Drop every registration owned by the given (unmounted) widgets.
    pub(crate) fn unbind_all(&mut self, widgets: &[WidgetKey]) {
        for widget in widgets {
            self.bindings.remove(widget);
        }
    }

    /// The registration visible to `widget`, if it sits inside a container.
    pub fn scroll_boundary_of(&self, widget: WidgetKey) -> Option<WidgetKey> {
        self.bindings.get(&widget).copied()
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no widget currently sits inside a container.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Rebuild the table with a full mount walk.
    ///
    /// Entering a container pushes it, leaving pops it; every widget binds to
    /// the stack top as it is visited. A container therefore binds to its own
    /// enclosing container, not to itself, and an inner container shadows the
    /// outer one for its entire subtree.
    pub fn rebuild(&mut self, tree: &WidgetTree) {
        self.bindings.clear();
        let mut stack: Vec<WidgetKey> = Vec::new();
        self.walk(tree, tree.root(), &mut stack);
    }

    fn walk(&mut self, tree: &WidgetTree, key: WidgetKey, stack: &mut Vec<WidgetKey>) {
        if let Some(&innermost) = stack.last() {
            self.bindings.insert(key, innermost);
        }
        let opens_scope = matches!(tree.kind(key), Some(WidgetKind::ScrollBoundary { .. }));
        if opens_scope {
            stack.push(key);
        }
        for child in tree.children(key) {
            self.walk(tree, child, stack);
        }
        if opens_scope {
            stack.pop();
        }
    }
}
