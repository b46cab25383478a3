//! Widget component library for the Plinth design system.
//!
//! This crate owns the declarative widget tree that documentation pages and
//! component demos are lowered into: an arena of widgets addressed by stable
//! keys, the scroll boundary container mechanism that anchored widgets use to
//! find their nearest scrolling ancestor, and markup emission for rendered
//! pages.

pub mod boundary;
pub mod components;
pub mod markup;
pub mod tree;

pub use boundary::{BoundaryRegistry, ContainerConfig, Dimension, Overflow};
pub use components::{ActionSpec, ModalAlertSpec};
pub use tree::{Widget, WidgetKey, WidgetKind, WidgetTree};
