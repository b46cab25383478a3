//! Accessibility audit pipeline for the Plinth documentation site.
//!
//! Rendered pages are parsed back into a node arena, projected into an
//! accessibility tree, and checked against a fixed rule set. The page-level
//! harness is a pass/fail gate for continuous integration: it performs no
//! recovery, retry, or triage.

pub mod ax;
pub mod dom;
pub mod harness;
pub mod parser;
pub mod rules;

pub use ax::{AxNode, Role, ax_tree, ax_tree_snapshot};
pub use dom::{DomKey, NodeData, PageDom};
pub use harness::{audit_route, expect_accessible_page};
pub use parser::parse_html;
pub use rules::{AuditReport, Violation, audit};
