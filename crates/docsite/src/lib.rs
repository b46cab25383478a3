//! Documentation site for the Plinth design system.
//!
//! This crate assembles one guideline page per documented component. Page
//! content is declarative data (sections, subsections, do/don't cards) built
//! by ordinary function calls, combined with a docgen descriptor fetched from
//! the external documentation-generation collaborator, then lowered into a
//! widget tree and emitted as markup. The site itself performs no layout or
//! styling work beyond what the widgets crate emits.

pub mod assets;
pub mod config;
pub mod docgen;
pub mod fetch;
pub mod model;
pub mod pages;
pub mod routes;
pub mod site;
pub mod telemetry;

pub use config::SiteConfig;
pub use docgen::{DocGen, PropDoc};
pub use model::{Card, CardKind, CardSize, MainSection, Page, PageHeader, RelatedLink, Subsection};
pub use routes::{PageSpec, Router};
pub use site::Site;
pub use telemetry::SiteCounters;
