//! Declarative documentation page model.
//!
//! Guideline pages are plain nested data: a page holds sections, sections
//! hold subsections, subsections hold do/don't cards and related links. The
//! structures are assembled by ordinary function calls and lowered into a
//! widget tree in one pass; there is no dynamic dispatch and no state beyond
//! the render call.

use crate::docgen::{DocGen, PropDoc};
use anyhow::Error;
use widgets::{ContainerConfig, WidgetKey, WidgetKind, WidgetTree};

/// Whether a card demonstrates recommended or discouraged usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Do,
    Dont,
    Plain,
}

impl CardKind {
    fn as_attr(self) -> &'static str {
        match self {
            Self::Do => "do",
            Self::Dont => "dont",
            Self::Plain => "plain",
        }
    }
}

/// Rendered size of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardSize {
    #[default]
    Md,
    Lg,
}

impl CardSize {
    fn as_attr(self) -> &'static str {
        match self {
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// One guideline card.
#[derive(Debug, Clone)]
pub struct Card {
    pub kind: CardKind,
    pub size: CardSize,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Card {
    pub fn new(kind: CardKind) -> Self {
        Self { kind, size: CardSize::default(), title: None, description: None }
    }

    pub fn with_size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_owned());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }
}

/// A pointer to a related component page.
#[derive(Debug, Clone)]
pub struct RelatedLink {
    pub name: String,
    pub href: String,
    pub description: String,
}

impl RelatedLink {
    pub fn new(name: &str, href: &str, description: &str) -> Self {
        Self {
            name: name.to_owned(),
            href: href.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// A titled group of cards or links inside a section.
#[derive(Debug, Clone, Default)]
pub struct Subsection {
    pub title: Option<String>,
    pub description: Option<String>,
    pub columns: u8,
    pub cards: Vec<Card>,
    pub links: Vec<RelatedLink>,
}

impl Subsection {
    pub fn new() -> Self {
        Self { columns: 1, ..Self::default() }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_owned());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    pub fn with_columns(mut self, columns: u8) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    pub fn with_link(mut self, link: RelatedLink) -> Self {
        self.links.push(link);
        self
    }

    /// The recurring two-column do/don't pairing.
    pub fn pair(do_description: &str, dont_description: &str) -> Self {
        Self::new()
            .with_columns(2)
            .with_card(Card::new(CardKind::Do).with_description(do_description))
            .with_card(Card::new(CardKind::Dont).with_description(dont_description))
    }
}

/// A top-level page section with a fixed heading.
#[derive(Debug, Clone)]
pub struct MainSection {
    pub name: String,
    pub description: Option<String>,
    pub subsections: Vec<Subsection>,
}

impl MainSection {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_owned(), description: None, subsections: Vec::new() }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    pub fn with_subsection(mut self, subsection: Subsection) -> Self {
        self.subsections.push(subsection);
        self
    }

    /// The fixed accessibility section; pages append their own subsections.
    pub fn accessibility() -> Self {
        Self::new("Accessibility")
    }

    /// The component quality checklist, derived from the component name.
    pub fn quality_checklist(component_name: &str) -> Self {
        let component = if component_name.is_empty() { "This component" } else { component_name };
        Self::new("Component quality checklist")
            .with_description(&format!(
                "Signals tracked for {component} across the design system."
            ))
            .with_subsection(
                Subsection::new()
                    .with_columns(3)
                    .with_card(
                        Card::new(CardKind::Plain)
                            .with_title("Figma library")
                            .with_description("Component is available in the Figma library."),
                    )
                    .with_card(
                        Card::new(CardKind::Plain)
                            .with_title("Responsive web")
                            .with_description("Component responds to changing viewport sizes."),
                    )
                    .with_card(
                        Card::new(CardKind::Plain)
                            .with_title("Documentation")
                            .with_description("Component docs cover usage, variants and writing."),
                    ),
            )
    }
}

/// Page header block: display name, description, optional release badge.
#[derive(Debug, Clone, Default)]
pub struct PageHeader {
    pub name: String,
    pub description: String,
    pub badge: Option<String>,
}

/// One documentation page, ready to lower.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub header: PageHeader,
    pub props: Vec<PropDoc>,
    pub sections: Vec<MainSection>,
}

impl Page {
    /// Start a page from the docgen descriptor, when one resolved.
    ///
    /// Every header field degrades to empty when the descriptor is absent;
    /// section content never depends on it.
    pub fn new(descriptor: Option<&DocGen>) -> Self {
        let header = PageHeader {
            name: descriptor.map(|doc| doc.display_name.clone()).unwrap_or_default(),
            description: descriptor.map(|doc| doc.description.clone()).unwrap_or_default(),
            badge: None,
        };
        Self {
            title: header.name.clone(),
            header,
            props: descriptor.map(|doc| doc.props.clone()).unwrap_or_default(),
            sections: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: &str) -> Self {
        self.header.badge = Some(badge.to_owned());
        self
    }

    pub fn with_section(mut self, section: MainSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Total sections on the page.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total cards across all sections.
    pub fn card_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|section| &section.subsections)
            .map(|subsection| subsection.cards.len())
            .sum()
    }

    /// Lower the page into a widget tree.
    ///
    /// The header renders above a scroll boundary container that wraps the
    /// page content, so anchored widgets inside the prop table and sections
    /// measure against the scrolling content region rather than the viewport.
    pub fn lower(&self) -> Result<WidgetTree, Error> {
        let mut tree = WidgetTree::new();
        let root = tree.root();

        let header = tree.insert(root, WidgetKind::Block)?;
        tree.set_attr(header, "class", "page-header")?;
        let heading = tree.insert(header, WidgetKind::Heading { level: 1 })?;
        tree.insert(heading, WidgetKind::Text { text: self.header.name.clone() })?;
        if let Some(badge) = &self.header.badge {
            let badge_block = tree.insert(header, WidgetKind::Block)?;
            tree.set_attr(badge_block, "class", "badge")?;
            tree.insert(badge_block, WidgetKind::Text { text: badge.clone() })?;
        }
        if !self.header.description.is_empty() {
            let description = tree.insert(header, WidgetKind::Paragraph)?;
            tree.insert(description, WidgetKind::Text { text: self.header.description.clone() })?;
        }

        let content = tree.insert(
            root,
            WidgetKind::ScrollBoundary { config: ContainerConfig::default() },
        )?;
        tree.set_attr(content, "id", "page-content")?;

        if !self.props.is_empty() {
            lower_prop_table(&mut tree, content, &self.props)?;
        }
        for section in &self.sections {
            lower_section(&mut tree, content, section)?;
        }
        Ok(tree)
    }
}

/// Turn a section name into a stable anchor id.
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    for symbol in name.chars() {
        if symbol.is_ascii_alphanumeric() {
            slug.push(symbol.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_owned()
}

fn lower_prop_table(
    tree: &mut WidgetTree,
    parent: WidgetKey,
    props: &[PropDoc],
) -> Result<(), Error> {
    let section = tree.insert(parent, WidgetKind::Block)?;
    tree.set_attr(section, "class", "main-section")?;
    tree.set_attr(section, "id", "props")?;
    let heading = tree.insert(section, WidgetKind::Heading { level: 2 })?;
    tree.insert(heading, WidgetKind::Text { text: "Props".to_owned() })?;

    let table = tree.insert(section, WidgetKind::Table)?;
    let head = tree.insert(table, WidgetKind::TableRow)?;
    for column in ["Name", "Type", "Default", "Description"] {
        let cell = tree.insert(head, WidgetKind::TableCell { header: true })?;
        tree.insert(cell, WidgetKind::Text { text: column.to_owned() })?;
    }
    for prop in props {
        let row = tree.insert(table, WidgetKind::TableRow)?;
        let name = if prop.required { format!("{} (required)", prop.name) } else { prop.name.clone() };
        let default_value = prop.default_value.clone().unwrap_or_else(|| "-".to_owned());
        for text in [name, prop.type_name.clone(), default_value, prop.description.clone()] {
            let cell = tree.insert(row, WidgetKind::TableCell { header: false })?;
            tree.insert(cell, WidgetKind::Text { text })?;
        }
    }
    Ok(())
}

fn lower_section(
    tree: &mut WidgetTree,
    parent: WidgetKey,
    section: &MainSection,
) -> Result<(), Error> {
    let block = tree.insert(parent, WidgetKind::Block)?;
    tree.set_attr(block, "class", "main-section")?;
    tree.set_attr(block, "id", &slugify(&section.name))?;
    let heading = tree.insert(block, WidgetKind::Heading { level: 2 })?;
    tree.insert(heading, WidgetKind::Text { text: section.name.clone() })?;
    if let Some(description) = &section.description {
        let para = tree.insert(block, WidgetKind::Paragraph)?;
        tree.insert(para, WidgetKind::Text { text: description.clone() })?;
    }
    for subsection in &section.subsections {
        lower_subsection(tree, block, subsection)?;
    }
    Ok(())
}

fn lower_subsection(
    tree: &mut WidgetTree,
    parent: WidgetKey,
    subsection: &Subsection,
) -> Result<(), Error> {
    let block = tree.insert(parent, WidgetKind::Block)?;
    tree.set_attr(block, "class", "subsection")?;
    if subsection.columns > 1 {
        tree.set_attr(block, "data-columns", &subsection.columns.to_string())?;
    }
    if let Some(title) = &subsection.title {
        let heading = tree.insert(block, WidgetKind::Heading { level: 3 })?;
        tree.insert(heading, WidgetKind::Text { text: title.clone() })?;
    }
    if let Some(description) = &subsection.description {
        let para = tree.insert(block, WidgetKind::Paragraph)?;
        tree.insert(para, WidgetKind::Text { text: description.clone() })?;
    }
    for card in &subsection.cards {
        lower_card(tree, block, card)?;
    }
    if !subsection.links.is_empty() {
        let list = tree.insert(block, WidgetKind::List)?;
        for link in &subsection.links {
            let item = tree.insert(list, WidgetKind::ListItem)?;
            let anchor = tree.insert(item, WidgetKind::Link { href: link.href.clone() })?;
            tree.insert(anchor, WidgetKind::Text { text: link.name.clone() })?;
            let para = tree.insert(item, WidgetKind::Paragraph)?;
            tree.insert(para, WidgetKind::Text { text: link.description.clone() })?;
        }
    }
    Ok(())
}

fn lower_card(tree: &mut WidgetTree, parent: WidgetKey, card: &Card) -> Result<(), Error> {
    let block = tree.insert(parent, WidgetKind::Block)?;
    tree.set_attr(block, "class", "card")?;
    tree.set_attr(block, "data-card-type", card.kind.as_attr())?;
    tree.set_attr(block, "data-card-size", card.size.as_attr())?;
    // Card titles stay out of the heading hierarchy; sections own the levels.
    if let Some(title) = &card.title {
        let para = tree.insert(block, WidgetKind::Paragraph)?;
        tree.set_attr(para, "class", "card-title")?;
        tree.insert(para, WidgetKind::Text { text: title.clone() })?;
    }
    if let Some(description) = &card.description {
        let para = tree.insert(block, WidgetKind::Paragraph)?;
        tree.insert(para, WidgetKind::Text { text: description.clone() })?;
    }
    Ok(())
}
