//! Guideline page for the ButtonGroup component.

use crate::docgen::DocGen;
use crate::model::{Card, CardKind, MainSection, Page, RelatedLink, Subsection};

pub fn button_group_page(descriptor: Option<&DocGen>) -> Page {
    let component = descriptor.map(|doc| doc.display_name.clone()).unwrap_or_default();
    Page::new(descriptor)
        .with_section(usage_guidelines())
        .with_section(best_practices())
        .with_section(accessibility())
        .with_section(localization())
        .with_section(variants())
        .with_section(writing())
        .with_section(MainSection::quality_checklist(&component))
        .with_section(related())
}

fn usage_guidelines() -> MainSection {
    MainSection::new("Usage guidelines").with_subsection(
        Subsection::new()
            .with_columns(2)
            .with_card(Card::new(CardKind::Do).with_title("When to use").with_description(
                "Arranging a group of buttons in a horizontal or vertical stack due to \
                 limited space. Showing all the available options at one glance.",
            ))
            .with_card(Card::new(CardKind::Dont).with_title("When not to use").with_description(
                "Grouping 4 or more actions, consider using an ellipsis IconButton menu \
                 instead. Switching between different views. Use Tabs instead.",
            )),
    )
}

fn best_practices() -> MainSection {
    MainSection::new("Best practices")
        .with_subsection(Subsection::pair(
            "Only use primary and secondary styles for the buttons in the group, and keep \
             the most important action first.",
            "Mix button styles or sizes inside one group; the group should read as one set \
             of equivalent choices.",
        ))
        .with_subsection(Subsection::pair(
            "Keep button labels short so the group stays on one line at most widths.",
            "Wrap long labels across several lines, which makes the group ragged and hard \
             to scan.",
        ))
}

fn accessibility() -> MainSection {
    MainSection::accessibility().with_subsection(
        Subsection::new()
            .with_title("Keyboard navigation")
            .with_description(
                "Buttons in a group are reachable in order with Tab, and each button exposes \
                 its own label to assistive technology. The group wrapper announces that the \
                 buttons belong together.",
            )
            .with_card(Card::new(CardKind::Plain)),
    )
}

fn localization() -> MainSection {
    MainSection::new("Localization").with_description(
        "Be sure to localize every button label in the group. Note that localization can \
         lengthen text by 20 to 30 percent; avoid layouts that depend on label width.",
    )
}

fn variants() -> MainSection {
    MainSection::new("Variants")
        .with_subsection(
            Subsection::new()
                .with_title("Horizontal")
                .with_description(
                    "The default arrangement: buttons flow in a row and wrap as a unit when \
                     the container is too narrow.",
                )
                .with_card(Card::new(CardKind::Plain)),
        )
        .with_subsection(
            Subsection::new()
                .with_title("Vertical")
                .with_description(
                    "Buttons stack in a column when horizontal space is constrained, such as \
                     inside narrow side sheets.",
                )
                .with_card(Card::new(CardKind::Plain)),
        )
}

fn writing() -> MainSection {
    MainSection::new("Writing").with_subsection(Subsection::pair(
        "Use action verbs that say what each button does, like “Save” or “Follow”.",
        "Use vague labels like “Yes” or “OK” that only make sense with extra context.",
    ))
}

fn related() -> MainSection {
    MainSection::new("Related").with_subsection(
        Subsection::new()
            .with_link(RelatedLink::new(
                "Button",
                "/web/button",
                "Button is the individual action element grouped by ButtonGroup.",
            ))
            .with_link(RelatedLink::new(
                "Tabs",
                "/web/tabs",
                "Tabs switch between different views of the same surface; use them instead \
                 of a group of buttons when navigation is the goal.",
            )),
    )
}
