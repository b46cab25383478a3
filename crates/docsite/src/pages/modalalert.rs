//! Guideline page for the ModalAlert component.

use crate::docgen::DocGen;
use crate::model::{Card, CardKind, CardSize, MainSection, Page, RelatedLink, Subsection};

pub fn modal_alert_page(descriptor: Option<&DocGen>) -> Page {
    let component = descriptor.map(|doc| doc.display_name.clone()).unwrap_or_default();
    Page::new(descriptor)
        .with_badge("pilot")
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
                "Interrupting users to get confirmation on a user-triggered action that is \
                 potentially disruptive or significantly changes the user’s content and system. \
                 Interrupting users to alert them of potential issues and errors; this can be \
                 user or system-generated.",
            ))
            .with_card(Card::new(CardKind::Dont).with_title("When not to use").with_description(
                "Requesting large forms of information. Consider Sheet or a new page instead. \
                 Any action that should not interrupt users from their current work stream, \
                 such as saving a Pin. Use Toast instead. When alerting users of issues that \
                 can be corrected on the page or surface itself without interrupting their \
                 flow. Instead use Callout or SlimBanner.",
            )),
    )
}

fn best_practices() -> MainSection {
    MainSection::new("Best practices")
        .with_subsection(Subsection::pair(
            "Clearly communicate what response is expected and make the action simple and \
             straightforward, such as clicking/tapping a button to confirm.",
            "Use language that makes it hard to understand what action is being taken, while \
             adding additional actions that may take the user out of their existing context.",
        ))
        .with_subsection(Subsection::pair(
            "Use to overlay Page content. ModalAlerts should be horizontally and vertically \
             centered on the screen.",
            "Use ModalAlert on top of another modal dialog. This can cause accessibility \
             issues with focus states and make it hard for a user to escape and go back to \
             the previous surface. On mobile surfaces, if a user has to confirm something \
             triggered by a modal dialog, auto-dismiss the first dialog before presenting \
             with the confirmation dialog.",
        ))
        .with_subsection(Subsection::pair(
            "Limit the content to prevent the need to scroll at most screen sizes.",
            "Use ModalAlert for long and complex content or tasks, or for content that should \
             have a dedicated surface, like login flows. If extra functionality is needed in \
             an overlay, use Modal or Sheet.",
        ))
        .with_subsection(Subsection::pair(
            "Provide a way for the user to correct an error or issue via a button or a link.",
            "Leave it up to the user to find where to go to fix an issue.",
        ))
        .with_subsection(Subsection::pair(
            "Explain to the user why they’ve encountered a warning or error when an action \
             button or link is not possible.",
            "Omit an explanation as to why a user is encountering an error or issue.",
        ))
}

fn accessibility() -> MainSection {
    MainSection::accessibility().with_subsection(
        Subsection::new()
            .with_title("Labels")
            .with_description(
                "Make sure ModalAlerts have a clear purpose when being read by a screen reader \
                 by specifying an accessibilityModalLabel that will update the spoken text for \
                 the heading prop and give the user more context about the ModalAlert.",
            )
            .with_card(Card::new(CardKind::Plain).with_size(CardSize::Lg)),
    )
}

fn localization() -> MainSection {
    MainSection::new("Localization").with_description(
        "Be sure to localize the heading and accessibilityModalLabel props, as well as any \
         other text elements within ModalAlert. Note that localization can lengthen text by \
         20 to 30 percent.",
    )
}

fn variants() -> MainSection {
    MainSection::new("Variants")
        .with_subsection(
            Subsection::new()
                .with_title("Multiple actions for confirmation")
                .with_description(
                    "This is generally triggered by user action and asks a user to confirm or \
                     cancel an action. Confirmation ModalAlerts should always have a primary \
                     and secondary button; the primary button is for confirming, and the \
                     secondary for dismissing the modal. Confirmations aren’t critical and can \
                     be dismissed by clicking outside of the modal and hitting the ESC key, in \
                     addition to using the “Cancel” buttons provided in the modal.",
                )
                .with_card(Card::new(CardKind::Plain)),
        )
        .with_subsection(
            Subsection::new()
                .with_title("Single action for acknowledgment")
                .with_description(
                    "This is system-generated and only requires a user to dismiss the message.",
                )
                .with_card(Card::new(CardKind::Plain)),
        )
        .with_subsection(
            Subsection::new()
                .with_title("Warning type")
                .with_description(
                    "Warnings are used to alert a user that they need to proceed with caution. \
                     Due to their critical nature, warnings can only be dismissed by \
                     interacting with the dismiss buttons provided by the modal. If there is a \
                     way to resolve the warning, two buttons can be included. If not, only one \
                     “dismiss” button is needed.",
                )
                .with_card(Card::new(CardKind::Plain)),
        )
        .with_subsection(
            Subsection::new()
                .with_title("Error type")
                .with_description(
                    "Error messages alert users of an error or a very critical issue that \
                     severely limits the user’s ability to continue. Like warnings, errors can \
                     only be dismissed by interacting with the dismiss buttons provided by the \
                     modal. If there is a way to resolve the error, two buttons can be \
                     included. If not, only one “dismiss” button is needed.",
                )
                .with_card(Card::new(CardKind::Plain)),
        )
        .with_subsection(
            Subsection::new()
                .with_title("With checkbox")
                .with_description(
                    "Checkbox can be added to a modal that isn’t a warning or an error. \
                     Checkboxes are normally used for confirmation modals that may appear \
                     frequently in a creation or editing flow. If the action is infrequent or \
                     highly destructive (like deleting something), do not offer an option to \
                     not show the modal again.",
                )
                .with_card(Card::new(CardKind::Plain)),
        )
}

fn writing() -> MainSection {
    MainSection::new("Writing").with_subsection(Subsection::pair(
        "Consider internationalization and how other languages may be constrained. Use \
         concise language while making it clear what is expected of the user. If the desired \
         action can be confused with “Cancel”, add “Yes,” to the action. For example “Yes, \
         remove”, “No, keep”.",
        "Pose a question in the headline that isn’t clear about the action being proposed, \
         like “Are you sure?”. Use lengthy, technical jargon or local idioms that will be \
         hard to translate to other languages. Avoid exclamation marks unless the tone is \
         celebratory; this is especially true when surfacing errors or warnings.",
    ))
}

fn related() -> MainSection {
    MainSection::new("Related").with_subsection(
        Subsection::new()
            .with_link(RelatedLink::new(
                "Toast",
                "/web/toast",
                "Toast provides feedback shortly after a user interaction, like a confirmation \
                 that appears when a Pin has been saved. Unlike Upsells and SlimBanners, \
                 toasts overlay Page content. They also automatically disappear after a \
                 certain amount of time without being dismissed by the user.",
            ))
            .with_link(RelatedLink::new(
                "Callout",
                "/web/callout",
                "Callouts are used at the top-most level of a page to communicate \
                 highest-priority information that applies to the entire page or surface. \
                 Callouts can be dismissed and are also actionable.",
            ))
            .with_link(RelatedLink::new(
                "SlimBanner",
                "/web/slimbanner",
                "SlimBanner conveys brief information related to a specific section of a \
                 page. The message can relay success, warning, error or general information.",
            ))
            .with_link(RelatedLink::new(
                "Modal",
                "/web/modal",
                "A generic, customizable container for modals that aren’t used as alerts and \
                 need more functionality, like form fields.",
            )),
    )
}
