//! Component specs for the widgets documented by the site.

/// One action offered by a dialog: the visible label plus the spoken one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpec {
    pub label: String,
    pub accessibility_label: String,
}

impl ActionSpec {
    pub fn new(label: &str, accessibility_label: &str) -> Self {
        Self {
            label: label.to_owned(),
            accessibility_label: accessibility_label.to_owned(),
        }
    }
}

/// Configuration of an alert dialog.
///
/// The modal label updates the spoken text for the heading and gives screen
/// reader users more context than the visible heading alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalAlertSpec {
    pub accessibility_modal_label: String,
    pub heading: String,
    pub primary_action: ActionSpec,
    pub secondary_action: Option<ActionSpec>,
    /// Warnings and errors only dismiss through their buttons; confirmations
    /// also dismiss from outside the dialog.
    pub dismissable: bool,
}

impl ModalAlertSpec {
    pub fn new(accessibility_modal_label: &str, heading: &str, primary_action: ActionSpec) -> Self {
        Self {
            accessibility_modal_label: accessibility_modal_label.to_owned(),
            heading: heading.to_owned(),
            primary_action,
            secondary_action: None,
            dismissable: true,
        }
    }

    /// Attach a secondary (dismissing) action.
    pub fn with_secondary_action(mut self, action: ActionSpec) -> Self {
        self.secondary_action = Some(action);
        self
    }

    /// Restrict dismissal to the dialog's own buttons.
    pub fn undismissable(mut self) -> Self {
        self.dismissable = false;
        self
    }
}
