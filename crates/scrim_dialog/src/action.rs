//! Action button identity
//!
//! Dialogs carry exactly three action buttons in fixed semantic order.
//! Positive and negative actions have platform-standard fallback labels;
//! the neutral action does not.

use scrim_core::Resources;
use scrim_view::Slot;

/// The three dialog action buttons, in fixed semantic order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionButton {
    /// Affirmative action (falls back to the standard "OK" label)
    Positive,
    /// Dismissive action (falls back to the standard "Cancel" label)
    Negative,
    /// Third alternative action (no fallback label)
    Neutral,
}

impl ActionButton {
    /// All buttons in semantic order
    pub const ALL: [ActionButton; 3] = [
        ActionButton::Positive,
        ActionButton::Negative,
        ActionButton::Neutral,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            ActionButton::Positive => 0,
            ActionButton::Negative => 1,
            ActionButton::Neutral => 2,
        }
    }

    pub(crate) fn slot(self) -> Slot {
        match self {
            ActionButton::Positive => Slot::PositiveAction,
            ActionButton::Negative => Slot::NegativeAction,
            ActionButton::Neutral => Slot::NeutralAction,
        }
    }

    /// Platform-standard label used when no text source is supplied
    pub(crate) fn fallback_label(self, resources: &dyn Resources) -> Option<String> {
        match self {
            ActionButton::Positive => Some(resources.ok_label()),
            ActionButton::Negative => Some(resources.cancel_label()),
            ActionButton::Neutral => None,
        }
    }
}
