//! Type definitions for the application state.

use crate::state::DraftField;

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Panel shortcuts (refresh, increment, quit)
    #[default]
    Panels,
    /// Typing into the add-user name input
    Name,
    /// Typing into the add-user email input
    Email,
}

impl Focus {
    /// The draft field being edited, if any.
    pub fn draft_field(self) -> Option<DraftField> {
        match self {
            Focus::Panels => None,
            Focus::Name => Some(DraftField::Name),
            Focus::Email => Some(DraftField::Email),
        }
    }

    /// Tab order: Panels -> Name -> Email -> Panels.
    pub fn next(self) -> Self {
        match self {
            Focus::Panels => Focus::Name,
            Focus::Name => Focus::Email,
            Focus::Email => Focus::Panels,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Panels => Focus::Email,
            Focus::Name => Focus::Panels,
            Focus::Email => Focus::Name,
        }
    }

    pub fn is_form(self) -> bool {
        self.draft_field().is_some()
    }
}
