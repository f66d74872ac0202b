//! Add-user form scratch state.

use serde::Serialize;

/// Which draft input a keystroke edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
}

impl DraftField {
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Email => "Email",
        }
    }
}

/// The user being typed into the form. Serializes as the POST /users body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftUser {
    pub name: String,
    pub email: String,
}

impl DraftUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Both fields non-empty. Whitespace counts as content.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
        }
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Email => &mut self.email,
        }
    }

    pub fn push_char(&mut self, field: DraftField, c: char) {
        self.field_mut(field).push(c);
    }

    /// Append pasted text; line breaks are dropped since both inputs are
    /// single-line.
    pub fn push_str(&mut self, field: DraftField, text: &str) {
        let target = self.field_mut(field);
        target.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
    }

    pub fn backspace(&mut self, field: DraftField) {
        self.field_mut(field).pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete() {
        assert!(DraftUser::new("Ana", "a@x.com").is_complete());
        assert!(!DraftUser::new("", "a@x.com").is_complete());
        assert!(!DraftUser::new("Ana", "").is_complete());
        assert!(!DraftUser::default().is_complete());
        assert!(DraftUser::new(" ", " ").is_complete());
    }

    #[test]
    fn test_editing() {
        let mut draft = DraftUser::default();
        for c in "Anaa".chars() {
            draft.push_char(DraftField::Name, c);
        }
        draft.backspace(DraftField::Name);
        draft.push_str(DraftField::Email, "a@x.com\n");

        assert_eq!(draft, DraftUser::new("Ana", "a@x.com"));
        assert_eq!(draft.field(DraftField::Email), "a@x.com");

        draft.clear();
        assert_eq!(draft, DraftUser::default());
    }

    #[test]
    fn test_serializes_as_request_body() {
        let body = serde_json::to_value(DraftUser::new("Ana", "a@x.com")).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Ana", "email": "a@x.com"}));
    }
}
