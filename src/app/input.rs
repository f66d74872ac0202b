//! Keyboard and paste handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, Focus};
use crate::state::DraftField;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        // Any key press likely changes state (input, focus, navigation)
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.focus.draft_field() {
            Some(field) => self.handle_form_key(field, key),
            None => self.handle_panel_key(key),
        }
    }

    fn handle_panel_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('r') => self.fetch_health(),
            KeyCode::Char('u') => self.fetch_users(),
            KeyCode::Char('+') | KeyCode::Char('i') => self.increment_counter(),
            KeyCode::Tab | KeyCode::Char('a') => self.focus = Focus::Name,
            KeyCode::BackTab => self.focus = self.focus.prev(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, field: DraftField, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::Panels,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Enter => {
                self.add_user();
            }
            KeyCode::Backspace => self.state.draft.backspace(field),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.draft.push_char(field, c);
            }
            _ => {}
        }
    }

    /// Bracketed paste lands in the focused input; ignored on the panels.
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(field) = self.focus.draft_field() {
            self.state.draft.push_str(field, text);
            self.mark_dirty();
        }
    }
}
