//! Single-line text editing.
//!
//! Handles character insertion, deletion, cursor movement, and max-length
//! enforcement for every text field in the app (form fields, search box,
//! edit drafts, step input). Values are stored verbatim; validation is the
//! owning widget's business.

use crate::state::keys::{Key, KeyEvent};

/// An editable single-line text value with a cursor.
///
/// The cursor is a character index in `0..=chars`. All editing is
/// char-based so multi-byte input behaves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
    max_length: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field that refuses input beyond `max_length` characters.
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length,
            ..Self::default()
        }
    }

    pub fn from_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self {
            value,
            cursor,
            max_length: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Replace the value outright, cursor moved to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Route an editing key. Returns true when the key changed the value
    /// or cursor (i.e. the event was consumed).
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if event.modifiers.ctrl || event.modifiers.alt {
            return false;
        }
        match event.key {
            Key::Char(ch) => {
                self.insert_char(ch);
                true
            }
            Key::Backspace => {
                self.delete_backward();
                true
            }
            Key::Delete => {
                self.delete_forward();
                true
            }
            Key::Left => {
                self.move_cursor(-1);
                true
            }
            Key::Right => {
                self.move_cursor(1);
                true
            }
            Key::Home => {
                self.cursor = 0;
                true
            }
            Key::End => {
                self.cursor = self.char_count();
                true
            }
            _ => false,
        }
    }

    fn insert_char(&mut self, ch: char) {
        let mut chars: Vec<char> = self.value.chars().collect();
        if self.max_length > 0 && chars.len() >= self.max_length {
            return;
        }
        let cursor = self.cursor.min(chars.len());
        chars.insert(cursor, ch);
        self.value = chars.into_iter().collect();
        self.cursor = cursor + 1;
    }

    fn delete_backward(&mut self) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let cursor = self.cursor.min(chars.len());
        if cursor == 0 {
            return;
        }
        chars.remove(cursor - 1);
        self.value = chars.into_iter().collect();
        self.cursor = cursor - 1;
    }

    fn delete_forward(&mut self) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let cursor = self.cursor.min(chars.len());
        if cursor >= chars.len() {
            return;
        }
        chars.remove(cursor);
        self.value = chars.into_iter().collect();
    }

    fn move_cursor(&mut self, delta: i32) {
        let len = self.char_count() as i32;
        let next = (self.cursor as i32 + delta).clamp(0, len);
        self.cursor = next as usize;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::keys::Modifiers;

    fn press(field: &mut TextField, key: Key) {
        field.handle_key(&KeyEvent::new(key));
    }

    fn type_str(field: &mut TextField, text: &str) {
        for ch in text.chars() {
            press(field, Key::Char(ch));
        }
    }

    #[test]
    fn test_insert_and_cursor() {
        let mut field = TextField::new();
        type_str(&mut field, "abc");
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 3);

        press(&mut field, Key::Left);
        press(&mut field, Key::Left);
        press(&mut field, Key::Char('X'));
        assert_eq!(field.value(), "aXbc");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut field = TextField::from_value("abcd");
        press(&mut field, Key::Backspace);
        assert_eq!(field.value(), "abc");

        press(&mut field, Key::Home);
        press(&mut field, Key::Delete);
        assert_eq!(field.value(), "bc");

        press(&mut field, Key::Backspace); // at start, no-op
        assert_eq!(field.value(), "bc");
    }

    #[test]
    fn test_max_length() {
        let mut field = TextField::with_max_length(3);
        type_str(&mut field, "abcdef");
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn test_modified_chars_not_consumed() {
        let mut field = TextField::new();
        let event = KeyEvent {
            key: Key::Char('c'),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        };
        assert!(!field.handle_key(&event));
        assert!(field.is_empty());
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = TextField::new();
        type_str(&mut field, "héllo");
        press(&mut field, Key::Home);
        press(&mut field, Key::Right);
        press(&mut field, Key::Delete);
        assert_eq!(field.value(), "hllo");
    }
}
