//! Keyboard events.
//!
//! Bridges crossterm's event types to the app's own key representation,
//! so the rest of the crate (and the tests) never touch crossterm types
//! directly.

use crossterm::event::{KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers};

/// Keys the app reacts to. Everything else maps to `Other` and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Other,
}

/// Keyboard modifier state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// A key press as the app sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A plain key press with no modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// A plain character press. Test-driver convenience.
    pub fn char(ch: char) -> Self {
        Self::new(Key::Char(ch))
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        }
    }

    pub fn is_ctrl_c(&self) -> bool {
        self.modifiers.ctrl && matches!(self.key, Key::Char('c') | Key::Char('C'))
    }
}

/// Convert a crossterm key event. Returns None for release/repeat events;
/// only presses drive the app.
pub fn convert_key_event(event: CrosstermKeyEvent) -> Option<KeyEvent> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => Key::Other,
    };

    Some(KeyEvent {
        key,
        modifiers: Modifiers {
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        },
    })
}

// =============================================================================
// Tests
// =============================================================================
