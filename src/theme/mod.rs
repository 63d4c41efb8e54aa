//! Theme system.
//!
//! Semantic color roles for the page, with presets selectable by name.
//! The `terminal` preset uses ANSI palette indices so the user's terminal
//! scheme shows through; the others carry explicit RGB palettes.

use crate::model::Role;
use crate::types::Rgba;

/// Semantic colors every drawing function reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    // Main palette
    pub primary: Rgba,
    pub accent: Rgba,
    // Semantic
    pub success: Rgba,
    pub error: Rgba,
    pub warning: Rgba,
    // Text
    pub text: Rgba,
    pub text_muted: Rgba,
    pub text_disabled: Rgba,
    // Background
    pub background: Rgba,
    pub surface: Rgba,
    // Border
    pub border: Rgba,
    pub border_focus: Rgba,
}

impl Theme {
    /// Badge color for a role tag.
    pub fn role_color(&self, role: Role) -> Rgba {
        match role {
            Role::Admin => self.error,
            Role::Editor => self.accent,
            Role::Viewer => self.primary,
            Role::User => self.text_muted,
        }
    }

    /// Color for an Active/Inactive status tag.
    pub fn status_color(&self, active: bool) -> Rgba {
        if active {
            self.success
        } else {
            self.text_muted
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        terminal()
    }
}

// =============================================================================
// Presets
// =============================================================================

/// Terminal theme: ANSI colors, respects the user's terminal scheme.
/// The default.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        primary: Rgba::ansi(12),  // bright blue
        accent: Rgba::ansi(11),   // bright yellow
        success: Rgba::ansi(2),   // green
        error: Rgba::ansi(1),     // red
        warning: Rgba::ansi(3),   // yellow
        text: Rgba::TERMINAL_DEFAULT,
        text_muted: Rgba::ansi(8),
        text_disabled: Rgba::ansi(8),
        background: Rgba::TERMINAL_DEFAULT,
        surface: Rgba::TERMINAL_DEFAULT,
        border: Rgba::ansi(7),
        border_focus: Rgba::ansi(12),
    }
}

/// Dracula.
pub fn dracula() -> Theme {
    Theme {
        name: "dracula".to_string(),
        primary: Rgba::rgb(189, 147, 249),  // purple
        accent: Rgba::rgb(255, 121, 198),   // pink
        success: Rgba::rgb(80, 250, 123),   // green
        error: Rgba::rgb(255, 85, 85),      // red
        warning: Rgba::rgb(241, 250, 140),  // yellow
        text: Rgba::rgb(248, 248, 242),
        text_muted: Rgba::rgb(98, 114, 164),
        text_disabled: Rgba::rgb(68, 71, 90),
        background: Rgba::rgb(40, 42, 54),
        surface: Rgba::rgb(68, 71, 90),
        border: Rgba::rgb(98, 114, 164),
        border_focus: Rgba::rgb(189, 147, 249),
    }
}

/// Nord.
pub fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        primary: Rgba::rgb(136, 192, 208),  // frost cyan
        accent: Rgba::rgb(129, 161, 193),   // frost blue
        success: Rgba::rgb(163, 190, 140),  // aurora green
        error: Rgba::rgb(191, 97, 106),     // aurora red
        warning: Rgba::rgb(235, 203, 139),  // aurora yellow
        text: Rgba::rgb(216, 222, 233),
        text_muted: Rgba::rgb(106, 118, 137),
        text_disabled: Rgba::rgb(76, 86, 106),
        background: Rgba::rgb(46, 52, 64),
        surface: Rgba::rgb(59, 66, 82),
        border: Rgba::rgb(76, 86, 106),
        border_focus: Rgba::rgb(136, 192, 208),
    }
}

/// Look up a preset by name (case-insensitive). None for unknown names.
pub fn get_preset(name: &str) -> Option<Theme> {
    match name.to_lowercase().as_str() {
        "terminal" => Some(terminal()),
        "dracula" => Some(dracula()),
        "nord" => Some(nord()),
        _ => None,
    }
}

/// Names accepted by [`get_preset`].
pub fn preset_names() -> &'static [&'static str] {
    &["terminal", "dracula", "nord"]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_preset_known_names() {
        for name in preset_names() {
            let theme = get_preset(name).unwrap();
            assert_eq!(theme.name, *name);
        }
    }

    #[test]
    fn test_get_preset_case_insensitive() {
        assert_eq!(get_preset("Dracula").unwrap().name, "dracula");
    }

    #[test]
    fn test_get_preset_unknown() {
        assert!(get_preset("no-such-theme").is_none());
    }

    #[test]
    fn test_role_colors_distinct_from_each_other() {
        let theme = dracula();
        assert_ne!(theme.role_color(Role::Admin), theme.role_color(Role::User));
        assert_ne!(theme.status_color(true), theme.status_color(false));
    }
}
