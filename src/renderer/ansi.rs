//! ANSI escape sequences for terminal control.
//!
//! Cursor movement, screen control, colors (truecolor + 256-palette),
//! text attributes, and synchronized output for flicker-free rendering.

use std::io::Write;

use crate::types::{Attr, Rgba};

// =============================================================================
// Cursor
// =============================================================================

/// Move cursor to absolute position (0-indexed input, 1-indexed wire format).
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> std::io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25l")
}

#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25h")
}

// =============================================================================
// Screen
// =============================================================================

/// Clear the screen and move cursor home.
#[inline]
pub fn clear_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[2J\x1b[H")
}

#[inline]
pub fn enter_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?1049h")
}

#[inline]
pub fn exit_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?1049l")
}

// =============================================================================
// Synchronized output (mode 2026)
// =============================================================================

/// Begin a synchronized update block. Terminals that support mode 2026
/// hold the frame until `end_sync`, eliminating tearing.
#[inline]
pub fn begin_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026h")
}

/// End a synchronized update block.
#[inline]
pub fn end_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026l")
}

// =============================================================================
// Colors and attributes
// =============================================================================

/// Reset all colors and attributes.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[0m")
}

/// Set foreground color.
pub fn fg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[39m")
    } else if color.is_ansi() {
        write!(w, "\x1b[38;5;{}m", color.ansi_index())
    } else {
        write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Set background color.
pub fn bg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[49m")
    } else if color.is_ansi() {
        write!(w, "\x1b[48;5;{}m", color.ansi_index())
    } else {
        write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Apply attribute flags. Does not reset first; callers reset themselves
/// when flags change.
pub fn attrs<W: Write>(w: &mut W, attrs: Attr) -> std::io::Result<()> {
    if attrs.contains(Attr::BOLD) {
        write!(w, "\x1b[1m")?;
    }
    if attrs.contains(Attr::DIM) {
        write!(w, "\x1b[2m")?;
    }
    if attrs.contains(Attr::ITALIC) {
        write!(w, "\x1b[3m")?;
    }
    if attrs.contains(Attr::UNDERLINE) {
        write!(w, "\x1b[4m")?;
    }
    if attrs.contains(Attr::INVERSE) {
        write!(w, "\x1b[7m")?;
    }
    if attrs.contains(Attr::STRIKETHROUGH) {
        write!(w, "\x1b[9m")?;
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
