//! Core types for drill-tui.
//!
//! The renderer's vocabulary: colors, attributes, cells, rectangles.
//! Everything the drawing layer produces and the output layer consumes.

// =============================================================================
// Color
// =============================================================================

/// RGB color with 8-bit channels, stored as i16 so sentinel values fit.
///
/// Special values:
/// - `r == -1`: terminal default (let the terminal pick)
/// - `r == -2`: ANSI palette color, index in `g`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
}

impl Rgba {
    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
        }
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// ANSI palette color (0-255).
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
        }
    }

    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// Palette index, only meaningful when `is_ansi()`.
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }

    /// Dim the color by a factor (0.0 = black, 1.0 = unchanged).
    pub fn dim(self, factor: f32) -> Self {
        if self.is_terminal_default() || self.is_ansi() {
            return Self::GRAY;
        }
        Self {
            r: (self.r as f32 * factor).clamp(0.0, 255.0) as i16,
            g: (self.g as f32 * factor).clamp(0.0, 255.0) as i16,
            b: (self.b as f32 * factor).clamp(0.0, 255.0) as i16,
        }
    }
}

// =============================================================================
// Cell attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for cheap storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
        const STRIKETHROUGH = 1 << 5;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// A single terminal cell. The entire drawing pipeline computes these,
/// the renderer outputs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode codepoint (32 for space, 0 for wide-char continuation).
    pub char: u32,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// Rect
// =============================================================================

/// A rectangle in cell coordinates. Used both for layout results and for
/// clipping during drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    #[inline]
    pub fn right(&self) -> u16 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Intersection of two rects, or None when they don't overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 && y2 > y1 {
            Some(Rect {
                x: x1,
                y: y1,
                width: x2 - x1,
                height: y2 - y1,
            })
        } else {
            None
        }
    }

    /// Shrink by `n` cells on every side.
    pub fn inset(&self, n: u16) -> Rect {
        let double = n.saturating_mul(2);
        Rect {
            x: self.x.saturating_add(n),
            y: self.y.saturating_add(n),
            width: self.width.saturating_sub(double),
            height: self.height.saturating_sub(double),
        }
    }
}

// =============================================================================
// Border styles
// =============================================================================

/// Box border glyph sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    None,
    /// ─ │ ┌ ┐ └ ┘
    Single,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double,
}

impl BorderStyle {
    /// (horizontal, vertical, top-left, top-right, bottom-right, bottom-left)
    pub const fn chars(&self) -> (char, char, char, char, char, char) {
        match self {
            BorderStyle::None => (' ', ' ', ' ', ' ', ' ', ' '),
            BorderStyle::Single => ('─', '│', '┌', '┐', '┘', '└'),
            BorderStyle::Rounded => ('─', '│', '╭', '╮', '╯', '╰'),
            BorderStyle::Double => ('═', '║', '╔', '╗', '╝', '╚'),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
