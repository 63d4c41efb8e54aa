//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells representing what the terminal
//! should display. All drawing goes through this buffer; the diff renderer
//! decides what actually reaches the terminal.
//!
//! Flat `Vec<Cell>` storage with row-major indexing. Every drawing function
//! accepts an optional clip rect so sections can never paint outside their
//! layout slot.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::{Attr, BorderStyle, Cell, Rect, Rgba};

// =============================================================================
// FrameBuffer
// =============================================================================

/// A 2D buffer of terminal cells, indexed `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Full buffer bounds as a clip rect.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Clear the entire buffer to default cells.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// Clear with a specific background color.
    pub fn clear_with_bg(&mut self, bg: Rgba) {
        for cell in &mut self.cells {
            *cell = Cell {
                bg,
                ..Cell::default()
            };
        }
    }

    /// Resize the buffer (clears content).
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let size = width as usize * height as usize;
        self.cells.resize(size, Cell::default());
        self.clear();
    }

    /// Extract a row as a plain string (test/debug helper; trailing
    /// whitespace trimmed, continuation cells skipped).
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                if cell.char == 0 {
                    continue;
                }
                if let Some(c) = char::from_u32(cell.char) {
                    out.push(c);
                }
            }
        }
        out.trim_end().to_string()
    }

    // =========================================================================
    // Drawing primitives
    // =========================================================================

    /// Set a single cell with optional clipping. Returns true if set.
    pub fn set_cell(
        &mut self,
        x: u16,
        y: u16,
        char: u32,
        fg: Rgba,
        bg: Rgba,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        if let Some(clip) = clip {
            if !clip.contains(x, y) {
                return false;
            }
        }

        let idx = self.index(x, y);
        self.cells[idx] = Cell {
            char,
            fg,
            bg,
            attrs,
        };
        true
    }

    /// Fill a rectangle with a background color, resetting glyphs to spaces.
    pub fn fill_rect(&mut self, rect: Rect, bg: Rgba, clip: Option<&Rect>) {
        let bounded = match rect.intersect(&self.bounds()) {
            Some(r) => r,
            None => return,
        };
        let effective = match clip {
            Some(clip) => match bounded.intersect(clip) {
                Some(r) => r,
                None => return,
            },
            None => bounded,
        };

        for row in effective.y..effective.bottom() {
            let row_start = self.index(effective.x, row);
            let row_end = self.index(effective.right(), row);
            for cell in &mut self.cells[row_start..row_end] {
                *cell = Cell {
                    char: b' ' as u32,
                    fg: cell.fg,
                    bg,
                    attrs: Attr::NONE,
                };
            }
        }
    }

    /// Draw a single character.
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        char: char,
        fg: Rgba,
        bg: Rgba,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> bool {
        self.set_cell(x, y, char as u32, fg, bg, attrs, clip)
    }

    /// Draw text at a position. Returns the number of columns used.
    ///
    /// Wide characters (CJK, emoji) occupy two cells; the second is a
    /// continuation marker (char 0) the renderer skips.
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgba,
        bg: Rgba,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }

            let char_width = ch.width().unwrap_or(0);
            if char_width == 0 {
                continue;
            }

            if self.set_cell(col, y, ch as u32, fg, bg, attrs, clip) && char_width == 2 {
                // Mark the spillover cell as a continuation.
                self.set_cell(col + 1, y, 0, fg, bg, attrs, clip);
            }

            col = col.saturating_add(char_width as u16);
        }

        col.saturating_sub(x)
    }

    /// Draw text centered within a width.
    pub fn draw_text_centered(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        fg: Rgba,
        bg: Rgba,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> u16 {
        let text_width = text.width();
        if text_width >= width as usize {
            return self.draw_text(x, y, text, fg, bg, attrs, clip);
        }
        let offset = ((width as usize - text_width) / 2) as u16;
        self.draw_text(x + offset, y, text, fg, bg, attrs, clip)
    }

    /// Draw a horizontal line of a repeated character.
    pub fn draw_hline(
        &mut self,
        x: u16,
        y: u16,
        length: u16,
        char: char,
        fg: Rgba,
        bg: Rgba,
        clip: Option<&Rect>,
    ) {
        for col in x..x.saturating_add(length).min(self.width) {
            self.draw_char(col, y, char, fg, bg, Attr::NONE, clip);
        }
    }

    /// Draw a border around a rectangle.
    pub fn draw_border(
        &mut self,
        rect: Rect,
        style: BorderStyle,
        color: Rgba,
        bg: Rgba,
        clip: Option<&Rect>,
    ) {
        if rect.width < 2 || rect.height < 2 || style == BorderStyle::None {
            return;
        }

        let (horiz, vert, tl, tr, br, bl) = style.chars();
        let x2 = rect.right() - 1;
        let y2 = rect.bottom() - 1;

        self.draw_char(rect.x, rect.y, tl, color, bg, Attr::NONE, clip);
        self.draw_char(x2, rect.y, tr, color, bg, Attr::NONE, clip);
        self.draw_char(x2, y2, br, color, bg, Attr::NONE, clip);
        self.draw_char(rect.x, y2, bl, color, bg, Attr::NONE, clip);

        for col in (rect.x + 1)..x2 {
            self.draw_char(col, rect.y, horiz, color, bg, Attr::NONE, clip);
            self.draw_char(col, y2, horiz, color, bg, Attr::NONE, clip);
        }
        for row in (rect.y + 1)..y2 {
            self.draw_char(rect.x, row, vert, color, bg, Attr::NONE, clip);
            self.draw_char(x2, row, vert, color, bg, Attr::NONE, clip);
        }
    }
}

// =============================================================================
// Text width utilities
// =============================================================================

/// Display width of a string in terminal columns.
pub fn string_width(s: &str) -> usize {
    s.width()
}

/// Truncate a string to fit `max` columns, appending an ellipsis when cut.
pub fn truncate_text(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let budget = max - 1; // room for the ellipsis
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framebuffer_creation() {
        let buffer = FrameBuffer::new(80, 24);
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
        assert_eq!(buffer.get(79, 23).unwrap().char, b' ' as u32);
        assert!(buffer.get(80, 0).is_none());
    }

    #[test]
    fn test_set_cell_clipped() {
        let mut buffer = FrameBuffer::new(10, 10);
        let clip = Rect::new(0, 0, 5, 5);

        assert!(buffer.set_cell(2, 2, 'X' as u32, Rgba::RED, Rgba::BLACK, Attr::NONE, Some(&clip)));
        assert!(!buffer.set_cell(7, 7, 'X' as u32, Rgba::RED, Rgba::BLACK, Attr::NONE, Some(&clip)));
        assert_eq!(buffer.get(2, 2).unwrap().char, 'X' as u32);
        assert_eq!(buffer.get(7, 7).unwrap().char, b' ' as u32);
    }

    #[test]
    fn test_fill_rect() {
        let mut buffer = FrameBuffer::new(20, 20);
        buffer.fill_rect(Rect::new(5, 5, 10, 10), Rgba::rgb(0, 0, 255), None);

        assert_eq!(buffer.get(5, 5).unwrap().bg, Rgba::rgb(0, 0, 255));
        assert_eq!(buffer.get(14, 14).unwrap().bg, Rgba::rgb(0, 0, 255));
        assert_eq!(buffer.get(4, 5).unwrap().bg, Rgba::TERMINAL_DEFAULT);
        assert_eq!(buffer.get(15, 5).unwrap().bg, Rgba::TERMINAL_DEFAULT);
    }

    #[test]
    fn test_draw_text() {
        let mut buffer = FrameBuffer::new(20, 5);
        let used = buffer.draw_text(0, 0, "Hello", Rgba::WHITE, Rgba::BLACK, Attr::NONE, None);

        assert_eq!(used, 5);
        assert_eq!(buffer.get(0, 0).unwrap().char, 'H' as u32);
        assert_eq!(buffer.get(4, 0).unwrap().char, 'o' as u32);
        assert_eq!(buffer.row_text(0), "Hello");
    }

    #[test]
    fn test_draw_text_wide_chars() {
        let mut buffer = FrameBuffer::new(20, 5);
        let used = buffer.draw_text(0, 0, "中", Rgba::WHITE, Rgba::BLACK, Attr::NONE, None);

        assert_eq!(used, 2);
        assert_eq!(buffer.get(0, 0).unwrap().char, '中' as u32);
        assert_eq!(buffer.get(1, 0).unwrap().char, 0);
    }

    #[test]
    fn test_draw_text_centered() {
        let mut buffer = FrameBuffer::new(11, 1);
        buffer.draw_text_centered(0, 0, 11, "abc", Rgba::WHITE, Rgba::BLACK, Attr::NONE, None);
        assert_eq!(buffer.get(4, 0).unwrap().char, 'a' as u32);
    }

    #[test]
    fn test_draw_border() {
        let mut buffer = FrameBuffer::new(10, 5);
        buffer.draw_border(
            Rect::new(0, 0, 10, 5),
            BorderStyle::Rounded,
            Rgba::WHITE,
            Rgba::TERMINAL_DEFAULT,
            None,
        );

        assert_eq!(buffer.get(0, 0).unwrap().char, '╭' as u32);
        assert_eq!(buffer.get(9, 0).unwrap().char, '╮' as u32);
        assert_eq!(buffer.get(9, 4).unwrap().char, '╯' as u32);
        assert_eq!(buffer.get(0, 4).unwrap().char, '╰' as u32);
        assert_eq!(buffer.get(5, 0).unwrap().char, '─' as u32);
        assert_eq!(buffer.get(0, 2).unwrap().char, '│' as u32);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 6), "hello…");
        assert_eq!(truncate_text("hello", 0), "");
    }

    #[test]
    fn test_string_width() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width("中文"), 4);
    }
}
