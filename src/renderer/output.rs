//! Output buffering and stateful cell rendering.
//!
//! Terminal writes are batched into one buffer and flushed with a single
//! syscall per frame. The cell renderer tracks terminal state (cursor,
//! colors, attributes) and only emits escape codes for what changed.

use std::io::{self, Write};

use crate::types::{Attr, Cell, Rgba};

use super::ansi;

// =============================================================================
// OutputBuffer
// =============================================================================

/// Accumulates output for batch writing.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(16384),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write a unicode codepoint, skipping invalid values.
    #[inline]
    pub fn write_codepoint(&mut self, cp: u32) {
        if let Some(c) = char::from_u32(cp) {
            self.write_char(c);
        }
    }

    /// Flush accumulated bytes to stdout in one write.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.data)?;
        stdout.flush()?;
        self.data.clear();
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // Buffering only; the real flush is flush_stdout.
        Ok(())
    }
}

// =============================================================================
// StatefulCellRenderer
// =============================================================================

/// Renders cells while tracking terminal state to minimize output.
///
/// Tracks last cursor position, colors, and attributes; a cell that
/// continues the previous run costs only its character bytes.
#[derive(Debug)]
pub struct StatefulCellRenderer {
    last_x: i32,
    last_y: i32,
    last_fg: Option<Rgba>,
    last_bg: Option<Rgba>,
    last_attrs: Attr,
}

impl StatefulCellRenderer {
    pub fn new() -> Self {
        Self {
            last_x: -1,
            last_y: -1,
            last_fg: None,
            last_bg: None,
            last_attrs: Attr::NONE,
        }
    }

    /// Reset tracked state. Call at the start of each frame.
    pub fn reset(&mut self) {
        self.last_x = -1;
        self.last_y = -1;
        self.last_fg = None;
        self.last_bg = None;
        self.last_attrs = Attr::NONE;
    }

    /// Render a single cell, emitting escapes only for changed state.
    pub fn render_cell(&mut self, output: &mut OutputBuffer, x: u16, y: u16, cell: &Cell) {
        // Wide-char continuation cells occupy the grid but emit nothing.
        if cell.char == 0 {
            self.last_x = x as i32;
            self.last_y = y as i32;
            return;
        }

        if y as i32 != self.last_y || x as i32 != self.last_x + 1 {
            ansi::cursor_to(output, x, y).ok();
        }

        if cell.attrs != self.last_attrs {
            // Attributes can only be cleared by a full reset, which also
            // drops colors; force both to re-emit.
            ansi::reset(output).ok();
            if !cell.attrs.is_empty() {
                ansi::attrs(output, cell.attrs).ok();
            }
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = cell.attrs;
        }

        if self.last_fg != Some(cell.fg) {
            ansi::fg(output, cell.fg).ok();
            self.last_fg = Some(cell.fg);
        }

        if self.last_bg != Some(cell.bg) {
            ansi::bg(output, cell.bg).ok();
            self.last_bg = Some(cell.bg);
        }

        output.write_codepoint(cell.char);

        self.last_x = x as i32;
        self.last_y = y as i32;
    }
}

impl Default for StatefulCellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_buffer_codepoint() {
        let mut buf = OutputBuffer::new();
        buf.write_codepoint('A' as u32);
        buf.write_codepoint(0x110000); // invalid, skipped
        assert_eq!(buf.as_bytes(), b"A");
    }

    #[test]
    fn test_sequential_cells_skip_cursor_move() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();

        let cell = Cell {
            char: 'A' as u32,
            fg: Rgba::WHITE,
            bg: Rgba::BLACK,
            attrs: Attr::NONE,
        };

        renderer.render_cell(&mut output, 0, 0, &cell);
        let first_len = output.len();

        output.clear();
        renderer.render_cell(&mut output, 1, 0, &cell);

        assert!(
            output.len() < first_len,
            "sequential cell should skip cursor move and color codes"
        );
    }

    #[test]
    fn test_continuation_cell_emits_nothing() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();

        let continuation = Cell {
            char: 0,
            ..Cell::default()
        };
        renderer.render_cell(&mut output, 0, 0, &continuation);
        assert!(output.is_empty());
    }

    #[test]
    fn test_attr_change_forces_color_reemit() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();

        let plain = Cell {
            char: 'a' as u32,
            fg: Rgba::rgb(10, 20, 30),
            bg: Rgba::BLACK,
            attrs: Attr::NONE,
        };
        let bold = Cell {
            attrs: Attr::BOLD,
            ..plain
        };

        renderer.render_cell(&mut output, 0, 0, &plain);
        output.clear();
        renderer.render_cell(&mut output, 1, 0, &bold);

        let text = String::from_utf8_lossy(output.as_bytes()).to_string();
        assert!(text.contains("\x1b[0m"), "reset before new attrs");
        assert!(text.contains("\x1b[38;2;10;20;30m"), "fg re-emitted after reset");
    }
}
