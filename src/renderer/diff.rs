//! Differential renderer.
//!
//! Compares the current frame to the previous one and only outputs cells
//! that changed, wrapped in a synchronized-output block so partial frames
//! never show. A full redraw happens on the first frame, after a resize,
//! or after `invalidate()`.

use std::io;

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

/// Diff-based terminal renderer.
pub struct DiffRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
    alt_screen: bool,
}

impl DiffRenderer {
    /// Create a renderer. `alt_screen` selects the alternate screen buffer
    /// on setup; pass false for the debugging-friendly inline mode that
    /// leaves scrollback intact.
    pub fn new(alt_screen: bool) -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
            alt_screen,
        }
    }

    /// Enter fullscreen: alt screen (if enabled), hidden cursor, cleared
    /// screen. Call once before the first frame.
    pub fn setup(&mut self) -> io::Result<()> {
        if self.alt_screen {
            ansi::enter_alt_screen(&mut self.output)?;
        }
        ansi::cursor_hide(&mut self.output)?;
        ansi::clear_screen(&mut self.output)?;
        self.output.flush_stdout()?;
        self.invalidate();
        Ok(())
    }

    /// Restore the terminal. Call on the way out, error paths included.
    pub fn teardown(&mut self) -> io::Result<()> {
        ansi::reset(&mut self.output)?;
        ansi::cursor_show(&mut self.output)?;
        if self.alt_screen {
            ansi::exit_alt_screen(&mut self.output)?;
        } else {
            ansi::clear_screen(&mut self.output)?;
        }
        self.output.flush_stdout()
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns true if any cell reached the terminal.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut has_changes = false;

        ansi::begin_sync(&mut self.output)?;
        self.cell_renderer.reset();

        let width = buffer.width();
        let height = buffer.height();

        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|prev| prev.width() == width && prev.height() == height);

        for y in 0..height {
            for x in 0..width {
                let cell = match buffer.get(x, y) {
                    Some(cell) => cell,
                    None => continue,
                };

                let changed = if same_size {
                    self.previous
                        .as_ref()
                        .and_then(|prev| prev.get(x, y))
                        .is_none_or(|prev_cell| prev_cell != cell)
                } else {
                    true
                };

                if changed {
                    has_changes = true;
                    self.cell_renderer.render_cell(&mut self.output, x, y, cell);
                }
            }
        }

        ansi::end_sync(&mut self.output)?;
        self.output.flush_stdout()?;

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Drop the previous frame; the next render repaints everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

// =============================================================================
// Tests
// =============================================================================
