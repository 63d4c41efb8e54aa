//! Drawing layer.
//!
//! Pure functions from widget state to frame-buffer cells. Each section
//! measures its own height from state, the layout engine places the
//! sections, and every draw call clips to its section rect so nothing can
//! paint over a neighbour.

mod counter;
mod form;
mod shell;
mod table;

use crate::app::App;
use crate::error::Result;
use crate::layout::{compute_page_layout, SectionHeights};
use crate::renderer::FrameBuffer;
use crate::state::TextField;
use crate::theme::Theme;
use crate::types::{Attr, Rect, Rgba};

/// Measure every section for the current widget state.
pub fn measure(app: &App) -> SectionHeights {
    SectionHeights {
        header: 2,
        intro: 3,
        form: form::measure(&app.form),
        table: table::measure(&app.table),
        counter: counter::measure(&app.counter),
        footer: 1,
    }
}

/// Draw the whole page into the buffer.
pub fn draw(app: &App, buffer: &mut FrameBuffer) -> Result<()> {
    let theme = &app.theme;
    buffer.clear_with_bg(theme.background);

    let rects = compute_page_layout(buffer.width(), buffer.height(), &measure(app))?;
    let bounds = buffer.bounds();

    if let Some(clip) = rects.header.intersect(&bounds) {
        shell::draw_header(buffer, rects.header, theme, &clip);
    }
    if let Some(clip) = rects.intro.intersect(&bounds) {
        shell::draw_intro(buffer, rects.intro, theme, &clip);
    }
    if let Some(clip) = rects.form.intersect(&bounds) {
        form::draw(app, buffer, rects.form, &clip);
    }
    if let Some(clip) = rects.table.intersect(&bounds) {
        table::draw(app, buffer, rects.table, &clip);
    }
    if let Some(clip) = rects.counter.intersect(&bounds) {
        counter::draw(app, buffer, rects.counter, &clip);
    }
    if let Some(clip) = rects.footer.intersect(&bounds) {
        shell::draw_footer(buffer, rects.footer, theme, &clip);
    }

    Ok(())
}

// =============================================================================
// Shared control drawing
// =============================================================================

/// Draw a single-line text input of `width` cells. Shows the placeholder
/// (muted, italic) while empty, masks the value when `mask` is set, and
/// renders the cursor as an inverse cell when focused. Long values scroll
/// so the cursor stays visible.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_input(
    buffer: &mut FrameBuffer,
    x: u16,
    y: u16,
    width: u16,
    field: &TextField,
    focused: bool,
    placeholder: &str,
    mask: bool,
    theme: &Theme,
    clip: &Rect,
) {
    if width == 0 {
        return;
    }

    let bg = theme.surface;
    buffer.fill_rect(Rect::new(x, y, width, 1), bg, Some(clip));

    let display: String = if mask {
        "•".repeat(field.char_count())
    } else {
        field.value().to_string()
    };

    if display.is_empty() && !focused {
        buffer.draw_text(
            x,
            y,
            &crate::renderer::truncate_text(placeholder, width as usize),
            theme.text_muted,
            bg,
            Attr::ITALIC,
            Some(clip),
        );
        return;
    }

    // Window the text so the cursor is always on screen.
    let cursor = field.cursor();
    let visible_cols = width as usize;
    let skip = (cursor + 1).saturating_sub(visible_cols);
    let windowed: String = display.chars().skip(skip).take(visible_cols).collect();
    buffer.draw_text(x, y, &windowed, theme.text, bg, Attr::NONE, Some(clip));

    if focused {
        let cursor_x = x + (cursor - skip) as u16;
        if let Some(cell) = buffer.get_mut(cursor_x, y) {
            if clip.contains(cursor_x, y) {
                cell.attrs |= Attr::INVERSE;
            }
        }
    }
}

/// Draw a `[ label ]` button. Returns the columns used.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_button(
    buffer: &mut FrameBuffer,
    x: u16,
    y: u16,
    label: &str,
    focused: bool,
    enabled: bool,
    theme: &Theme,
    clip: &Rect,
) -> u16 {
    let text = format!("[ {label} ]");
    let fg = if !enabled {
        theme.text_disabled
    } else if focused {
        theme.accent
    } else {
        theme.text
    };
    let attrs = if focused { Attr::INVERSE | Attr::BOLD } else { Attr::NONE };
    buffer.draw_text(x, y, &text, fg, theme.background, attrs, Some(clip))
}

/// Draw a `[x] label` checkbox. Returns the columns used.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_checkbox(
    buffer: &mut FrameBuffer,
    x: u16,
    y: u16,
    checked: bool,
    label: &str,
    focused: bool,
    theme: &Theme,
    clip: &Rect,
) -> u16 {
    let mark = if checked { 'x' } else { ' ' };
    let text = format!("[{mark}] {label}");
    let attrs = if focused { Attr::INVERSE } else { Attr::NONE };
    buffer.draw_text(x, y, &text, theme.text, theme.background, attrs, Some(clip))
}

/// Draw a section heading.
pub(crate) fn draw_title(
    buffer: &mut FrameBuffer,
    rect: Rect,
    title: &str,
    theme: &Theme,
    clip: &Rect,
) {
    buffer.draw_text(
        rect.x,
        rect.y,
        title,
        theme.primary,
        theme.background,
        Attr::BOLD,
        Some(clip),
    );
}

/// Pick a plain color unless disabled.
pub(crate) fn enabled_fg(enabled: bool, fg: Rgba, theme: &Theme) -> Rgba {
    if enabled {
        fg
    } else {
        theme.text_disabled
    }
}
