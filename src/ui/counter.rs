//! Counter section drawing.

use crate::app::App;
use crate::ids;
use crate::model::CounterModel;
use crate::renderer::FrameBuffer;
use crate::types::{Attr, Rect};

use super::{draw_button, draw_input, draw_title, enabled_fg};

/// Rows: title, count display, step row, button row, history heading,
/// then the history entries (or the single empty-history line).
pub fn measure(counter: &CounterModel) -> u16 {
    5 + counter.history().len().max(1) as u16
}

pub fn draw(app: &App, buffer: &mut FrameBuffer, rect: Rect, clip: &Rect) {
    let theme = &app.theme;
    let counter = &app.counter;
    let manual_enabled = !counter.is_auto();

    draw_title(buffer, rect, "Counter", theme, clip);

    // Count display
    let count_line = format!("Count: {}", counter.count());
    buffer.draw_text(
        rect.x,
        rect.y + 1,
        &count_line,
        theme.accent,
        theme.background,
        Attr::BOLD,
        Some(clip),
    );

    // Step input (disabled while auto-increment runs)
    let step_y = rect.y + 2;
    buffer.draw_text(
        rect.x,
        step_y,
        "Step:",
        enabled_fg(manual_enabled, theme.text, theme),
        theme.background,
        Attr::NONE,
        Some(clip),
    );
    if manual_enabled {
        draw_input(
            buffer,
            rect.x + 6,
            step_y,
            4,
            &counter.step_input,
            app.focus.is_focused(ids::STEP_INPUT),
            "",
            false,
            theme,
            clip,
        );
    } else {
        buffer.draw_text(
            rect.x + 6,
            step_y,
            &counter.step().to_string(),
            theme.text_disabled,
            theme.background,
            Attr::NONE,
            Some(clip),
        );
    }
    buffer.draw_text(
        rect.x + 12,
        step_y,
        "(1-10)",
        theme.text_muted,
        theme.background,
        Attr::ITALIC,
        Some(clip),
    );

    // Button row
    let buttons_y = rect.y + 3;
    let mut x = rect.x;
    x += draw_button(
        buffer,
        x,
        buttons_y,
        &format!("-{}", counter.step()),
        app.focus.is_focused(ids::DECREMENT_BUTTON),
        manual_enabled,
        theme,
        clip,
    ) + 1;
    x += draw_button(
        buffer,
        x,
        buttons_y,
        &format!("+{}", counter.step()),
        app.focus.is_focused(ids::INCREMENT_BUTTON),
        manual_enabled,
        theme,
        clip,
    ) + 1;
    x += draw_button(
        buffer,
        x,
        buttons_y,
        if counter.is_auto() { "Stop" } else { "Auto" },
        app.focus.is_focused(ids::AUTO_BUTTON),
        true,
        theme,
        clip,
    ) + 1;
    draw_button(
        buffer,
        x,
        buttons_y,
        "Reset",
        app.focus.is_focused(ids::RESET_BUTTON),
        manual_enabled,
        theme,
        clip,
    );

    // History
    let history_y = rect.y + 4;
    buffer.draw_text(
        rect.x,
        history_y,
        "History",
        theme.text,
        theme.background,
        Attr::BOLD | Attr::UNDERLINE,
        Some(clip),
    );

    if counter.history().is_empty() {
        buffer.draw_text(
            rect.x,
            history_y + 1,
            "No history yet. Start counting!",
            theme.text_muted,
            theme.background,
            Attr::ITALIC,
            Some(clip),
        );
    } else {
        for (i, entry) in counter.history().iter().enumerate() {
            let y = history_y + 1 + i as u16;
            let stamp = format!("[{}]", entry.time());
            let used = buffer.draw_text(
                rect.x,
                y,
                &stamp,
                theme.text_muted,
                theme.background,
                Attr::NONE,
                Some(clip),
            );
            buffer.draw_text(
                rect.x + used + 1,
                y,
                &entry.action,
                theme.text,
                theme.background,
                Attr::NONE,
                Some(clip),
            );
        }
    }
}
