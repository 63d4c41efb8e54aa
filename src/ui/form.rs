//! Form section drawing.

use crate::app::App;
use crate::ids;
use crate::model::FormModel;
use crate::renderer::FrameBuffer;
use crate::types::{Attr, Rect};

use super::{draw_button, draw_checkbox, draw_input, draw_title};

const LABEL_WIDTH: u16 = 10;
const INPUT_WIDTH: u16 = 32;

/// Rows: title, three labelled inputs, password hint, subscribe, submit,
/// plus one row per validation message and the success banner when shown.
pub fn measure(form: &FormModel) -> u16 {
    let mut rows = 7;
    rows += form.errors().len() as u16;
    if form.is_submitted() {
        rows += 1;
    }
    rows
}

pub fn draw(app: &App, buffer: &mut FrameBuffer, rect: Rect, clip: &Rect) {
    let theme = &app.theme;
    let form = &app.form;
    let mut y = rect.y;

    draw_title(buffer, rect, "Test Form", theme, clip);
    y += 1;

    let field_row =
        |buffer: &mut FrameBuffer, y: &mut u16, label: &str, control: &str, field, placeholder, mask| {
            buffer.draw_text(
                rect.x,
                *y,
                label,
                theme.text,
                theme.background,
                Attr::NONE,
                Some(clip),
            );
            draw_input(
                buffer,
                rect.x + LABEL_WIDTH,
                *y,
                INPUT_WIDTH.min(rect.width.saturating_sub(LABEL_WIDTH)),
                field,
                app.focus.is_focused(control),
                placeholder,
                mask,
                theme,
                clip,
            );
            *y += 1;

            if let Some(error) = form.error_for(control) {
                buffer.draw_text(
                    rect.x + LABEL_WIDTH,
                    *y,
                    &error.to_string(),
                    theme.error,
                    theme.background,
                    Attr::NONE,
                    Some(clip),
                );
                *y += 1;
            }
        };

    field_row(
        buffer,
        &mut y,
        "Name:",
        ids::NAME_INPUT,
        &form.name,
        "Enter your name",
        false,
    );
    field_row(
        buffer,
        &mut y,
        "Email:",
        ids::EMAIL_INPUT,
        &form.email,
        "your.email@example.com",
        false,
    );
    field_row(
        buffer,
        &mut y,
        "Password:",
        ids::PASSWORD_INPUT,
        &form.password,
        "••••••",
        true,
    );

    buffer.draw_text(
        rect.x + LABEL_WIDTH,
        y,
        "Minimum 6 characters",
        theme.text_muted,
        theme.background,
        Attr::ITALIC,
        Some(clip),
    );
    y += 1;

    draw_checkbox(
        buffer,
        rect.x + LABEL_WIDTH,
        y,
        form.subscribe,
        "Subscribe to newsletter",
        app.focus.is_focused(ids::SUBSCRIBE_CHECKBOX),
        theme,
        clip,
    );
    y += 1;

    draw_button(
        buffer,
        rect.x + LABEL_WIDTH,
        y,
        "Submit",
        app.focus.is_focused(ids::SUBMIT_BUTTON),
        true,
        theme,
        clip,
    );
    y += 1;

    if form.is_submitted() {
        buffer.draw_text(
            rect.x + LABEL_WIDTH,
            y,
            "✓ Form submitted successfully!",
            theme.success,
            theme.background,
            Attr::BOLD,
            Some(clip),
        );
    }
}
