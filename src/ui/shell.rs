//! Static page chrome: header, intro text, footer.

use chrono::{Datelike, Local};

use crate::renderer::FrameBuffer;
use crate::theme::Theme;
use crate::types::{Attr, Rect};

const TITLE: &str = "Software Testing Demo";
const SUBTITLE: &str = "A playground for testing practice";

pub fn draw_header(buffer: &mut FrameBuffer, rect: Rect, theme: &Theme, clip: &Rect) {
    buffer.draw_text_centered(
        rect.x,
        rect.y,
        rect.width,
        TITLE,
        theme.primary,
        theme.background,
        Attr::BOLD,
        Some(clip),
    );
    buffer.draw_text_centered(
        rect.x,
        rect.y + 1,
        rect.width,
        SUBTITLE,
        theme.text_muted,
        theme.background,
        Attr::NONE,
        Some(clip),
    );
}

pub fn draw_intro(buffer: &mut FrameBuffer, rect: Rect, theme: &Theme, clip: &Rect) {
    buffer.draw_text(
        rect.x,
        rect.y,
        "Welcome to the Software Testing Demo",
        theme.text,
        theme.background,
        Attr::BOLD,
        Some(clip),
    );
    buffer.draw_text(
        rect.x,
        rect.y + 1,
        "This application is designed to help students practice software testing techniques.",
        theme.text_muted,
        theme.background,
        Attr::NONE,
        Some(clip),
    );
    buffer.draw_text(
        rect.x,
        rect.y + 2,
        "Below you'll find several interactive components that can be used for testing practice.",
        theme.text_muted,
        theme.background,
        Attr::NONE,
        Some(clip),
    );
}

pub fn draw_footer(buffer: &mut FrameBuffer, rect: Rect, theme: &Theme, clip: &Rect) {
    let year = Local::now().year();
    let line = format!("© {year} Software Testing Demo - Educational Purposes");
    buffer.draw_text_centered(
        rect.x,
        rect.y,
        rect.width,
        &line,
        theme.text_muted,
        theme.background,
        Attr::NONE,
        Some(clip),
    );
}
