//! Table section drawing.
//!
//! Columns: ID | Name | Email | Role | Status | Actions. The editing row
//! swaps its cells for draft inputs and its action buttons for
//! Save/Cancel. A staged delete renders its confirmation prompt on the
//! section's last row.

use crate::app::App;
use crate::ids;
use crate::model::{TableModel, UserRecord};
use crate::renderer::{truncate_text, FrameBuffer};
use crate::theme::Theme;
use crate::types::{Attr, Rect};

use super::{draw_button, draw_checkbox, draw_input, draw_title};

const ID_WIDTH: u16 = 4;
const ROLE_WIDTH: u16 = 10;
const STATUS_WIDTH: u16 = 12;
const ACTIONS_WIDTH: u16 = 24;

/// Column x-offsets and widths for a section width.
struct Columns {
    id: (u16, u16),
    name: (u16, u16),
    email: (u16, u16),
    role: (u16, u16),
    status: (u16, u16),
    actions: (u16, u16),
}

fn columns(rect: Rect) -> Columns {
    let fixed = ID_WIDTH + ROLE_WIDTH + STATUS_WIDTH + ACTIONS_WIDTH;
    let flex = rect.width.saturating_sub(fixed);
    let name_width = flex / 2;
    let email_width = flex - name_width;

    let id_x = rect.x;
    let name_x = id_x + ID_WIDTH;
    let email_x = name_x + name_width;
    let role_x = email_x + email_width;
    let status_x = role_x + ROLE_WIDTH;
    let actions_x = status_x + STATUS_WIDTH;

    Columns {
        id: (id_x, ID_WIDTH),
        name: (name_x, name_width),
        email: (email_x, email_width),
        role: (role_x, ROLE_WIDTH),
        status: (status_x, STATUS_WIDTH),
        actions: (actions_x, ACTIONS_WIDTH),
    }
}

/// Rows: title, search, column header, data rows (or the single
/// no-results row), and the confirmation prompt while a delete is staged.
/// While loading only the title and the loading indicator show.
pub fn measure(table: &TableModel) -> u16 {
    if table.is_loading() {
        return 2;
    }
    let data_rows = table.visible().len().max(1) as u16;
    let prompt = if table.pending_delete().is_some() { 1 } else { 0 };
    3 + data_rows + prompt
}

pub fn draw(app: &App, buffer: &mut FrameBuffer, rect: Rect, clip: &Rect) {
    let theme = &app.theme;
    let table = &app.table;

    draw_title(buffer, rect, "User Management", theme, clip);

    if table.is_loading() {
        buffer.draw_text(
            rect.x,
            rect.y + 1,
            "Loading users...",
            theme.text_muted,
            theme.background,
            Attr::ITALIC,
            Some(clip),
        );
        return;
    }

    // Search row
    let search_y = rect.y + 1;
    buffer.draw_text(
        rect.x,
        search_y,
        "Search:",
        theme.text,
        theme.background,
        Attr::NONE,
        Some(clip),
    );
    draw_input(
        buffer,
        rect.x + 8,
        search_y,
        28.min(rect.width.saturating_sub(8)),
        &table.search,
        app.focus.is_focused(ids::SEARCH_INPUT),
        "Search users...",
        false,
        theme,
        clip,
    );

    // Column header
    let cols = columns(rect);
    let head_y = rect.y + 2;
    let head = [
        (cols.id, "ID"),
        (cols.name, "Name"),
        (cols.email, "Email"),
        (cols.role, "Role"),
        (cols.status, "Status"),
        (cols.actions, "Actions"),
    ];
    for ((x, width), label) in head {
        buffer.draw_text(
            x,
            head_y,
            &truncate_text(label, width as usize),
            theme.text,
            theme.background,
            Attr::BOLD | Attr::UNDERLINE,
            Some(clip),
        );
    }

    // Data rows
    let visible = table.visible();
    if visible.is_empty() {
        buffer.draw_text_centered(
            rect.x,
            head_y + 1,
            rect.width,
            "No users found",
            theme.text_muted,
            theme.background,
            Attr::ITALIC,
            Some(clip),
        );
    } else {
        for (i, record) in visible.iter().copied().enumerate() {
            let y = head_y + 1 + i as u16;
            if table.editing_id() == Some(record.id) {
                draw_editing_row(app, buffer, &cols, y, record, clip);
            } else {
                draw_view_row(app, buffer, &cols, y, record, clip);
            }
        }
    }

    // Delete confirmation prompt
    if table.pending_delete().is_some() {
        let prompt_y = rect.bottom().saturating_sub(1);
        buffer.draw_text(
            rect.x,
            prompt_y,
            "Are you sure you want to delete this user? (y/n)",
            theme.warning,
            theme.background,
            Attr::BOLD,
            Some(clip),
        );
    }
}

fn draw_view_row(
    app: &App,
    buffer: &mut FrameBuffer,
    cols: &Columns,
    y: u16,
    record: &UserRecord,
    clip: &Rect,
) {
    let theme = &app.theme;

    draw_id_cell(buffer, cols, y, record, theme, clip);
    buffer.draw_text(
        cols.name.0,
        y,
        &truncate_text(&record.name, cols.name.1 as usize),
        theme.text,
        theme.background,
        Attr::NONE,
        Some(clip),
    );
    // Email renders underlined, the terminal stand-in for a mailto link.
    buffer.draw_text(
        cols.email.0,
        y,
        &truncate_text(&record.email, cols.email.1 as usize),
        theme.primary,
        theme.background,
        Attr::UNDERLINE,
        Some(clip),
    );
    buffer.draw_text(
        cols.role.0,
        y,
        record.role.as_str(),
        theme.role_color(record.role),
        theme.background,
        Attr::BOLD,
        Some(clip),
    );
    let status = if record.active { "Active" } else { "Inactive" };
    buffer.draw_text(
        cols.status.0,
        y,
        status,
        theme.status_color(record.active),
        theme.background,
        Attr::NONE,
        Some(clip),
    );

    let mut x = cols.actions.0;
    x += draw_button(
        buffer,
        x,
        y,
        "Edit",
        app.focus.is_focused(&ids::edit_button(record.id)),
        true,
        theme,
        clip,
    ) + 1;
    draw_button(
        buffer,
        x,
        y,
        "Delete",
        app.focus.is_focused(&ids::delete_button(record.id)),
        true,
        theme,
        clip,
    );
}

fn draw_editing_row(
    app: &App,
    buffer: &mut FrameBuffer,
    cols: &Columns,
    y: u16,
    record: &UserRecord,
    clip: &Rect,
) {
    let theme = &app.theme;
    let Some(draft) = app.table.draft() else {
        return;
    };

    // Highlight the whole row so the editing state is unmissable.
    let row_width = cols.actions.0 + cols.actions.1 - cols.id.0;
    buffer.fill_rect(Rect::new(cols.id.0, y, row_width, 1), theme.surface, Some(clip));

    draw_id_cell(buffer, cols, y, record, theme, clip);
    draw_input(
        buffer,
        cols.name.0,
        y,
        cols.name.1.saturating_sub(1),
        &draft.name,
        app.focus.is_focused(ids::EDIT_NAME),
        "",
        false,
        theme,
        clip,
    );
    draw_input(
        buffer,
        cols.email.0,
        y,
        cols.email.1.saturating_sub(1),
        &draft.email,
        app.focus.is_focused(ids::EDIT_EMAIL),
        "",
        false,
        theme,
        clip,
    );

    // Role selector cycles with arrows/space.
    let role_text = format!("‹{}›", draft.role.as_str());
    let role_attrs = if app.focus.is_focused(ids::EDIT_ROLE) {
        Attr::INVERSE
    } else {
        Attr::NONE
    };
    buffer.draw_text(
        cols.role.0,
        y,
        &truncate_text(&role_text, cols.role.1 as usize),
        theme.role_color(draft.role),
        theme.surface,
        role_attrs,
        Some(clip),
    );

    draw_checkbox(
        buffer,
        cols.status.0,
        y,
        draft.active,
        if draft.active { "Active" } else { "Inactive" },
        app.focus.is_focused(ids::EDIT_STATUS),
        theme,
        clip,
    );

    let mut x = cols.actions.0;
    x += draw_button(
        buffer,
        x,
        y,
        "Save",
        app.focus.is_focused(&ids::save_button(record.id)),
        true,
        theme,
        clip,
    ) + 1;
    draw_button(
        buffer,
        x,
        y,
        "Cancel",
        app.focus.is_focused(&ids::cancel_button(record.id)),
        true,
        theme,
        clip,
    );
}

fn draw_id_cell(
    buffer: &mut FrameBuffer,
    cols: &Columns,
    y: u16,
    record: &UserRecord,
    theme: &Theme,
    clip: &Rect,
) {
    buffer.draw_text(
        cols.id.0,
        y,
        &record.id.to_string(),
        theme.text_muted,
        theme.background,
        Attr::NONE,
        Some(clip),
    );
}
