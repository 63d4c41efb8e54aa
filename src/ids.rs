//! Stable automation ids.
//!
//! Every interactive control is addressable by a fixed id, so scripted
//! test drivers keep working regardless of filtering or layout. Per-row
//! controls are namespaced by user id ("edit-3", "save-3"); edit-field
//! handles are fixed because at most one row edits at a time.

pub const NAME_INPUT: &str = "name-input";
pub const EMAIL_INPUT: &str = "email-input";
pub const PASSWORD_INPUT: &str = "password-input";
pub const SUBSCRIBE_CHECKBOX: &str = "subscribe-checkbox";
pub const SUBMIT_BUTTON: &str = "submit-button";

pub const SEARCH_INPUT: &str = "search-input";
pub const EDIT_NAME: &str = "edit-name";
pub const EDIT_EMAIL: &str = "edit-email";
pub const EDIT_ROLE: &str = "edit-role";
pub const EDIT_STATUS: &str = "edit-status";

pub const STEP_INPUT: &str = "step-input";
pub const INCREMENT_BUTTON: &str = "increment-button";
pub const DECREMENT_BUTTON: &str = "decrement-button";
pub const AUTO_BUTTON: &str = "auto-button";
pub const RESET_BUTTON: &str = "reset-button";

pub fn user_row(id: u32) -> String {
    format!("user-row-{id}")
}

pub fn edit_button(id: u32) -> String {
    format!("edit-{id}")
}

pub fn delete_button(id: u32) -> String {
    format!("delete-{id}")
}

pub fn save_button(id: u32) -> String {
    format!("save-{id}")
}

pub fn cancel_button(id: u32) -> String {
    format!("cancel-{id}")
}

/// A per-row table action parsed back out of a control id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
    Save,
    Cancel,
}

/// Parse a control id of the form `<action>-<row id>`. Ids with
/// non-numeric suffixes ("edit-name") are not row actions.
pub fn parse_row_action(control: &str) -> Option<(RowAction, u32)> {
    let (prefix, suffix) = control.rsplit_once('-')?;
    let id: u32 = suffix.parse().ok()?;
    let action = match prefix {
        "edit" => RowAction::Edit,
        "delete" => RowAction::Delete,
        "save" => RowAction::Save,
        "cancel" => RowAction::Cancel,
        _ => return None,
    };
    Some((action, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_ids() {
        assert_eq!(edit_button(3), "edit-3");
        assert_eq!(save_button(12), "save-12");
        assert_eq!(user_row(1), "user-row-1");
    }

    #[test]
    fn test_parse_row_action() {
        assert_eq!(parse_row_action("edit-3"), Some((RowAction::Edit, 3)));
        assert_eq!(parse_row_action("delete-12"), Some((RowAction::Delete, 12)));
        assert_eq!(parse_row_action("cancel-1"), Some((RowAction::Cancel, 1)));
        // Fixed edit-field handles are not row actions
        assert_eq!(parse_row_action("edit-name"), None);
        assert_eq!(parse_row_action("search-input"), None);
        assert_eq!(parse_row_action("plain"), None);
    }
}
