//! Table widget state: load, search, inline edit, delete.
//!
//! The table owns the record list and a small protocol around it:
//!
//! - it starts in a loading state and becomes ready when the simulated
//!   load delivers the seed list;
//! - searching is a pure derived view over (records, query) and never
//!   touches the stored list or its order;
//! - at most one row is ever in edit mode, enforced by construction: the
//!   edit state is a single `Option<EditDraft>`, not per-row flags;
//! - deleting requires an explicit confirmation step.

use tracing::info;

use crate::model::user::{Role, UserRecord};
use crate::state::TextField;

/// Transient shadow copy of one record's editable fields. Exists only
/// while that record is in edit mode.
#[derive(Debug, Clone)]
pub struct EditDraft {
    pub id: u32,
    pub name: TextField,
    pub email: TextField,
    pub role: Role,
    pub active: bool,
}

impl EditDraft {
    fn from_record(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            name: TextField::from_value(record.name.clone()),
            email: TextField::from_value(record.email.clone()),
            role: record.role,
            active: record.active,
        }
    }
}

/// The table widget's state machine.
#[derive(Debug, Default)]
pub struct TableModel {
    records: Vec<UserRecord>,
    loading: bool,
    pub search: TextField,
    edit: Option<EditDraft>,
    pending_delete: Option<u32>,
}

impl TableModel {
    /// A table waiting for its initial load.
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Complete the simulated load. There is no error path; loading
    /// always succeeds.
    pub fn finish_load(&mut self, records: Vec<UserRecord>) {
        info!(count = records.len(), "user table loaded");
        self.records = records;
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The stored records, in stable insertion order.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn record(&self, id: u32) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// The visible rows for the current search term: every record whose
    /// name, email, or role contains the query case-insensitively. Pure
    /// view; stored records and their order are untouched.
    pub fn visible(&self) -> Vec<&UserRecord> {
        let query = self.search.value().to_lowercase();
        self.records
            .iter()
            .filter(|record| record_matches(record, &query))
            .collect()
    }

    // =========================================================================
    // Inline edit
    // =========================================================================

    /// Enter edit mode on a record, seeding the draft from its current
    /// values. Any other record's edit state is discarded without saving.
    /// Returns false for an unknown id.
    pub fn begin_edit(&mut self, id: u32) -> bool {
        match self.record(id) {
            Some(record) => {
                self.edit = Some(EditDraft::from_record(record));
                true
            }
            None => false,
        }
    }

    /// The id of the record currently in edit mode, if any.
    pub fn editing_id(&self) -> Option<u32> {
        self.edit.as_ref().map(|draft| draft.id)
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.edit.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut EditDraft> {
        self.edit.as_mut()
    }

    /// Merge the draft into the stored record with the given id, then
    /// leave edit mode. Guarded: a save against anything but the current
    /// edit target is a no-op and corrupts nothing.
    pub fn save(&mut self, id: u32) -> bool {
        let Some(draft) = self.edit.as_ref() else {
            return false;
        };
        if draft.id != id {
            return false;
        }

        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            // Record vanished mid-edit (deleted elsewhere); just drop the draft.
            self.edit = None;
            return false;
        };

        record.name = draft.name.value().to_string();
        record.email = draft.email.value().to_string();
        record.role = draft.role;
        record.active = draft.active;
        info!(id, "user record saved");

        self.edit = None;
        true
    }

    /// Leave edit mode without touching the stored record.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    // =========================================================================
    // Delete with confirmation
    // =========================================================================

    /// Stage a delete; the record is only removed once confirmed.
    pub fn request_delete(&mut self, id: u32) -> bool {
        match self.record(id) {
            Some(_) => {
                self.pending_delete = Some(id);
                true
            }
            None => false,
        }
    }

    /// The id awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<u32> {
        self.pending_delete
    }

    /// Confirm the staged delete: removes exactly that record. If it was
    /// mid-edit, edit state is cleared too. Returns the removed id.
    pub fn confirm_delete(&mut self) -> Option<u32> {
        let id = self.pending_delete.take()?;
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return None;
        }

        if self.editing_id() == Some(id) {
            self.edit = None;
        }
        info!(id, "user record deleted");
        Some(id)
    }

    /// Decline the staged delete; the list is unchanged.
    pub fn decline_delete(&mut self) {
        self.pending_delete = None;
    }
}

/// Case-insensitive substring match over the three searchable fields.
/// `query` must already be lowercased.
fn record_matches(record: &UserRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(query)
        || record.email.to_lowercase().contains(query)
        || record.role.as_str().to_lowercase().contains(query)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::seed_users;

    fn loaded_table() -> TableModel {
        let mut table = TableModel::new();
        table.finish_load(seed_users());
        table
    }

    #[test]
    fn test_starts_loading_then_ready() {
        let mut table = TableModel::new();
        assert!(table.is_loading());
        assert!(table.records().is_empty());

        table.finish_load(seed_users());
        assert!(!table.is_loading());
        assert_eq!(table.records().len(), 5);
    }

    #[test]
    fn test_empty_query_shows_all_in_order() {
        let table = loaded_table();
        let visible = table.visible();
        assert_eq!(visible.len(), 5);
        let ids: Vec<u32> = visible.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_search_matches_name_email_and_role() {
        let mut table = loaded_table();

        table.search.set_value("JOHN");
        let ids: Vec<u32> = table.visible().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3], "John Doe by name, Bob Johnson by name");

        table.search.set_value("alice@");
        let ids: Vec<u32> = table.visible().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4]);

        table.search.set_value("viewer");
        let ids: Vec<u32> = table.visible().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5]);
    }

    #[test]
    fn test_search_no_match_and_no_mutation() {
        let mut table = loaded_table();
        table.search.set_value("zzz-no-such-user");
        assert!(table.visible().is_empty());

        // Stored list untouched by filtering
        assert_eq!(table.records().len(), 5);
        table.search.clear();
        assert_eq!(table.visible().len(), 5);
    }

    #[test]
    fn test_single_edit_target() {
        let mut table = loaded_table();
        assert!(table.begin_edit(1));
        table
            .draft_mut()
            .unwrap()
            .name
            .set_value("Changed But Never Saved");

        // Entering edit on another row discards the first draft unsaved.
        assert!(table.begin_edit(2));
        assert_eq!(table.editing_id(), Some(2));
        assert_eq!(table.record(1).unwrap().name, "John Doe");
    }

    #[test]
    fn test_save_merges_only_target_record() {
        let mut table = loaded_table();
        table.begin_edit(2);
        {
            let draft = table.draft_mut().unwrap();
            draft.name.set_value("Janet Smythe");
            draft.role = Role::Editor;
            draft.active = false;
        }
        assert!(table.save(2));

        let saved = table.record(2).unwrap();
        assert_eq!(saved.name, "Janet Smythe");
        assert_eq!(saved.role, Role::Editor);
        assert!(!saved.active);
        assert_eq!(table.editing_id(), None);

        // No cross-row leakage
        assert_eq!(table.record(1).unwrap().name, "John Doe");
        assert_eq!(table.record(3).unwrap().name, "Bob Johnson");
    }

    #[test]
    fn test_save_wrong_id_is_guarded() {
        let mut table = loaded_table();
        table.begin_edit(1);
        table.draft_mut().unwrap().name.set_value("Mallory");

        assert!(!table.save(2));
        // Still editing row 1, row 2 untouched
        assert_eq!(table.editing_id(), Some(1));
        assert_eq!(table.record(2).unwrap().name, "Jane Smith");
    }

    #[test]
    fn test_save_without_edit_is_noop() {
        let mut table = loaded_table();
        assert!(!table.save(1));
        assert_eq!(table.record(1).unwrap().name, "John Doe");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut table = loaded_table();
        table.begin_edit(3);
        table.draft_mut().unwrap().email.set_value("evil@example.com");
        table.cancel_edit();

        assert_eq!(table.editing_id(), None);
        assert_eq!(table.record(3).unwrap().email, "bob@example.com");
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut table = loaded_table();

        table.request_delete(4);
        assert_eq!(table.pending_delete(), Some(4));
        table.decline_delete();
        assert_eq!(table.records().len(), 5);
        assert!(table.record(4).is_some());

        table.request_delete(4);
        assert_eq!(table.confirm_delete(), Some(4));
        assert_eq!(table.records().len(), 4);
        assert!(table.record(4).is_none());
    }

    #[test]
    fn test_delete_mid_edit_clears_edit_state() {
        let mut table = loaded_table();
        table.begin_edit(5);
        table.request_delete(5);
        table.confirm_delete();

        assert_eq!(table.editing_id(), None);
        assert!(table.record(5).is_none());
    }

    #[test]
    fn test_begin_edit_unknown_id() {
        let mut table = loaded_table();
        assert!(!table.begin_edit(99));
        assert_eq!(table.editing_id(), None);
    }

    #[test]
    fn test_filtering_keeps_edit_target_addressable() {
        let mut table = loaded_table();
        table.begin_edit(2);
        table.search.set_value("admin");

        // Row 2 is filtered out of view but its edit state survives.
        assert!(table.visible().iter().all(|r| r.id != 2));
        assert_eq!(table.editing_id(), Some(2));
    }
}
