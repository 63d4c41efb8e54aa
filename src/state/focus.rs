//! Focus management.
//!
//! An ordered ring of focusable control ids. Tab moves forward,
//! Shift+Tab backward, both wrapping. The ring is rebuilt from widget
//! state after every update (controls appear and disappear as rows enter
//! edit mode, the table loads, auto-increment disables buttons); `sync`
//! keeps the focused control stable across rebuilds when it still exists.
//!
//! Control ids double as the automation handles test drivers address,
//! e.g. "search-input", "edit-3", "increment-button".

/// Ordered focus ring over stable control ids.
#[derive(Debug, Default)]
pub struct FocusRing {
    order: Vec<String>,
    focused: Option<usize>,
}

impl FocusRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ring order, retaining focus on the same id when it is
    /// still present, dropping it otherwise.
    pub fn sync(&mut self, order: Vec<String>) {
        let focused_id = self.focused_id().map(str::to_string);
        self.order = order;
        self.focused = focused_id.and_then(|id| self.order.iter().position(|o| *o == id));
    }

    /// Currently focused control id.
    pub fn focused_id(&self) -> Option<&str> {
        self.focused
            .and_then(|i| self.order.get(i))
            .map(String::as_str)
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused_id() == Some(id)
    }

    /// Focus a specific id. Returns true if the id exists in the ring.
    pub fn focus(&mut self, id: &str) -> bool {
        match self.order.iter().position(|o| o == id) {
            Some(index) => {
                self.focused = Some(index);
                true
            }
            None => false,
        }
    }

    /// Drop focus entirely.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Move focus to the next control, wrapping. With nothing focused,
    /// focuses the first control.
    pub fn next(&mut self) {
        if self.order.is_empty() {
            self.focused = None;
            return;
        }
        self.focused = Some(match self.focused {
            Some(i) => (i + 1) % self.order.len(),
            None => 0,
        });
    }

    /// Move focus to the previous control, wrapping. With nothing focused,
    /// focuses the last control.
    pub fn prev(&mut self) {
        if self.order.is_empty() {
            self.focused = None;
            return;
        }
        self.focused = Some(match self.focused {
            Some(0) | None => self.order.len() - 1,
            Some(i) => i - 1,
        });
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(ids: &[&str]) -> FocusRing {
        let mut ring = FocusRing::new();
        ring.sync(ids.iter().map(|s| s.to_string()).collect());
        ring
    }

    #[test]
    fn test_next_wraps() {
        let mut ring = ring(&["a", "b", "c"]);
        ring.next();
        assert_eq!(ring.focused_id(), Some("a"));
        ring.next();
        ring.next();
        assert_eq!(ring.focused_id(), Some("c"));
        ring.next();
        assert_eq!(ring.focused_id(), Some("a"));
    }

    #[test]
    fn test_prev_wraps() {
        let mut ring = ring(&["a", "b", "c"]);
        ring.prev();
        assert_eq!(ring.focused_id(), Some("c"));
        ring.prev();
        assert_eq!(ring.focused_id(), Some("b"));
    }

    #[test]
    fn test_sync_retains_focus() {
        let mut ring = ring(&["a", "b", "c"]);
        ring.focus("b");

        // "b" moves position but keeps focus
        ring.sync(vec!["x".into(), "b".into(), "y".into()]);
        assert_eq!(ring.focused_id(), Some("b"));

        // "b" disappears; focus drops
        ring.sync(vec!["x".into(), "y".into()]);
        assert_eq!(ring.focused_id(), None);
    }

    #[test]
    fn test_focus_unknown_id() {
        let mut ring = ring(&["a"]);
        assert!(!ring.focus("missing"));
        assert_eq!(ring.focused_id(), None);
    }

    #[test]
    fn test_empty_ring() {
        let mut ring = FocusRing::new();
        ring.next();
        assert_eq!(ring.focused_id(), None);
        ring.prev();
        assert_eq!(ring.focused_id(), None);
    }
}
