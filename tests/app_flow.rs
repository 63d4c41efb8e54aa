//! End-to-end flows: synthetic key events and timer ticks driving the
//! app, with assertions on both widget state and the rendered frame.

use std::sync::mpsc::channel;
use std::time::Duration;

use drill_tui::state::Key;
use drill_tui::{theme, ui, App, AppEvent, FrameBuffer, KeyEvent, TimerId};

fn new_app() -> App {
    let (tx, _rx) = channel();
    App::new(tx, theme::terminal())
}

fn loaded_app() -> App {
    let mut app = new_app();
    let tick = app.timers().current_tick(TimerId::TableLoad).unwrap();
    app.handle_event(AppEvent::Tick(tick));
    app
}

fn press(app: &mut App, key: Key) {
    app.handle_event(AppEvent::Key(KeyEvent::new(key)));
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, Key::Char(ch));
    }
}

/// Walk focus to a control the way a user would: Tab from nothing.
fn focus_via_tabs(app: &mut App, id: &str) {
    let pos = app
        .focus_order()
        .iter()
        .position(|c| c == id)
        .unwrap_or_else(|| panic!("{id} not in focus order {:?}", app.focus_order()));
    app.focus.blur();
    for _ in 0..=pos {
        press(app, Key::Tab);
    }
    assert_eq!(app.focus.focused_id(), Some(id));
}

fn render(app: &App) -> String {
    let mut buffer = FrameBuffer::new(110, 60);
    ui::draw(app, &mut buffer).unwrap();
    (0..buffer.height())
        .map(|y| buffer.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Page shell
// =============================================================================

#[test]
fn loading_state_renders_indicator() {
    let app = new_app();
    let screen = render(&app);
    assert!(screen.contains("Software Testing Demo"));
    assert!(screen.contains("Loading users..."));
    assert!(!screen.contains("John Doe"));
}

#[test]
fn full_page_renders_after_load() {
    let app = loaded_app();
    let screen = render(&app);

    assert!(screen.contains("A playground for testing practice"));
    assert!(screen.contains("Test Form"));
    assert!(screen.contains("User Management"));
    assert!(screen.contains("John Doe"));
    assert!(screen.contains("charlie@example.com"));
    assert!(screen.contains("Counter"));
    assert!(screen.contains("No history yet. Start counting!"));
    assert!(screen.contains("Educational Purposes"));
}

#[test]
fn real_load_timer_delivers_within_two_seconds() {
    let (tx, rx) = channel();
    let mut app = App::new(tx, theme::terminal());
    assert!(app.table.is_loading());

    let tick = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    app.handle_event(AppEvent::Tick(tick));
    assert!(!app.table.is_loading());
    assert_eq!(app.table.records().len(), 5);
}

// =============================================================================
// Table flows
// =============================================================================

#[test]
fn search_filters_and_clears() {
    let mut app = loaded_app();
    focus_via_tabs(&mut app, "search-input");
    type_str(&mut app, "EDITOR");

    let visible: Vec<u32> = app.table.visible().iter().map(|r| r.id).collect();
    assert_eq!(visible, vec![4]);
    assert!(render(&app).contains("Alice Brown"));
    assert!(!render(&app).contains("John Doe"));

    for _ in 0.."EDITOR".len() {
        press(&mut app, Key::Backspace);
    }
    assert_eq!(app.table.visible().len(), 5);
}

#[test]
fn search_no_results_renders_placeholder() {
    let mut app = loaded_app();
    focus_via_tabs(&mut app, "search-input");
    type_str(&mut app, "nobody at all");

    assert!(app.table.visible().is_empty());
    assert!(render(&app).contains("No users found"));
    // Underlying records untouched
    assert_eq!(app.table.records().len(), 5);
}

#[test]
fn edit_save_flow_via_keyboard() {
    let mut app = loaded_app();
    focus_via_tabs(&mut app, "edit-2");
    press(&mut app, Key::Enter);
    assert_eq!(app.table.editing_id(), Some(2));
    assert_eq!(app.focus.focused_id(), Some("edit-name"));

    // Rewrite the name
    for _ in 0.."Jane Smith".len() {
        press(&mut app, Key::Backspace);
    }
    type_str(&mut app, "Janet Smythe");

    // Cycle the role selector once: User -> Admin
    focus_via_tabs(&mut app, "edit-role");
    press(&mut app, Key::Right);

    focus_via_tabs(&mut app, "save-2");
    press(&mut app, Key::Enter);

    let record = app.table.record(2).unwrap();
    assert_eq!(record.name, "Janet Smythe");
    assert_eq!(record.role, drill_tui::Role::Admin);
    assert_eq!(app.table.editing_id(), None);

    let screen = render(&app);
    assert!(screen.contains("Janet Smythe"));
}

#[test]
fn switching_edit_rows_discards_first_draft() {
    let mut app = loaded_app();
    focus_via_tabs(&mut app, "edit-1");
    press(&mut app, Key::Enter);
    type_str(&mut app, "XXX");

    // Start editing row 3 instead; row 1 must be untouched.
    focus_via_tabs(&mut app, "edit-3");
    press(&mut app, Key::Enter);
    assert_eq!(app.table.editing_id(), Some(3));
    assert_eq!(app.table.record(1).unwrap().name, "John Doe");
}

#[test]
fn delete_flow_with_confirmation() {
    let mut app = loaded_app();
    focus_via_tabs(&mut app, "delete-5");
    press(&mut app, Key::Enter);

    let screen = render(&app);
    assert!(screen.contains("Are you sure you want to delete this user?"));

    // Decline first
    press(&mut app, Key::Char('n'));
    assert_eq!(app.table.records().len(), 5);

    // Then go through with it
    focus_via_tabs(&mut app, "delete-5");
    press(&mut app, Key::Enter);
    press(&mut app, Key::Char('y'));

    assert_eq!(app.table.records().len(), 4);
    assert!(app.table.record(5).is_none());
    assert!(!render(&app).contains("Charlie Wilson"));
    // The row's controls are gone from the focus order too.
    assert!(!app.focus_order().iter().any(|id| id == "edit-5"));
}

// =============================================================================
// Form flows
// =============================================================================

fn fill_valid_form(app: &mut App) {
    focus_via_tabs(app, "name-input");
    type_str(app, "Grace Hopper");
    focus_via_tabs(app, "email-input");
    type_str(app, "grace@example.com");
    focus_via_tabs(app, "password-input");
    type_str(app, "cobol1959");
}

#[test]
fn valid_submit_shows_then_hides_success() {
    let mut app = loaded_app();
    fill_valid_form(&mut app);
    focus_via_tabs(&mut app, "subscribe-checkbox");
    press(&mut app, Key::Char(' '));
    assert!(app.form.subscribe);

    focus_via_tabs(&mut app, "submit-button");
    press(&mut app, Key::Enter);
    assert!(app.form.is_submitted());
    assert!(render(&app).contains("Form submitted successfully!"));

    // The 3-second window elapses
    let tick = app.timers().current_tick(TimerId::FormSuccess).unwrap();
    app.handle_event(AppEvent::Tick(tick));
    assert!(!app.form.is_submitted());
    assert!(!render(&app).contains("Form submitted successfully!"));
}

#[test]
fn short_password_blocks_submit_with_feedback() {
    let mut app = loaded_app();
    focus_via_tabs(&mut app, "name-input");
    type_str(&mut app, "Grace Hopper");
    focus_via_tabs(&mut app, "email-input");
    type_str(&mut app, "grace@example.com");
    focus_via_tabs(&mut app, "password-input");
    type_str(&mut app, "12345");
    press(&mut app, Key::Enter); // Enter in a field submits the form

    assert!(!app.form.is_submitted());
    let screen = render(&app);
    assert!(screen.contains("Password must be at least 6 characters"));
    assert!(!screen.contains("Form submitted successfully!"));
}

#[test]
fn invalid_email_blocks_submit() {
    let mut app = loaded_app();
    focus_via_tabs(&mut app, "name-input");
    type_str(&mut app, "Grace");
    focus_via_tabs(&mut app, "email-input");
    type_str(&mut app, "not-an-email");
    focus_via_tabs(&mut app, "password-input");
    type_str(&mut app, "longenough");
    press(&mut app, Key::Enter);

    assert!(!app.form.is_submitted());
    assert!(render(&app).contains("Enter a valid email address"));
}

// =============================================================================
// Counter flows
// =============================================================================

#[test]
fn manual_counting_and_history() {
    let mut app = loaded_app();
    focus_via_tabs(&mut app, "step-input");
    press(&mut app, Key::Backspace);
    type_str(&mut app, "3");

    focus_via_tabs(&mut app, "increment-button");
    press(&mut app, Key::Enter);
    assert_eq!(app.counter.count(), 3);

    focus_via_tabs(&mut app, "decrement-button");
    press(&mut app, Key::Enter);
    press(&mut app, Key::Enter);
    assert_eq!(app.counter.count(), -3);

    let screen = render(&app);
    assert!(screen.contains("Count: -3"));
    assert!(screen.contains("Incremented by 3 to 3"));
    assert!(screen.contains("Decremented by 3 to -3"));
}

#[test]
fn auto_increment_three_ticks_then_stop() {
    let mut app = loaded_app();
    focus_via_tabs(&mut app, "step-input");
    press(&mut app, Key::Backspace);
    type_str(&mut app, "2");

    focus_via_tabs(&mut app, "auto-button");
    press(&mut app, Key::Enter);
    assert!(app.counter.is_auto());
    assert!(render(&app).contains("Auto-increment started"));

    for _ in 0..3 {
        let tick = app.timers().current_tick(TimerId::CounterAuto).unwrap();
        app.handle_event(AppEvent::Tick(tick));
    }
    assert_eq!(app.counter.count(), 6);

    // Stop mid-run; a tick queued before the stop must not land.
    let stale = app.timers().current_tick(TimerId::CounterAuto).unwrap();
    press(&mut app, Key::Enter);
    app.handle_event(AppEvent::Tick(stale));
    assert_eq!(app.counter.count(), 6);
    assert!(render(&app).contains("Auto-increment stopped"));
}

#[test]
fn history_never_exceeds_five_entries() {
    let mut app = loaded_app();
    focus_via_tabs(&mut app, "increment-button");
    for _ in 0..9 {
        press(&mut app, Key::Enter);
    }

    assert_eq!(app.counter.history().len(), 5);
    assert_eq!(app.counter.history()[0].action, "Incremented by 1 to 9");
    // Oldest surviving entry is five back
    assert_eq!(app.counter.history()[4].action, "Incremented by 1 to 5");
}

#[test]
fn reset_restores_initial_state() {
    let mut app = loaded_app();
    focus_via_tabs(&mut app, "step-input");
    press(&mut app, Key::Backspace);
    type_str(&mut app, "7");
    focus_via_tabs(&mut app, "increment-button");
    press(&mut app, Key::Enter);

    focus_via_tabs(&mut app, "reset-button");
    press(&mut app, Key::Enter);

    assert_eq!(app.counter.count(), 0);
    assert_eq!(app.counter.step(), 1);
    assert!(!app.counter.is_auto());
    assert!(render(&app).contains("Counter reset to 0"));
}
