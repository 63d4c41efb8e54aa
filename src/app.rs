//! Application runtime.
//!
//! `App` owns the three widget models, the focus ring, and the timer
//! service, and dispatches every event (key presses and timer ticks)
//! on the single event-loop thread. Widgets share nothing; the app only
//! routes events to whichever widget owns the focused control.
//!
//! Timer wiring:
//! - construction schedules the one-shot simulated table load (1 s);
//! - a successful form submit (re-)arms the one-shot success hide (3 s);
//! - toggling auto-increment on starts the recurring tick (1 s) and
//!   toggling it off (or reset) cancels it. Stale ticks that were already
//!   queued when a timer was cancelled are dropped on receipt.

use std::sync::mpsc::Sender;
use std::time::Duration;

use tracing::{debug, info};

use crate::ids::{self, RowAction};
use crate::model::{seed_users, CounterModel, FormModel, TableModel};
use crate::state::{FocusRing, Key, KeyEvent, TimerId, TimerTick, Timers};
use crate::theme::Theme;

/// Simulated initial-load delay for the table.
pub const LOAD_DELAY: Duration = Duration::from_millis(1000);
/// How long the form's success indicator stays up.
pub const SUCCESS_HIDE_DELAY: Duration = Duration::from_millis(3000);
/// Auto-increment tick period.
pub const AUTO_TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Everything the event loop feeds the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick(TimerTick),
}

/// The page: three independent widgets plus focus and timers.
pub struct App {
    pub form: FormModel,
    pub table: TableModel,
    pub counter: CounterModel,
    pub focus: FocusRing,
    pub theme: Theme,
    timers: Timers,
    should_quit: bool,
}

impl App {
    /// Create the app and kick off the simulated table load.
    pub fn new(tick_tx: Sender<TimerTick>, theme: Theme) -> Self {
        let mut timers = Timers::new(tick_tx);
        timers.schedule_once(TimerId::TableLoad, LOAD_DELAY);

        let mut app = Self {
            form: FormModel::new(),
            table: TableModel::new(),
            counter: CounterModel::new(),
            focus: FocusRing::new(),
            theme,
            timers,
            should_quit: false,
        };
        app.sync_focus();
        info!("app mounted");
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stop the app and tear down every timer so no callback can fire
    /// into dead state.
    pub fn quit(&mut self) {
        self.should_quit = true;
        self.timers.cancel_all();
        info!("app unmounted");
    }

    /// Timer service, exposed so test drivers can fabricate live ticks.
    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Dispatch one event, then rebuild the focus ring to reflect any
    /// controls that appeared or disappeared.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick(tick) => self.handle_tick(tick),
        }
        self.sync_focus();

        // Once focus leaves the step field, snap its text to the clamped
        // value the way a number input corrects itself.
        if !self.focus.is_focused(ids::STEP_INPUT) {
            self.counter.normalize_step_input();
        }
    }

    // =========================================================================
    // Timer ticks
    // =========================================================================

    fn handle_tick(&mut self, tick: TimerTick) {
        if !self.timers.is_live(&tick) {
            debug!(?tick, "dropping stale timer tick");
            return;
        }

        match tick.id {
            TimerId::TableLoad => {
                self.table.finish_load(seed_users());
                self.timers.cancel(TimerId::TableLoad);
            }
            TimerId::FormSuccess => {
                self.form.clear_submitted();
                self.timers.cancel(TimerId::FormSuccess);
            }
            TimerId::CounterAuto => {
                self.counter.auto_tick();
            }
        }
    }

    // =========================================================================
    // Key dispatch
    // =========================================================================

    fn handle_key(&mut self, key: KeyEvent) {
        if key.is_ctrl_c() {
            self.quit();
            return;
        }

        // A staged delete is modal: only confirm/decline get through.
        if self.table.pending_delete().is_some() {
            self.handle_confirm_key(key);
            return;
        }

        match key.key {
            Key::Tab => {
                if key.modifiers.shift {
                    self.focus.prev();
                } else {
                    self.focus.next();
                }
                return;
            }
            Key::BackTab => {
                self.focus.prev();
                return;
            }
            Key::Escape => {
                self.handle_escape();
                return;
            }
            _ => {}
        }

        let Some(control) = self.focus.focused_id().map(str::to_string) else {
            if matches!(key.key, Key::Char('q')) {
                self.quit();
            }
            return;
        };

        // 'q' quits anywhere it cannot be text input.
        if matches!(key.key, Key::Char('q')) && !is_text_input(&control) {
            self.quit();
            return;
        }

        self.dispatch_control(&control, key);
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.key {
            Key::Char('y') | Key::Char('Y') | Key::Enter => {
                self.table.confirm_delete();
            }
            Key::Char('n') | Key::Char('N') | Key::Escape => {
                self.table.decline_delete();
            }
            _ => {}
        }
    }

    fn handle_escape(&mut self) {
        let focused = self.focus.focused_id().unwrap_or("");
        if self.table.editing_id().is_some() && is_edit_control(focused) {
            let id = self.table.editing_id().unwrap_or_default();
            self.table.cancel_edit();
            self.refocus(&ids::edit_button(id));
        } else {
            self.focus.blur();
        }
    }

    fn dispatch_control(&mut self, control: &str, key: KeyEvent) {
        match control {
            // ---- Form ----
            ids::NAME_INPUT => {
                if key.key == Key::Enter {
                    self.submit_form();
                } else {
                    self.form.name.handle_key(&key);
                }
            }
            ids::EMAIL_INPUT => {
                if key.key == Key::Enter {
                    self.submit_form();
                } else {
                    self.form.email.handle_key(&key);
                }
            }
            ids::PASSWORD_INPUT => {
                if key.key == Key::Enter {
                    self.submit_form();
                } else {
                    self.form.password.handle_key(&key);
                }
            }
            ids::SUBSCRIBE_CHECKBOX => match key.key {
                Key::Char(' ') => self.form.toggle_subscribe(),
                Key::Enter => self.submit_form(),
                _ => {}
            },
            ids::SUBMIT_BUTTON => {
                if is_activate(key.key) {
                    self.submit_form();
                }
            }

            // ---- Table ----
            ids::SEARCH_INPUT => {
                self.table.search.handle_key(&key);
            }
            ids::EDIT_NAME => {
                if let Some(draft) = self.table.draft_mut() {
                    draft.name.handle_key(&key);
                }
            }
            ids::EDIT_EMAIL => {
                if let Some(draft) = self.table.draft_mut() {
                    draft.email.handle_key(&key);
                }
            }
            ids::EDIT_ROLE => {
                if let Some(draft) = self.table.draft_mut() {
                    match key.key {
                        Key::Left | Key::Up => draft.role = draft.role.prev(),
                        Key::Right | Key::Down | Key::Char(' ') | Key::Enter => {
                            draft.role = draft.role.next()
                        }
                        _ => {}
                    }
                }
            }
            ids::EDIT_STATUS => {
                if is_activate(key.key) {
                    if let Some(draft) = self.table.draft_mut() {
                        draft.active = !draft.active;
                    }
                }
            }

            // ---- Counter ----
            ids::STEP_INPUT => {
                if self.counter.step_input.handle_key(&key) {
                    // Clamp on every change, like a number input
                    // correcting itself.
                    self.counter.apply_step_input();
                }
            }
            ids::INCREMENT_BUTTON => {
                if is_activate(key.key) && !self.counter.is_auto() {
                    self.counter.increment();
                }
            }
            ids::DECREMENT_BUTTON => {
                if is_activate(key.key) && !self.counter.is_auto() {
                    self.counter.decrement();
                }
            }
            ids::AUTO_BUTTON => {
                if is_activate(key.key) {
                    self.toggle_auto_increment();
                }
            }
            ids::RESET_BUTTON => {
                if is_activate(key.key) && !self.counter.is_auto() {
                    self.reset_counter();
                }
            }

            // ---- Per-row table actions ----
            other => {
                if let Some((action, id)) = ids::parse_row_action(other) {
                    if is_activate(key.key) {
                        self.run_row_action(action, id);
                    }
                }
            }
        }
    }

    fn run_row_action(&mut self, action: RowAction, id: u32) {
        match action {
            RowAction::Edit => {
                if self.table.begin_edit(id) {
                    self.refocus(ids::EDIT_NAME);
                }
            }
            RowAction::Delete => {
                self.table.request_delete(id);
            }
            RowAction::Save => {
                self.table.save(id);
                self.refocus(&ids::edit_button(id));
            }
            RowAction::Cancel => {
                self.table.cancel_edit();
                self.refocus(&ids::edit_button(id));
            }
        }
    }

    fn submit_form(&mut self) {
        if let Some(submission) = self.form.submit() {
            // No server round-trip; the capture is the log line.
            let payload = serde_json::to_string(&submission).unwrap_or_default();
            info!(%payload, "form submission captured");
            // Re-arming resets the 3-second window on every submit.
            self.timers
                .schedule_once(TimerId::FormSuccess, SUCCESS_HIDE_DELAY);
        }
    }

    fn toggle_auto_increment(&mut self) {
        if self.counter.toggle_auto() {
            self.timers
                .schedule_interval(TimerId::CounterAuto, AUTO_TICK_PERIOD);
        } else {
            // Synchronous cancellation: stops the clock thread and
            // invalidates any tick already queued.
            self.timers.cancel(TimerId::CounterAuto);
        }
    }

    fn reset_counter(&mut self) {
        if self.counter.reset() {
            self.timers.cancel(TimerId::CounterAuto);
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    fn sync_focus(&mut self) {
        self.focus.sync(self.focus_order());
    }

    /// Rebuild the ring, then land focus on a specific control.
    fn refocus(&mut self, id: &str) {
        self.sync_focus();
        self.focus.focus(id);
    }

    /// The Tab order for the current widget state. Controls that are
    /// disabled (counter controls during auto-increment) or absent (table
    /// controls while loading) are left out entirely.
    pub fn focus_order(&self) -> Vec<String> {
        let mut order: Vec<String> = [
            ids::NAME_INPUT,
            ids::EMAIL_INPUT,
            ids::PASSWORD_INPUT,
            ids::SUBSCRIBE_CHECKBOX,
            ids::SUBMIT_BUTTON,
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        if !self.table.is_loading() {
            order.push(ids::SEARCH_INPUT.to_string());
            for record in self.table.visible() {
                if self.table.editing_id() == Some(record.id) {
                    order.push(ids::EDIT_NAME.to_string());
                    order.push(ids::EDIT_EMAIL.to_string());
                    order.push(ids::EDIT_ROLE.to_string());
                    order.push(ids::EDIT_STATUS.to_string());
                    order.push(ids::save_button(record.id));
                    order.push(ids::cancel_button(record.id));
                } else {
                    order.push(ids::edit_button(record.id));
                    order.push(ids::delete_button(record.id));
                }
            }
        }

        if self.counter.is_auto() {
            order.push(ids::AUTO_BUTTON.to_string());
        } else {
            order.push(ids::STEP_INPUT.to_string());
            order.push(ids::DECREMENT_BUTTON.to_string());
            order.push(ids::INCREMENT_BUTTON.to_string());
            order.push(ids::AUTO_BUTTON.to_string());
            order.push(ids::RESET_BUTTON.to_string());
        }

        order
    }
}

/// Controls whose focused state routes plain characters into a text field.
fn is_text_input(control: &str) -> bool {
    matches!(
        control,
        ids::NAME_INPUT
            | ids::EMAIL_INPUT
            | ids::PASSWORD_INPUT
            | ids::SEARCH_INPUT
            | ids::EDIT_NAME
            | ids::EDIT_EMAIL
            | ids::STEP_INPUT
    )
}

/// Controls that belong to the in-progress row edit.
fn is_edit_control(control: &str) -> bool {
    matches!(
        control,
        ids::EDIT_NAME | ids::EDIT_EMAIL | ids::EDIT_ROLE | ids::EDIT_STATUS
    ) || control.starts_with("save-")
        || control.starts_with("cancel-")
}

fn is_activate(key: Key) -> bool {
    matches!(key, Key::Enter | Key::Char(' '))
}

// =============================================================================
// Tests
// =============================================================================
