//! # drill-tui
//!
//! A keyboard-driven terminal playground for UI-testing practice: one
//! page with three independent widgets: a validated form, an editable
//! user table with search and filter, and a stepped counter with
//! auto-increment and history.
//!
//! ## Architecture
//!
//! Widget state machines (`model`) know nothing about the terminal; the
//! drawing layer (`ui`) turns them into frame-buffer cells; the diff
//! renderer (`renderer`) ships only changed cells to the terminal. One
//! event loop dispatches key presses and timer ticks, so every state
//! transition is single-threaded:
//!
//! ```text
//! crossterm events ┐
//!                  ├─> App::handle_event ─> models ─> ui::draw ─> DiffRenderer
//! timer ticks ─────┘
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Widget state machines (form, table, counter)
//! - [`app`] - Event dispatch, focus order, timer wiring
//! - [`ui`] - Drawing the page into the frame buffer
//! - [`renderer`] - Frame buffer, ANSI output, diff rendering
//! - [`layout`] - Flexbox page composition
//! - [`state`] - Keyboard, text editing, focus ring, timers
//! - [`ids`] - Stable automation ids for every interactive control

pub mod app;
pub mod config;
pub mod error;
pub mod ids;
pub mod layout;
pub mod model;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;
pub mod ui;

pub use app::{App, AppEvent, AUTO_TICK_PERIOD, LOAD_DELAY, SUCCESS_HIDE_DELAY};
pub use config::Config;
pub use error::{DrillError, Result};
pub use types::*;

pub use model::{
    seed_users, CounterModel, FormModel, Role, Submission, TableModel, UserRecord,
    ValidationError, HISTORY_LIMIT, MIN_PASSWORD_LEN,
};

pub use renderer::{DiffRenderer, FrameBuffer};

pub use state::{convert_key_event, FocusRing, Key, KeyEvent, TextField, TimerId, TimerTick};

pub use theme::{get_preset, preset_names, Theme};
