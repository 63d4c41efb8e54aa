//! Runtime state services: keyboard conversion, text editing, focus
//! cycling, and cancellable timers.

pub mod editor;
pub mod focus;
pub mod keys;
pub mod timers;

pub use editor::TextField;
pub use focus::FocusRing;
pub use keys::{convert_key_event, Key, KeyEvent, Modifiers};
pub use timers::{TimerId, TimerTick, Timers};
