//! Terminal renderer: frame buffer, drawing primitives, diff output.
//!
//! The drawing layer paints into a [`FrameBuffer`]; the [`DiffRenderer`]
//! ships only changed cells to the terminal through a batched
//! [`OutputBuffer`].

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod output;

pub use buffer::{string_width, truncate_text, FrameBuffer};
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
