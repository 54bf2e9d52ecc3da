//! Game rules.
//!
//! Pure functions over a single board snapshot. Rules are separated
//! from history storage so they can be evaluated for any entry.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinResult, evaluate};
