//! Terminal interface for the reader.
//!
//! A line-oriented prompt loop, not a TUI: print the menu, read one
//! selection, fetch and render, repeat.
//!
//! - `session` - the interactive loop (`run`)
//! - `input` - selection-line parsing
//! - `render` - pure menu/feed formatting

pub mod input;
pub mod render;
mod session;

pub use input::{parse_selection, Selection, SelectionError};
pub use session::run;
