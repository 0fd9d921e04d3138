//! # sawmill-tui - Terminal UI for sawmill
//!
//! The ratatui-based viewer shell: terminal lifecycle, event polling, viewer
//! state, and rendering of the core's rich-text markup as styled spans. All
//! parsing and highlighting lives in `sawmill-core`; this crate only windows
//! and displays its entry collection.

pub mod app;
pub mod event;
pub mod render;
pub mod runner;

// Re-export main entry points
pub use app::{App, Message};
pub use render::markup_to_lines;
pub use runner::run;
