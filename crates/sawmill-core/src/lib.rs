//! # sawmill-core - Log Parsing and Highlighting
//!
//! Foundation crate for sawmill. Turns an unstructured build-tool console
//! log into an ordered collection of highlighted summary entries.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Summary Extraction (`summary`)
//! - [`SummaryBlock`] - One header line plus its indented continuation lines
//! - [`SummaryScanner`] - Line-by-line state machine scanner
//! - [`extract_summaries()`] - Full-text extraction driver
//!
//! ### Highlighting (`highlight`, `color`, `markup`)
//! - [`Highlighter`] - Numeric and name highlight passes, built once
//! - [`MarkupDialect`] - Configurable bold/italic/color tag templates
//! - [`duration_color()`] - Green-to-red duration ramp
//!
//! ### Pipeline (`explorer`)
//! - [`LogExplorer`] - read → extract → highlight → entry collection
//! - [`read_log()`] - Shared-read, full-file log read
//! - [`ParseProgress`] - Phase notifications for progress display
//!
//! ### Error Handling (`error`)
//! - [`Error`] / [`Result`] - thiserror enum and alias
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Configuration (`config`)
//! - [`Settings`] - `[log]` / `[ui]` user settings from config.toml
//! - [`default_log_path()`] - The build tool's console log location
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use sawmill_core::prelude::*;
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod explorer;
pub mod highlight;
pub mod logging;
pub mod markup;
pub mod summary;

/// Prelude for common imports used throughout the sawmill crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use color::{hsv_to_rgb, lerp, Rgb};
pub use config::{default_log_path, load_settings, load_settings_from, Settings};
pub use error::{Error, Result, ResultExt};
pub use explorer::{read_log, LogExplorer, ParseProgress};
pub use highlight::{duration_color, Highlighter, NAME_COLOR};
pub use markup::MarkupDialect;
pub use summary::{extract_summaries, SummaryBlock, SummaryScanner};
