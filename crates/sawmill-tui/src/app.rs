//! Viewer state and message handling.
//!
//! The viewer owns a [`LogExplorer`] and a handful of display fields: the
//! scroll position, the "show last N entries" window, and a one-line status.
//! Messages come from terminal events; handling them is synchronous.

use std::path::PathBuf;

use sawmill_core::{LogExplorer, ParseProgress};
use tracing::debug;

/// Input messages for the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Re-read and re-parse the log file
    Reparse,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
    /// Grow the "show last N entries" window
    WindowGrow,
    /// Shrink the window; at 1 it wraps to 0, meaning "show everything"
    WindowShrink,
    Quit,
    /// Timer tick (no key pressed)
    Tick,
}

/// How far page up/down and the window +/- keys move per press
const PAGE_STEP: usize = 10;
const WINDOW_STEP: usize = 5;

/// Viewer application state
#[derive(Debug)]
pub struct App {
    explorer: LogExplorer,
    log_path: PathBuf,
    entries_to_show: usize,
    scroll: usize,
    status: String,
    should_quit: bool,
}

impl App {
    pub fn new(log_path: PathBuf, entries_to_show: usize) -> Self {
        Self {
            explorer: LogExplorer::default(),
            log_path,
            entries_to_show,
            scroll: 0,
            status: String::from("press r to parse the log"),
            should_quit: false,
        }
    }

    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::Reparse => self.reparse(),
            Message::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Message::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            Message::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_STEP),
            Message::PageDown => self.scroll = self.scroll.saturating_add(PAGE_STEP),
            Message::ScrollTop => self.scroll = 0,
            Message::ScrollBottom => self.scroll = usize::MAX, // clamped at render time
            Message::WindowGrow => {
                self.entries_to_show = self.entries_to_show.saturating_add(WINDOW_STEP);
            }
            Message::WindowShrink => {
                self.entries_to_show = self.entries_to_show.saturating_sub(WINDOW_STEP);
            }
            Message::Quit => self.should_quit = true,
            Message::Tick => {}
        }
    }

    /// Re-parse the log. The transient "parsing" status never survives this
    /// call: it is overwritten on success and on failure alike, and a failed
    /// parse keeps the previous entries on screen.
    fn reparse(&mut self) {
        self.status = format!("parsing {}...", self.log_path.display());

        let result = self.explorer.parse_file_with(&self.log_path, |progress| {
            if let ParseProgress::Highlighting { index, total } = progress {
                debug!(index, total, "highlighting entries");
            }
        });

        self.status = match result {
            Ok(total) => {
                self.scroll = usize::MAX; // jump to the newest entries
                let at = self
                    .explorer
                    .last_parsed()
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_default();
                format!("parsed {} entries at {}", total, at)
            }
            Err(e) => format!("parse failed: {e}"),
        };
    }

    /// The entries to display: the last N of the collection (all of them
    /// when N is 0). Windowing lives here, not in the core.
    pub fn visible_entries(&self) -> &[String] {
        let entries = self.explorer.entries();
        if self.entries_to_show == 0 {
            return entries;
        }
        let start = entries.len().saturating_sub(self.entries_to_show);
        &entries[start..]
    }

    pub fn total(&self) -> usize {
        self.explorer.total()
    }

    pub fn entries_to_show(&self) -> usize {
        self.entries_to_show
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Clamp the scroll position once the renderer knows the content height
    pub fn clamp_scroll(&mut self, max: usize) {
        self.scroll = self.scroll.min(max);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn explorer(&self) -> &LogExplorer {
        &self.explorer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn app_with_log(content: &str) -> (App, tempfile::NamedTempFile) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        let app = App::new(file.path().to_path_buf(), 0);
        (app, file)
    }

    #[test]
    fn test_reparse_populates_entries() {
        let (mut app, _file) = app_with_log("A\n\tone 1ms\nB\n\ttwo 2ms\n");
        app.update(Message::Reparse);
        assert_eq!(app.total(), 2);
        assert!(app.status().starts_with("parsed 2 entries"));
    }

    #[test]
    fn test_failed_reparse_keeps_entries_and_reports() {
        let (mut app, file) = app_with_log("A\n\tone 1ms\n");
        app.update(Message::Reparse);
        assert_eq!(app.total(), 1);

        drop(file); // the log disappears out from under us
        app.update(Message::Reparse);
        assert_eq!(app.total(), 1, "previous entries must survive a failure");
        assert!(app.status().starts_with("parse failed"));
    }

    #[test]
    fn test_window_shows_last_n() {
        let (mut app, _file) = app_with_log("A\n\ta\nB\n\tb\nC\n\tc\n");
        app.update(Message::Reparse);
        assert_eq!(app.total(), 3);

        assert_eq!(app.visible_entries().len(), 3); // 0 = all
        app.update(Message::WindowGrow); // N = 5, more than we have
        assert_eq!(app.visible_entries().len(), 3);
        app.update(Message::WindowShrink); // back to 0
        assert_eq!(app.visible_entries().len(), 3);
    }

    #[test]
    fn test_window_truncates_to_newest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"A\n\ta\nB\n\tb\nC\n\tc\n").unwrap();
        file.flush().unwrap();

        let mut app = App::new(file.path().to_path_buf(), 2);
        app.update(Message::Reparse);
        assert_eq!(app.total(), 3);

        let visible = app.visible_entries();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible.last(), app.explorer().entries().last());
    }

    #[test]
    fn test_scroll_messages() {
        let (mut app, _file) = app_with_log("A\n\ta\n");
        app.update(Message::ScrollDown);
        app.update(Message::ScrollDown);
        assert_eq!(app.scroll(), 2);
        app.update(Message::ScrollUp);
        assert_eq!(app.scroll(), 1);
        app.update(Message::ScrollTop);
        assert_eq!(app.scroll(), 0);
        app.update(Message::ScrollUp); // saturates, no underflow
        assert_eq!(app.scroll(), 0);
        app.update(Message::PageDown);
        assert_eq!(app.scroll(), PAGE_STEP);
    }

    #[test]
    fn test_clamp_scroll() {
        let (mut app, _file) = app_with_log("A\n\ta\n");
        app.update(Message::ScrollBottom);
        app.clamp_scroll(12);
        assert_eq!(app.scroll(), 12);
    }

    #[test]
    fn test_quit_message() {
        let (mut app, _file) = app_with_log("");
        assert!(!app.should_quit());
        app.update(Message::Quit);
        assert!(app.should_quit());
    }
}
