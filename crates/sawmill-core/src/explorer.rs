//! The parse pipeline: read a log file, extract summary blocks, highlight
//! them, and hold the resulting entry collection.
//!
//! Parsing is synchronous and runs to completion; the entry collection is
//! replaced atomically (buffer-then-swap), so a failed parse leaves the
//! previous entries untouched.

use std::path::Path;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::error::{Error, Result};
use crate::highlight::Highlighter;
use crate::markup::MarkupDialect;
use crate::summary::extract_summaries;

/// Parse phase notifications for progress display.
///
/// Callers driving a progress indicator must clear it on every exit path,
/// including failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseProgress {
    ReadingFile,
    Extracting,
    Highlighting { index: usize, total: usize },
}

/// Read a log file fully into memory.
///
/// The file is opened with shared read access (a build tool still writing
/// to it is not blocked) and closed before parsing begins. Invalid UTF-8 is
/// reported as a distinct error rather than an IO failure.
pub fn read_log(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| Error::decode(path))
}

// ─────────────────────────────────────────────────────────────────────────────
// LogExplorer
// ─────────────────────────────────────────────────────────────────────────────

/// Owns the highlighter and the current entry collection.
///
/// Each parse invocation discards the previous collection wholesale; entries
/// are never merged or appended across parses. Windowing ("show the last N
/// entries") is the viewer's job — the full collection is always exposed.
#[derive(Debug)]
pub struct LogExplorer {
    highlighter: Highlighter,
    entries: Vec<String>,
    last_parsed: Option<DateTime<Local>>,
}

impl LogExplorer {
    pub fn new(highlighter: Highlighter) -> Self {
        Self {
            highlighter,
            entries: Vec::new(),
            last_parsed: None,
        }
    }

    /// Parse with the default rich-text dialect
    pub fn with_default_dialect() -> Self {
        Self::new(Highlighter::new(MarkupDialect::default()))
    }

    /// Parse a log file, replacing the entry collection. Returns the total
    /// entry count.
    pub fn parse_file(&mut self, path: &Path) -> Result<usize> {
        self.parse_file_with(path, |_| {})
    }

    /// Parse a log file, reporting phase boundaries through `on_progress`.
    ///
    /// The previous entry collection is only replaced once every block has
    /// been highlighted; on error it is left exactly as it was.
    pub fn parse_file_with(
        &mut self,
        path: &Path,
        mut on_progress: impl FnMut(ParseProgress),
    ) -> Result<usize> {
        on_progress(ParseProgress::ReadingFile);
        let text = read_log(path)?;

        on_progress(ParseProgress::Extracting);
        let blocks = extract_summaries(&text);
        let total = blocks.len();

        let mut next = Vec::with_capacity(total);
        for (index, block) in blocks.iter().enumerate() {
            on_progress(ParseProgress::Highlighting { index, total });
            next.push(self.highlighter.highlight(&block.text));
        }

        // Swap in the finished collection only now
        self.entries = next;
        self.last_parsed = Some(Local::now());
        debug!(path = %path.display(), total, "parsed log");
        Ok(total)
    }

    /// The full, ordered entry collection
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Total number of entries from the most recent parse
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// When the log was last parsed successfully
    pub fn last_parsed(&self) -> Option<DateTime<Local>> {
        self.last_parsed
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }
}

impl Default for LogExplorer {
    fn default() -> Self {
        Self::with_default_dialect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_log(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_file_produces_entries() {
        let file = write_log("Build report\n\tcompile 12ms\n\tlink 500 seconds\nLone header\n");
        let mut explorer = LogExplorer::default();

        let total = explorer.parse_file(file.path()).unwrap();
        assert_eq!(total, 1);
        assert_eq!(explorer.total(), 1);
        assert!(explorer.entries()[0].contains("<b>"));
        assert!(explorer.last_parsed().is_some());
    }

    #[test]
    fn test_empty_log_yields_empty_collection() {
        let file = write_log("");
        let mut explorer = LogExplorer::default();
        assert_eq!(explorer.parse_file(file.path()).unwrap(), 0);
        assert_eq!(explorer.total(), 0);
    }

    #[test]
    fn test_log_without_blocks_yields_empty_collection() {
        let file = write_log("just\nplain\nlines\n");
        let mut explorer = LogExplorer::default();
        assert_eq!(explorer.parse_file(file.path()).unwrap(), 0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut explorer = LogExplorer::default();
        let err = explorer
            .parse_file(Path::new("/definitely/not/here.log"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_failed_parse_keeps_previous_entries() {
        let file = write_log("A\n\ta detail\n");
        let mut explorer = LogExplorer::default();
        explorer.parse_file(file.path()).unwrap();
        let before = explorer.entries().to_vec();

        let result = explorer.parse_file(Path::new("/definitely/not/here.log"));
        assert!(result.is_err());
        assert_eq!(explorer.entries(), before.as_slice());
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x48, 0x69, 0xff, 0xfe, 0x0a]).unwrap();
        file.flush().unwrap();

        let mut explorer = LogExplorer::default();
        let err = explorer.parse_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_reparse_is_deterministic() {
        let file = write_log("A\n\tstep 12ms\nB\n\tstep 3000ms\n");
        let mut explorer = LogExplorer::default();
        explorer.parse_file(file.path()).unwrap();
        let first = explorer.entries().to_vec();
        explorer.parse_file(file.path()).unwrap();
        assert_eq!(explorer.entries(), first.as_slice());
    }

    #[test]
    fn test_reparse_replaces_not_appends() {
        let file = write_log("A\n\tone 1ms\n");
        let mut explorer = LogExplorer::default();
        explorer.parse_file(file.path()).unwrap();
        explorer.parse_file(file.path()).unwrap();
        assert_eq!(explorer.total(), 1);
    }

    #[test]
    fn test_progress_phases_reported_in_order() {
        let file = write_log("A\n\tone 1ms\nB\n\ttwo 2ms\n");
        let mut explorer = LogExplorer::default();
        let mut seen = Vec::new();
        explorer
            .parse_file_with(file.path(), |p| seen.push(p))
            .unwrap();

        assert_eq!(seen[0], ParseProgress::ReadingFile);
        assert_eq!(seen[1], ParseProgress::Extracting);
        assert_eq!(
            &seen[2..],
            &[
                ParseProgress::Highlighting { index: 0, total: 2 },
                ParseProgress::Highlighting { index: 1, total: 2 },
            ]
        );
    }

    #[test]
    fn test_demarkup_matches_source_span() {
        // Spec property: stripping markup from an entry reproduces the
        // original block, modulo tab-to-spaces normalization.
        let block = "Build report\n\tAssets compiled in 2500ms\n\tShaders 0.5 seconds";
        let file = write_log(&format!("noise line\n{block}\ntrailing\n"));

        let mut explorer = LogExplorer::default();
        explorer.parse_file(file.path()).unwrap();
        assert_eq!(explorer.total(), 1);

        let dialect = MarkupDialect::rich_text();
        assert_eq!(
            dialect.strip(&explorer.entries()[0]),
            block.replace('\t', "    ")
        );
    }
}
