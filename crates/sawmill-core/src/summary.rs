//! Summary block extraction from build-tool console logs.
//!
//! Provides a line-by-line state machine scanner that groups a header line
//! (no indentation) with its immediately following tab-indented continuation
//! lines into one summary block. Header lines with no indented detail under
//! them are not interesting and are filtered out.

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// One extracted summary block: a header line plus at least one indented
/// continuation line, exactly as they appeared in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryBlock {
    /// Raw block text, lines joined with `\n`
    pub text: String,

    /// Total lines in the block, header included (for diagnostics)
    pub line_count: usize,
}

/// Classification of a single log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// Non-empty and contains no tab anywhere: a header candidate
    Header,

    /// Starts with a tab and has at least one more character: indented detail
    Continuation,

    /// Anything else (empty line, lone tab, tab embedded mid-line)
    Other,
}

fn classify(line: &str) -> LineKind {
    if line.starts_with('\t') {
        if line.len() > 1 {
            LineKind::Continuation
        } else {
            LineKind::Other
        }
    } else if !line.is_empty() && !line.contains('\t') {
        LineKind::Header
    } else {
        LineKind::Other
    }
}

/// Scanner states
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    /// Waiting for a header line
    Idle,

    /// Saw a header; no continuation line yet
    Pending { header: String },

    /// Inside a block: header plus at least one continuation buffered
    InBlock { lines: Vec<String> },
}

// ─────────────────────────────────────────────────────────────────────────────
// Scanner
// ─────────────────────────────────────────────────────────────────────────────

/// Line-by-line state machine scanner for summary blocks.
///
/// Feed lines in order with [`feed_line`](Self::feed_line); a completed block
/// is returned as soon as the first line past its end is seen. Call
/// [`finish`](Self::finish) after the last line to flush a trailing block.
#[derive(Debug)]
pub struct SummaryScanner {
    state: ScanState,
}

impl SummaryScanner {
    /// Create a new scanner in Idle state
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
        }
    }

    /// Feed one line; returns a block completed by this line, if any
    pub fn feed_line(&mut self, line: &str) -> Option<SummaryBlock> {
        let kind = classify(line);

        match std::mem::replace(&mut self.state, ScanState::Idle) {
            ScanState::Idle => {
                if kind == LineKind::Header {
                    self.state = ScanState::Pending {
                        header: line.to_string(),
                    };
                }
                None
            }
            ScanState::Pending { header } => {
                match kind {
                    LineKind::Continuation => {
                        self.state = ScanState::InBlock {
                            lines: vec![header, line.to_string()],
                        };
                    }
                    // A lone header never forms a block; the new header
                    // simply replaces it as the candidate.
                    LineKind::Header => {
                        self.state = ScanState::Pending {
                            header: line.to_string(),
                        };
                    }
                    LineKind::Other => {}
                }
                None
            }
            ScanState::InBlock { mut lines } => match kind {
                LineKind::Continuation => {
                    lines.push(line.to_string());
                    self.state = ScanState::InBlock { lines };
                    None
                }
                LineKind::Header => {
                    self.state = ScanState::Pending {
                        header: line.to_string(),
                    };
                    Some(build_block(lines))
                }
                LineKind::Other => Some(build_block(lines)),
            },
        }
    }

    /// Flush a block still open at end of input
    pub fn finish(&mut self) -> Option<SummaryBlock> {
        match std::mem::replace(&mut self.state, ScanState::Idle) {
            ScanState::InBlock { lines } => Some(build_block(lines)),
            _ => None,
        }
    }
}

impl Default for SummaryScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn build_block(lines: Vec<String>) -> SummaryBlock {
    SummaryBlock {
        line_count: lines.len(),
        text: lines.join("\n"),
    }
}

/// Extract all summary blocks from a full log text, in order of appearance
pub fn extract_summaries(text: &str) -> Vec<SummaryBlock> {
    let mut scanner = SummaryScanner::new();
    let mut blocks = Vec::new();

    for line in text.split('\n') {
        if let Some(block) = scanner.feed_line(line) {
            blocks.push(block);
        }
    }
    if let Some(block) = scanner.finish() {
        blocks.push(block);
    }

    blocks
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
