//! Rich-text markup dialect.
//!
//! Highlighting annotates block text with bold/italic/foreground-color tags.
//! The exact tag syntax is a rendering target, not a wire format: it lives in
//! a [`MarkupDialect`] value constructed once and handed to the highlighter,
//! so a different renderer only needs a different dialect.

use crate::color::Rgb;

/// Tag templates for one markup target.
///
/// Color-open tags are built as `prefix + 6-hex-digit code + suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupDialect {
    pub bold_open: &'static str,
    pub bold_close: &'static str,
    pub italic_open: &'static str,
    pub italic_close: &'static str,
    pub color_open_prefix: &'static str,
    pub color_open_suffix: &'static str,
    pub color_close: &'static str,
}

impl MarkupDialect {
    /// The rich-text subset the original viewer renders:
    /// `<b>`, `<i>`, `<color=#RRGGBB>`.
    pub const fn rich_text() -> Self {
        Self {
            bold_open: "<b>",
            bold_close: "</b>",
            italic_open: "<i>",
            italic_close: "</i>",
            color_open_prefix: "<color=#",
            color_open_suffix: ">",
            color_close: "</color>",
        }
    }

    /// Plain HTML tags, for dumping entries into a web page.
    pub const fn html() -> Self {
        Self {
            bold_open: "<b>",
            bold_close: "</b>",
            italic_open: "<i>",
            italic_close: "</i>",
            color_open_prefix: "<span style=\"color:#",
            color_open_suffix: "\">",
            color_close: "</span>",
        }
    }

    pub fn bold(&self, text: &str) -> String {
        format!("{}{}{}", self.bold_open, text, self.bold_close)
    }

    pub fn italic(&self, text: &str) -> String {
        format!("{}{}{}", self.italic_open, text, self.italic_close)
    }

    /// Build the opening tag for a foreground color
    pub fn color_open(&self, color: Rgb) -> String {
        format!(
            "{}{}{}",
            self.color_open_prefix,
            color.to_hex(),
            self.color_open_suffix
        )
    }

    pub fn colored(&self, color: Rgb, text: &str) -> String {
        format!("{}{}{}", self.color_open(color), text, self.color_close)
    }

    /// Remove this dialect's tags, leaving the literal text content.
    ///
    /// Anything that is not one of the dialect's tags passes through
    /// untouched, including stray `<` characters in the log itself.
    pub fn strip(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while !rest.is_empty() {
            if let Some(tag_len) = self.tag_len_at(rest) {
                rest = &rest[tag_len..];
                continue;
            }
            let mut chars = rest.chars();
            // Unwrap is fine: rest is non-empty
            let c = chars.next().expect("non-empty remainder");
            out.push(c);
            rest = chars.as_str();
        }
        out
    }

    /// Length of the dialect tag starting at the beginning of `s`, if any
    fn tag_len_at(&self, s: &str) -> Option<usize> {
        for tag in [
            self.bold_open,
            self.bold_close,
            self.italic_open,
            self.italic_close,
            self.color_close,
        ] {
            if s.starts_with(tag) {
                return Some(tag.len());
            }
        }

        // Color-open: prefix, then exactly six hex digits, then suffix
        if let Some(after_prefix) = s.strip_prefix(self.color_open_prefix) {
            let hex_ok = after_prefix.len() >= 6
                && after_prefix
                    .bytes()
                    .take(6)
                    .all(|b| b.is_ascii_hexdigit());
            if hex_ok && after_prefix[6..].starts_with(self.color_open_suffix) {
                return Some(
                    self.color_open_prefix.len() + 6 + self.color_open_suffix.len(),
                );
            }
        }

        None
    }
}

impl Default for MarkupDialect {
    fn default() -> Self {
        Self::rich_text()
    }
}
