//! Rendering: markup-to-span conversion and the frame layout.
//!
//! The core emits entries in its rich-text markup dialect; this module is
//! the renderer for that dialect. Tags become ratatui style changes, with a
//! small stack so nested tags compose; anything that is not a tag of the
//! dialect renders literally.

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use sawmill_core::MarkupDialect;

use crate::app::App;

// ─────────────────────────────────────────────────────────────────────────────
// Markup parsing
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    BoldOpen,
    BoldClose,
    ItalicOpen,
    ItalicClose,
    ColorOpen(Color),
    ColorClose,
}

/// Match a dialect tag at the start of `s`, returning it and its byte length
fn tag_at(dialect: &MarkupDialect, s: &str) -> Option<(Tag, usize)> {
    for (text, tag) in [
        (dialect.bold_open, Tag::BoldOpen),
        (dialect.bold_close, Tag::BoldClose),
        (dialect.italic_open, Tag::ItalicOpen),
        (dialect.italic_close, Tag::ItalicClose),
        (dialect.color_close, Tag::ColorClose),
    ] {
        if s.starts_with(text) {
            return Some((tag, text.len()));
        }
    }

    let after_prefix = s.strip_prefix(dialect.color_open_prefix)?;
    let hex_ok =
        after_prefix.len() >= 6 && after_prefix.bytes().take(6).all(|b| b.is_ascii_hexdigit());
    if !hex_ok || !after_prefix[6..].starts_with(dialect.color_open_suffix) {
        return None;
    }
    let color = parse_hex_color(&after_prefix[..6])?;
    Some((
        Tag::ColorOpen(color),
        dialect.color_open_prefix.len() + 6 + dialect.color_open_suffix.len(),
    ))
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Active markup context while walking an entry
#[derive(Debug, Default)]
struct StyleStack {
    bold: usize,
    italic: usize,
    colors: Vec<Color>,
}

impl StyleStack {
    fn apply(&mut self, tag: Tag) {
        match tag {
            Tag::BoldOpen => self.bold += 1,
            Tag::BoldClose => self.bold = self.bold.saturating_sub(1),
            Tag::ItalicOpen => self.italic += 1,
            Tag::ItalicClose => self.italic = self.italic.saturating_sub(1),
            Tag::ColorOpen(c) => self.colors.push(c),
            Tag::ColorClose => {
                self.colors.pop();
            }
        }
    }

    fn style(&self) -> Style {
        let mut style = Style::default();
        if self.bold > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if let Some(&color) = self.colors.last() {
            style = style.fg(color);
        }
        style
    }
}

/// Convert one marked-up entry into styled lines
pub fn markup_to_lines(dialect: &MarkupDialect, text: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut buf = String::new();
    let mut stack = StyleStack::default();
    let mut rest = text;

    let flush = |buf: &mut String, spans: &mut Vec<Span<'static>>, stack: &StyleStack| {
        if !buf.is_empty() {
            spans.push(Span::styled(std::mem::take(buf), stack.style()));
        }
    };

    while !rest.is_empty() {
        if let Some((tag, len)) = tag_at(dialect, rest) {
            flush(&mut buf, &mut spans, &stack);
            stack.apply(tag);
            rest = &rest[len..];
            continue;
        }

        let mut chars = rest.chars();
        let c = chars.next().expect("non-empty remainder");
        if c == '\n' {
            flush(&mut buf, &mut spans, &stack);
            lines.push(Line::from(std::mem::take(&mut spans)));
        } else {
            buf.push(c);
        }
        rest = chars.as_str();
    }

    flush(&mut buf, &mut spans, &stack);
    if !spans.is_empty() || lines.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

// ─────────────────────────────────────────────────────────────────────────────
// View
// ─────────────────────────────────────────────────────────────────────────────

/// Render the complete UI.
///
/// Mutates only the scroll position (clamped against the content height,
/// which is first known here).
pub fn view(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    // Header: totals and the current window
    let window = match app.entries_to_show() {
        0 => String::from("all"),
        n => format!("last {n}"),
    };
    let header = Line::from(vec![
        Span::styled(" sawmill ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            "│ {} entries │ showing {window} ",
            app.total()
        )),
    ]);
    frame.render_widget(
        Paragraph::new(header).style(Style::default().add_modifier(Modifier::REVERSED)),
        chunks[0],
    );

    // Body: the windowed entries, one blank line between them
    let dialect = app.explorer().highlighter().dialect().clone();
    let mut lines: Vec<Line> = Vec::new();
    for (i, entry) in app.visible_entries().iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(markup_to_lines(&dialect, entry));
    }

    let viewport = chunks[1].height as usize;
    app.clamp_scroll(lines.len().saturating_sub(viewport));
    frame.render_widget(
        Paragraph::new(lines).scroll((app.scroll() as u16, 0)),
        chunks[1],
    );

    // Footer: key hints and the status line
    let footer = Line::from(vec![
        Span::styled(
            " r parse  j/k scroll  +/- window  q quit ",
            Style::default().add_modifier(Modifier::DIM),
        ),
        Span::raw(format!("│ {}", app.status())),
    ]);
    frame.render_widget(Paragraph::new(footer), chunks[2]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
