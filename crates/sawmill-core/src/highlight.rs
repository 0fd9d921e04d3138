//! Summary block highlighting.
//!
//! Two rewrite passes over each block, in fixed order:
//!
//! 1. **Numbers** — every decimal number, with an optional `ms`/`seconds`
//!    unit, is bolded; numbers with a parseable unit additionally get a
//!    foreground color from a green-to-red duration ramp.
//! 2. **Names** — every run of tabs followed by letters/digits/spaces is
//!    wrapped in a fixed color tag (the indented label of a detail line).
//!
//! Pass 2 runs on the output of pass 1. It cannot corrupt inserted tags:
//! its matches must start with a tab, and tag text contains `<`, `>`, `#`
//! and `=`, none of which are in the name character class. Finally every
//! remaining tab is replaced with four spaces for fixed-width rendering.
//! Markup is purely additive; the literal digits are never altered.

use regex::{Captures, Regex};

use crate::color::{hsv_to_rgb, lerp, Rgb};
use crate::markup::MarkupDialect;

/// Fixed color for indented name tokens
pub const NAME_COLOR: Rgb = Rgb::new(0.75, 0.80, 1.00);

/// Duration (seconds) at which the ramp reaches its hot end
const RAMP_REFERENCE_SECONDS: f32 = 3.0;

/// Hue of the cold (fast) end of the ramp: green at 125 degrees
const RAMP_COLD_HUE: f32 = 125.0 / 360.0;

/// Hue/saturation/value for a duration in seconds.
///
/// The damping factor `f = seconds / 3` is squared for the hue so short
/// durations stay green longer; interpolation parameters are clamped, so
/// anything past three seconds saturates at the hot end (hue 0, full ramp
/// saturation and value) instead of leaving the HSV domain.
fn duration_ramp(seconds: f32) -> (f32, f32, f32) {
    let f = seconds / RAMP_REFERENCE_SECONDS;
    let f2 = f * f;
    (
        lerp(RAMP_COLD_HUE, 0.0, f2),
        lerp(0.2, 0.6, f * 2.0),
        lerp(0.8, 1.0, f),
    )
}

/// Color for a duration in seconds
pub fn duration_color(seconds: f32) -> Rgb {
    let (h, s, v) = duration_ramp(seconds);
    hsv_to_rgb(h, s, v)
}

// ─────────────────────────────────────────────────────────────────────────────
// Highlighter
// ─────────────────────────────────────────────────────────────────────────────

/// Applies the two highlight passes to summary blocks.
///
/// Construct once and reuse: the regexes are compiled and the name color
/// tag is rendered at construction time.
#[derive(Debug)]
pub struct Highlighter {
    dialect: MarkupDialect,
    numbers: Regex,
    names: Regex,
    name_open: String,
}

impl Highlighter {
    pub fn new(dialect: MarkupDialect) -> Self {
        let name_open = dialect.color_open(NAME_COLOR);
        Self {
            dialect,
            numbers: Regex::new(r"([0-9.]+)( *)(ms|seconds)?").expect("number regex is valid"),
            names: Regex::new(r"\t+[a-zA-Z0-9 ]+").expect("name regex is valid"),
            name_open,
        }
    }

    pub fn dialect(&self) -> &MarkupDialect {
        &self.dialect
    }

    /// Highlight one summary block; the input is not mutated
    pub fn highlight(&self, block: &str) -> String {
        let pass1 = self
            .numbers
            .replace_all(block, |caps: &Captures| self.mark_number(caps));

        let pass2 = self.names.replace_all(&pass1, |caps: &Captures| {
            format!("{}{}{}", self.name_open, &caps[0], self.dialect.color_close)
        });

        pass2.replace('\t', "    ")
    }

    /// Replacement for one numeric match.
    ///
    /// The captured number, whitespace and unit are re-emitted verbatim;
    /// only tags are added around them.
    fn mark_number(&self, caps: &Captures) -> String {
        let num = &caps[1];
        let ws = &caps[2];
        let unit = caps.get(3).map(|m| m.as_str()).unwrap_or("");

        if unit.is_empty() {
            // A bare measurement; the trailing whitespace stays outside the tag
            return format!("{}{}", self.dialect.bold(num), ws);
        }

        match num.parse::<f32>() {
            Ok(value) => {
                let seconds = if unit == "ms" { value / 1000.0 } else { value };
                let color = duration_color(seconds);
                self.dialect.bold(&format!(
                    "{}{}{}",
                    self.dialect.colored(color, num),
                    ws,
                    self.dialect.italic(unit)
                ))
            }
            // Something like "1.2.3" — keep the text, drop the color
            Err(_) => self
                .dialect
                .bold(&format!("{}{}{}", num, ws, self.dialect.italic(unit))),
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(MarkupDialect::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
