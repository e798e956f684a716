use colored::{Color, Colorize};

use crate::config::ColorOverrides;
use crate::error::StatusError;

/// Semantic color category of a rendered segment.
///
/// Formatters and threshold policies only ever talk in tones; the
/// [`Palette`] decides what a tone looks like on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Model,
    Branch,
    Added,
    Removed,
    OutputStyle,
    Version,
    /// Separators, punctuation and placeholders.
    Neutral,
    /// Empty bar cells.
    Dim,
    /// Filled bar cells when the bar carries no alarm semantics.
    Emphasis,
    /// Horizontal rules around the line.
    Rule,
    Ok,
    Warning,
    Critical,
}

/// Immutable color configuration shared by every formatter.
///
/// Built once at startup and handed out behind an `Arc`. A palette with
/// `enabled == false` paints nothing, which keeps rendering output
/// independent of whatever the global `colored` override happens to be.
#[derive(Debug, Clone)]
pub struct Palette {
    enabled: bool,
    model: Color,
    branch: Color,
    added: Color,
    removed: Color,
    output_style: Color,
    version: Color,
    neutral: Color,
    dim: Color,
    emphasis: Color,
    rule: Color,
    ok: Color,
    warning: Color,
    critical: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::TrueColor { r, g, b }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            enabled: true,
            model: rgb(255, 135, 0),        // xterm 208
            branch: rgb(255, 0, 0),         // xterm 196
            added: rgb(95, 215, 0),         // xterm 76
            removed: rgb(255, 95, 95),      // xterm 203
            output_style: rgb(0, 95, 135),  // xterm 24
            version: rgb(135, 175, 255),    // xterm 111
            neutral: rgb(108, 108, 108),    // xterm 242
            dim: rgb(68, 68, 68),           // xterm 238
            emphasis: rgb(238, 238, 238),   // xterm 255
            rule: rgb(8, 8, 8),             // xterm 232
            ok: rgb(0, 255, 0),             // xterm 46
            warning: rgb(255, 255, 0),      // xterm 226
            critical: rgb(255, 0, 0),       // xterm 196
        }
    }
}

impl Palette {
    /// A palette that emits no escape sequences at all.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Apply user color overrides on top of this palette.
    ///
    /// Invalid values are skipped and reported back so the caller can log
    /// them; a bad entry never discards the rest of the overrides.
    pub fn with_overrides(mut self, overrides: &ColorOverrides) -> (Self, Vec<StatusError>) {
        let mut rejected = Vec::new();
        for (tone, value) in overrides.entries() {
            match parse_color(value) {
                Ok(color) => *self.slot_mut(tone) = color,
                Err(e) => rejected.push(e),
            }
        }
        (self, rejected)
    }

    pub fn color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Model => self.model,
            Tone::Branch => self.branch,
            Tone::Added => self.added,
            Tone::Removed => self.removed,
            Tone::OutputStyle => self.output_style,
            Tone::Version => self.version,
            Tone::Neutral => self.neutral,
            Tone::Dim => self.dim,
            Tone::Emphasis => self.emphasis,
            Tone::Rule => self.rule,
            Tone::Ok => self.ok,
            Tone::Warning => self.warning,
            Tone::Critical => self.critical,
        }
    }

    fn slot_mut(&mut self, tone: Tone) -> &mut Color {
        match tone {
            Tone::Model => &mut self.model,
            Tone::Branch => &mut self.branch,
            Tone::Added => &mut self.added,
            Tone::Removed => &mut self.removed,
            Tone::OutputStyle => &mut self.output_style,
            Tone::Version => &mut self.version,
            Tone::Neutral => &mut self.neutral,
            Tone::Dim => &mut self.dim,
            Tone::Emphasis => &mut self.emphasis,
            Tone::Rule => &mut self.rule,
            Tone::Ok => &mut self.ok,
            Tone::Warning => &mut self.warning,
            Tone::Critical => &mut self.critical,
        }
    }

    /// Paint `text` in the color of `tone`.
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }
        text.color(self.color(tone)).to_string()
    }
}

/// Parse `#rrggbb` or a named color understood by `colored`.
pub fn parse_color(value: &str) -> Result<Color, StatusError> {
    let trimmed = value.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
            if let (Ok(r), Ok(g), Ok(b)) = (channel(0), channel(2), channel(4)) {
                return Ok(rgb(r, g, b));
            }
        }
        return Err(StatusError::InvalidColor(value.to_string()));
    }
    trimmed
        .parse::<Color>()
        .map_err(|_| StatusError::InvalidColor(value.to_string()))
}
