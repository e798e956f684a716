//! The five status line styles and the selector that picks one.

mod classic;
mod compact;
mod gradient;
mod minimal;
mod nerd;

use std::sync::Arc;

pub use classic::ClassicFormatter;
pub use compact::CompactFormatter;
pub use gradient::GradientFormatter;
pub use minimal::MinimalFormatter;
pub use nerd::NerdFormatter;

use super::palette::Palette;
use crate::input::SessionInfo;
use crate::metrics::{GitInfo, TokenMetrics};

/// Renders one complete status line from the session records.
///
/// `tokens` or `git` being `None` means the feature is unavailable; the
/// matching segment is left out.
pub trait Format {
    fn format(
        &self,
        session: &SessionInfo,
        tokens: Option<&TokenMetrics>,
        git: Option<&GitInfo>,
    ) -> String;
}

/// Names of the available styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    Classic,
    Compact,
    Gradient,
    Minimal,
    Nerd,
}

impl StyleKind {
    pub const ALL: [StyleKind; 5] = [
        StyleKind::Classic,
        StyleKind::Compact,
        StyleKind::Gradient,
        StyleKind::Minimal,
        StyleKind::Nerd,
    ];

    /// Exact, case-sensitive lookup. Anything unrecognized is Classic.
    pub fn from_name(name: &str) -> Self {
        match name {
            "gradient" => StyleKind::Gradient,
            "compact" => StyleKind::Compact,
            "minimal" => StyleKind::Minimal,
            "nerd" => StyleKind::Nerd,
            _ => StyleKind::Classic,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StyleKind::Classic => "classic",
            StyleKind::Compact => "compact",
            StyleKind::Gradient => "gradient",
            StyleKind::Minimal => "minimal",
            StyleKind::Nerd => "nerd",
        }
    }
}

impl std::fmt::Display for StyleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Switches shared by the styles that support them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatterOptions {
    /// Horizontal rules above and below (classic, minimal).
    pub rule: bool,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self { rule: true }
    }
}

/// The selected style.
#[derive(Debug, Clone)]
pub enum Formatter {
    Classic(ClassicFormatter),
    Compact(CompactFormatter),
    Gradient(GradientFormatter),
    Minimal(MinimalFormatter),
    Nerd(NerdFormatter),
}

impl Formatter {
    pub fn new(kind: StyleKind, palette: Arc<Palette>, options: FormatterOptions) -> Self {
        match kind {
            StyleKind::Classic => Formatter::Classic(ClassicFormatter::new(palette, options)),
            StyleKind::Compact => Formatter::Compact(CompactFormatter::new(palette)),
            StyleKind::Gradient => Formatter::Gradient(GradientFormatter::new(palette)),
            StyleKind::Minimal => Formatter::Minimal(MinimalFormatter::new(palette, options)),
            StyleKind::Nerd => Formatter::Nerd(NerdFormatter::new(palette)),
        }
    }

    /// Select by style name; never fails.
    pub fn select(name: &str, palette: Arc<Palette>, options: FormatterOptions) -> Self {
        Self::new(StyleKind::from_name(name), palette, options)
    }

    pub fn kind(&self) -> StyleKind {
        match self {
            Formatter::Classic(_) => StyleKind::Classic,
            Formatter::Compact(_) => StyleKind::Compact,
            Formatter::Gradient(_) => StyleKind::Gradient,
            Formatter::Minimal(_) => StyleKind::Minimal,
            Formatter::Nerd(_) => StyleKind::Nerd,
        }
    }
}

impl Format for Formatter {
    fn format(
        &self,
        session: &SessionInfo,
        tokens: Option<&TokenMetrics>,
        git: Option<&GitInfo>,
    ) -> String {
        match self {
            Formatter::Classic(f) => f.format(session, tokens, git),
            Formatter::Compact(f) => f.format(session, tokens, git),
            Formatter::Gradient(f) => f.format(session, tokens, git),
            Formatter::Minimal(f) => f.format(session, tokens, git),
            Formatter::Nerd(f) => f.format(session, tokens, git),
        }
    }
}

// ---------------------------------------------------------------------------
// Field visibility
// ---------------------------------------------------------------------------

/// Context metrics worth drawing: present and above zero.
fn visible_context(tokens: Option<&TokenMetrics>) -> Option<&TokenMetrics> {
    tokens.filter(|t| t.context_percentage() > 0.0)
}

/// Repository info for a real repository only.
fn visible_repo(git: Option<&GitInfo>) -> Option<&GitInfo> {
    git.filter(|g| g.is_git_repo)
}

fn output_style(session: &SessionInfo) -> Option<&str> {
    Some(session.output_style.as_str()).filter(|s| !s.is_empty())
}
