use std::sync::Arc;

use super::{output_style, visible_context, visible_repo, Format};
use crate::display::palette::{Palette, Tone};
use crate::display::policy::{self, BarTones};
use crate::display::progress::{Precision, ProgressBar};
use crate::display::text::{self, format_tokens, visible_len};
use crate::input::SessionInfo;
use crate::metrics::{GitInfo, TokenMetrics};

const BAR_CELLS: usize = 10;
const SEPARATOR: &str = " │ ";

/// Bordered panel with absolute token counts:
///
/// ```text
/// ┌──────────────────────────────────────────────────────────────────────────────────┐
/// │ Sonnet 4.5 │ main ⇡156 ⇣23 │ default │ v2.0.28 │ CTX: 156.0k/200.0k (78%) ███████▊░░ │
/// └──────────────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone)]
pub struct NerdFormatter {
    palette: Arc<Palette>,
}

impl NerdFormatter {
    pub fn new(palette: Arc<Palette>) -> Self {
        Self { palette }
    }

    fn context(&self, tokens: &TokenMetrics) -> String {
        let percentage = tokens.context_percentage();
        let tones = BarTones {
            filled: policy::three_tier(percentage),
            empty: Tone::Dim,
        };
        let bar = ProgressBar::new(BAR_CELLS, Precision::Gated).render(
            percentage,
            tones,
            &self.palette,
        );
        format!(
            "CTX: {}/{} ({}) {}",
            format_tokens(tokens.context_length()),
            format_tokens(tokens.context_window_size()),
            text::format_percent(percentage),
            bar
        )
    }

    fn git(&self, repo: &GitInfo) -> String {
        let p = &self.palette;
        format!(
            "{} {}{} {}{}",
            p.paint(Tone::Branch, &repo.branch_display),
            p.paint(Tone::Added, "⇡"),
            repo.additions,
            p.paint(Tone::Removed, "⇣"),
            repo.deletions
        )
    }

    /// Wrap `content` in a single-line box sized to its visible width.
    fn boxed(&self, content: &str) -> String {
        let p = &self.palette;
        let span = "─".repeat(visible_len(content) + 2);
        format!(
            "{}\n{}{}{}\n{}",
            p.paint(Tone::Neutral, &format!("┌{}┐", span)),
            p.paint(Tone::Neutral, "│ "),
            content,
            p.paint(Tone::Neutral, " │"),
            p.paint(Tone::Neutral, &format!("└{}┘", span)),
        )
    }
}

impl Format for NerdFormatter {
    fn format(
        &self,
        session: &SessionInfo,
        tokens: Option<&TokenMetrics>,
        git: Option<&GitInfo>,
    ) -> String {
        let p = &self.palette;
        let mut segments: Vec<String> = Vec::with_capacity(5);

        segments.push(p.paint(Tone::Model, &session.model));

        if let Some(repo) = visible_repo(git) {
            segments.push(self.git(repo));
        }

        if let Some(style) = output_style(session) {
            segments.push(p.paint(Tone::OutputStyle, style));
        }

        segments.push(p.paint(Tone::Version, &format!("v{}", session.version)));

        if let Some(tokens) = visible_context(tokens) {
            segments.push(self.context(tokens));
        }

        let content = segments.join(&p.paint(Tone::Neutral, SEPARATOR));
        self.boxed(&content)
    }
}
