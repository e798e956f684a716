use std::sync::Arc;

use super::{output_style, visible_context, visible_repo, Format};
use crate::display::palette::{Palette, Tone};
use crate::display::policy::{self, BarTones};
use crate::display::progress::{Precision, ProgressBar};
use crate::display::text;
use crate::input::SessionInfo;
use crate::metrics::{GitInfo, TokenMetrics};

const BAR_CELLS: usize = 10;
const SEPARATOR: &str = " │ ";

/// Height-gradient bar whose color tracks severity:
///
/// `Sonnet 4.5 │ ███████▇░░ 78% │ main (+156/-23) │ default │ v2.0.28`
#[derive(Debug, Clone)]
pub struct GradientFormatter {
    palette: Arc<Palette>,
}

impl GradientFormatter {
    pub fn new(palette: Arc<Palette>) -> Self {
        Self { palette }
    }

    fn context(&self, tokens: &TokenMetrics) -> String {
        let percentage = tokens.context_percentage();
        let tones = BarTones {
            filled: policy::height_band(percentage),
            empty: Tone::Dim,
        };
        let bar = ProgressBar::new(BAR_CELLS, Precision::Height).render(
            percentage,
            tones,
            &self.palette,
        );
        format!("{} {}", bar, text::format_percent(percentage))
    }

    fn git(&self, repo: &GitInfo) -> String {
        let p = &self.palette;
        let branch = p.paint(Tone::Branch, &repo.branch_display);
        if repo.has_changes() {
            let changes = format!("(+{}/-{})", repo.additions, repo.deletions);
            format!("{} {}", branch, p.paint(Tone::Neutral, &changes))
        } else {
            branch
        }
    }
}

impl Format for GradientFormatter {
    fn format(
        &self,
        session: &SessionInfo,
        tokens: Option<&TokenMetrics>,
        git: Option<&GitInfo>,
    ) -> String {
        let p = &self.palette;
        let mut segments: Vec<String> = Vec::with_capacity(5);

        segments.push(p.paint(Tone::Model, &session.model));

        if let Some(tokens) = visible_context(tokens) {
            segments.push(self.context(tokens));
        }

        if let Some(repo) = visible_repo(git) {
            segments.push(self.git(repo));
        }

        if let Some(style) = output_style(session) {
            segments.push(p.paint(Tone::OutputStyle, style));
        }

        segments.push(p.paint(Tone::Version, &format!("v{}", session.version)));

        segments.join(&p.paint(Tone::Neutral, SEPARATOR))
    }
}
