use std::sync::Arc;

use super::{output_style, visible_context, Format, FormatterOptions};
use crate::display::palette::{Palette, Tone};
use crate::display::{policy, text};
use crate::input::SessionInfo;
use crate::metrics::{GitInfo, TokenMetrics, NO_GIT};

/// Bare space-separated tokens, no bar:
///
/// `Sonnet 4.5 main +156-23 default 2.0.28 78%`
#[derive(Debug, Clone)]
pub struct MinimalFormatter {
    palette: Arc<Palette>,
    rule: bool,
}

impl MinimalFormatter {
    pub fn new(palette: Arc<Palette>, options: FormatterOptions) -> Self {
        Self {
            palette,
            rule: options.rule,
        }
    }
}

impl Format for MinimalFormatter {
    fn format(
        &self,
        session: &SessionInfo,
        tokens: Option<&TokenMetrics>,
        git: Option<&GitInfo>,
    ) -> String {
        let p = &self.palette;
        let mut parts: Vec<String> = Vec::with_capacity(6);

        parts.push(p.paint(Tone::Model, &session.model));

        match git {
            Some(repo) if repo.is_git_repo => {
                parts.push(p.paint(Tone::Branch, &repo.branch_display));
                if repo.has_changes() {
                    parts.push(format!(
                        "{}{}",
                        p.paint(Tone::Added, &format!("+{}", repo.additions)),
                        p.paint(Tone::Removed, &format!("-{}", repo.deletions))
                    ));
                }
            }
            Some(_) => parts.push(p.paint(Tone::Neutral, NO_GIT)),
            None => {}
        }

        if let Some(style) = output_style(session) {
            parts.push(p.paint(Tone::OutputStyle, style));
        }

        parts.push(p.paint(Tone::Version, &session.version));

        if let Some(tokens) = visible_context(tokens) {
            let percentage = tokens.context_percentage();
            parts.push(p.paint(policy::three_tier(percentage), &text::format_percent(percentage)));
        }

        let line = parts.join(" ");

        if self.rule {
            text::with_rules(line, p)
        } else {
            line
        }
    }
}
