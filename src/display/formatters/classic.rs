use std::sync::Arc;

use super::{output_style, visible_context, Format, FormatterOptions};
use crate::display::palette::{Palette, Tone};
use crate::display::progress::{Precision, ProgressBar};
use crate::display::{changes, policy, text};
use crate::input::SessionInfo;
use crate::metrics::{GitInfo, TokenMetrics, NO_GIT};

const BAR_CELLS: usize = 10;
const SEPARATOR: &str = " | ";

/// Labeled segments joined by pipes, with an exact 1/8-cell context bar:
///
/// `Model: Sonnet 4.5 | / main | (+156 -23) | Style: default | v2.0.28 | Ctx: ███████▊░░ 78%`
///
/// Outside a repository the git segments collapse into a `(no git)`
/// placeholder.
#[derive(Debug, Clone)]
pub struct ClassicFormatter {
    palette: Arc<Palette>,
    rule: bool,
}

impl ClassicFormatter {
    pub fn new(palette: Arc<Palette>, options: FormatterOptions) -> Self {
        Self {
            palette,
            rule: options.rule,
        }
    }

    fn context(&self, tokens: &TokenMetrics) -> String {
        let percentage = tokens.context_percentage();
        let bar = ProgressBar::new(BAR_CELLS, Precision::Exact).render(
            percentage,
            policy::two_tone(),
            &self.palette,
        );
        format!("Ctx: {} {}", bar, text::format_percent(percentage))
    }
}

impl Format for ClassicFormatter {
    fn format(
        &self,
        session: &SessionInfo,
        tokens: Option<&TokenMetrics>,
        git: Option<&GitInfo>,
    ) -> String {
        let p = &self.palette;
        let mut segments: Vec<String> = Vec::with_capacity(6);

        segments.push(p.paint(Tone::Model, &format!("Model: {}", session.model)));

        match git {
            Some(repo) if repo.is_git_repo => {
                segments.push(p.paint(Tone::Branch, &format!("/ {}", repo.branch_display)));
                segments.push(changes::paint(&changes::spans_for(repo), p));
            }
            Some(_) => segments.push(p.paint(Tone::Neutral, NO_GIT)),
            None => {}
        }

        if let Some(style) = output_style(session) {
            segments.push(p.paint(Tone::OutputStyle, &format!("Style: {}", style)));
        }

        segments.push(p.paint(Tone::Version, &format!("v{}", session.version)));

        if let Some(tokens) = visible_context(tokens) {
            segments.push(self.context(tokens));
        }

        let line = segments.join(&p.paint(Tone::Neutral, SEPARATOR));

        if self.rule {
            text::with_rules(line, p)
        } else {
            line
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::display::text::visible_len;

    fn classic(rule: bool) -> ClassicFormatter {
        ClassicFormatter::new(Arc::new(Palette::plain()), FormatterOptions { rule })
    }

    #[test]
    fn test_end_to_end_scenario() {
        let out = classic(true).format(&session(), Some(&tokens()), Some(&repo()));

        assert!(out.contains("Model: Sonnet 4.5"), "{out}");
        assert!(out.contains("Style: default"), "{out}");
        assert!(out.contains("v2.0.28"), "{out}");
        assert!(out.contains("78%"), "{out}");

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(bar_cells(lines[1]), BAR_CELLS);
    }

    #[test]
    fn test_exact_layout_without_rule() {
        let out = classic(false).format(&session(), Some(&tokens()), Some(&repo()));
        assert_eq!(
            out,
            "Model: Sonnet 4.5 | / main | (+156 -23) | Style: default | v2.0.28 | Ctx: ███████▊░░ 78%"
        );
    }

    #[test]
    fn test_rules_span_the_line() {
        let out = classic(true).format(&session(), None, None);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "Model: Sonnet 4.5 | Style: default | v2.0.28");
        assert_eq!(lines[0], "─".repeat(visible_len(lines[1])));
        assert_eq!(lines[2], lines[0]);
    }

    #[test]
    fn test_no_git_placeholder() {
        let out = classic(false).format(&session(), None, Some(&GitInfo::not_a_repository()));
        assert_eq!(out, "Model: Sonnet 4.5 | (no git) | Style: default | v2.0.28");
    }

    #[test]
    fn test_clean_tree() {
        let git = GitInfo::repository("feature/x", 0, 0);
        let out = classic(false).format(&session(), None, Some(&git));
        assert!(out.contains("/ feature/x | (no changes)"), "{out}");
    }

    #[test]
    fn test_full_context() {
        let full = TokenMetrics::new(200_000, 200_000);
        let out = classic(false).format(&session(), Some(&full), None);
        assert!(out.ends_with(&format!("Ctx: {} 100%", "█".repeat(10))), "{out}");
    }
}
