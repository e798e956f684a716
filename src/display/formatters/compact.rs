use std::sync::Arc;

use super::{output_style, visible_context, visible_repo, Format};
use crate::display::palette::{Palette, Tone};
use crate::display::progress::{Precision, ProgressBar};
use crate::display::{policy, text};
use crate::input::SessionInfo;
use crate::metrics::{GitInfo, TokenMetrics};

/// 5% per cell.
const BAR_CELLS: usize = 20;
const SEPARATOR: &str = "  ";

const ICON_MODEL: &str = "◈";
const ICON_STYLE: &str = "⎔";
const ICON_VERSION: &str = "⌘";
const ICON_CONTEXT: &str = "◐";
const ICON_BRANCH: &str = "\u{e0a0}"; // powerline branch
const ICON_ADD: &str = "↑";
const ICON_DEL: &str = "↓";

/// Icon-prefixed segments with a wide whole-cell bar:
///
/// `◈ Sonnet 4.5  ⎔ default  ⌘ 2.0.28  ◐ 78% [███████████████░░░░░]   main ↑156 ↓23`
///
/// Outside a repository the git segment is dropped.
#[derive(Debug, Clone)]
pub struct CompactFormatter {
    palette: Arc<Palette>,
}

impl CompactFormatter {
    pub fn new(palette: Arc<Palette>) -> Self {
        Self { palette }
    }

    fn context(&self, tokens: &TokenMetrics) -> String {
        let percentage = tokens.context_percentage();
        let bar = ProgressBar::new(BAR_CELLS, Precision::Whole).render(
            percentage,
            policy::two_tone(),
            &self.palette,
        );
        format!(
            "{} {} [{}]",
            ICON_CONTEXT,
            text::format_percent(percentage),
            bar
        )
    }

    fn git(&self, repo: &GitInfo) -> String {
        let p = &self.palette;
        let branch = p.paint(Tone::Branch, &format!("{} {}", ICON_BRANCH, repo.branch_display));

        let mut counts = Vec::with_capacity(2);
        if repo.additions > 0 {
            counts.push(p.paint(Tone::Added, &format!("{}{}", ICON_ADD, repo.additions)));
        }
        if repo.deletions > 0 {
            counts.push(p.paint(Tone::Removed, &format!("{}{}", ICON_DEL, repo.deletions)));
        }

        if counts.is_empty() {
            branch
        } else {
            format!("{} {}", branch, counts.join(" "))
        }
    }
}

impl Format for CompactFormatter {
    fn format(
        &self,
        session: &SessionInfo,
        tokens: Option<&TokenMetrics>,
        git: Option<&GitInfo>,
    ) -> String {
        let p = &self.palette;
        let mut parts: Vec<String> = Vec::with_capacity(5);

        parts.push(p.paint(Tone::Model, &format!("{} {}", ICON_MODEL, session.model)));

        if let Some(style) = output_style(session) {
            parts.push(p.paint(Tone::OutputStyle, &format!("{} {}", ICON_STYLE, style)));
        }

        parts.push(p.paint(Tone::Version, &format!("{} {}", ICON_VERSION, session.version)));

        if let Some(tokens) = visible_context(tokens) {
            parts.push(self.context(tokens));
        }

        if let Some(repo) = visible_repo(git) {
            parts.push(self.git(repo));
        }

        parts.join(SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    fn compact() -> CompactFormatter {
        CompactFormatter::new(Arc::new(Palette::plain()))
    }

    #[test]
    fn test_full_layout() {
        let out = compact().format(&session(), Some(&tokens()), Some(&repo()));
        let expected = format!(
            "◈ Sonnet 4.5  ⎔ default  ⌘ 2.0.28  ◐ 78% [{}{}]  {} main ↑156 ↓23",
            "█".repeat(15),
            "░".repeat(5),
            ICON_BRANCH
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_bar_is_twenty_whole_cells() {
        let tokens = TokenMetrics::new(9_800, 200_000); // 4.9%
        let out = compact().format(&session(), Some(&tokens), None);
        assert!(out.contains(&format!("[{}]", "░".repeat(20))), "{out}");
        assert_eq!(bar_cells(&out), BAR_CELLS);
    }

    #[test]
    fn test_one_sided_changes() {
        let git = GitInfo::repository("dev", 0, 4);
        let out = compact().format(&session(), None, Some(&git));
        assert!(out.ends_with("dev ↓4"), "{out}");
        assert!(!out.contains(ICON_ADD), "{out}");
    }

    #[test]
    fn test_clean_tree_shows_branch_only() {
        let git = GitInfo::repository("dev", 0, 0);
        let out = compact().format(&session(), None, Some(&git));
        assert!(out.ends_with(&format!("{} dev", ICON_BRANCH)), "{out}");
    }

    #[test]
    fn test_outside_repository_omits_git() {
        let out = compact().format(&session(), None, Some(&GitInfo::not_a_repository()));
        assert_eq!(out, "◈ Sonnet 4.5  ⎔ default  ⌘ 2.0.28");
    }
}
