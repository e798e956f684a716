//! Two-colored rendering of the working-tree diff summary.
//!
//! The summary arrives either as raw counts or as the pre-formatted text
//! produced by the git probe (`(+156 -23)`, `(+4)`, `(-2)`, `(no changes)`,
//! `(no git)`). Both end up as the same list of toned spans.

use super::palette::{Palette, Tone};
use crate::metrics::{changes_text, GitInfo};

/// One colored run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub tone: Tone,
    pub text: String,
}

impl Span {
    fn new(tone: Tone, text: &str) -> Self {
        Self {
            tone,
            text: text.to_string(),
        }
    }
}

fn is_signed_count(token: &str, sign: char) -> bool {
    token
        .strip_prefix(sign)
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

/// Split pre-formatted change text into toned spans.
///
/// Anything that is not a parenthesized `+A -B`, `+A` or `-B` comes back as
/// a single neutral span holding the input unchanged. Tokens must be a sign
/// followed by digits, so `(+a -b)` stays whole rather than being split on
/// its signs.
pub fn spans_from_text(text: &str) -> Vec<Span> {
    let whole = || vec![Span::new(Tone::Neutral, text)];

    let Some(inner) = text
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return whole();
    };

    let tokens: Vec<&str> = inner.split(' ').collect();
    match tokens.as_slice() {
        [add, del] if is_signed_count(add, '+') && is_signed_count(del, '-') => vec![
            Span::new(Tone::Neutral, "("),
            Span::new(Tone::Added, add),
            Span::new(Tone::Neutral, " "),
            Span::new(Tone::Removed, del),
            Span::new(Tone::Neutral, ")"),
        ],
        [add] if is_signed_count(add, '+') => vec![
            Span::new(Tone::Neutral, "("),
            Span::new(Tone::Added, add),
            Span::new(Tone::Neutral, ")"),
        ],
        [del] if is_signed_count(del, '-') => vec![
            Span::new(Tone::Neutral, "("),
            Span::new(Tone::Removed, del),
            Span::new(Tone::Neutral, ")"),
        ],
        _ => whole(),
    }
}

/// Spans for raw counts, via the same text shape the git probe produces.
pub fn spans_from_counts(additions: u64, deletions: u64) -> Vec<Span> {
    spans_from_text(&changes_text(additions, deletions))
}

/// Spans for a repository, preferring its pre-formatted text when present.
pub fn spans_for(git: &GitInfo) -> Vec<Span> {
    if !git.is_git_repo {
        return vec![Span::new(Tone::Neutral, crate::metrics::NO_GIT)];
    }
    if git.changes_text.is_empty() {
        spans_from_counts(git.additions, git.deletions)
    } else {
        spans_from_text(&git.changes_text)
    }
}

pub fn paint(spans: &[Span], palette: &Palette) -> String {
    spans
        .iter()
        .map(|span| palette.paint(span.tone, &span.text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tones(spans: &[Span]) -> Vec<(Tone, &str)> {
        spans.iter().map(|s| (s.tone, s.text.as_str())).collect()
    }

    #[test]
    fn test_mixed_changes_are_split() {
        let spans = spans_from_text("(+156 -23)");
        assert_eq!(
            tones(&spans),
            vec![
                (Tone::Neutral, "("),
                (Tone::Added, "+156"),
                (Tone::Neutral, " "),
                (Tone::Removed, "-23"),
                (Tone::Neutral, ")"),
            ]
        );
        assert_eq!(paint(&spans, &Palette::plain()), "(+156 -23)");
    }

    #[test]
    fn test_single_sided_changes() {
        assert_eq!(
            tones(&spans_from_text("(+4)")),
            vec![(Tone::Neutral, "("), (Tone::Added, "+4"), (Tone::Neutral, ")")]
        );
        assert_eq!(
            tones(&spans_from_text("(-2)")),
            vec![(Tone::Neutral, "("), (Tone::Removed, "-2"), (Tone::Neutral, ")")]
        );
    }

    #[test]
    fn test_sentinels_stay_whole() {
        assert_eq!(tones(&spans_from_text("(no git)")), vec![(Tone::Neutral, "(no git)")]);
        assert_eq!(
            tones(&spans_from_text("(no changes)")),
            vec![(Tone::Neutral, "(no changes)")]
        );
    }

    #[test]
    fn test_malformed_text_is_left_alone() {
        for text in ["", "(", "+1 -2", "(+1 -2 -3)", "(+a -b)", "(-1 +2)", "(+ -)", "(+1  -2)"] {
            assert_eq!(tones(&spans_from_text(text)), vec![(Tone::Neutral, text)], "{text:?}");
        }
    }

    #[test]
    fn test_counts_use_same_shapes() {
        assert_eq!(spans_from_counts(156, 23), spans_from_text("(+156 -23)"));
        assert_eq!(spans_from_counts(3, 0), spans_from_text("(+3)"));
        assert_eq!(
            tones(&spans_from_counts(0, 0)),
            vec![(Tone::Neutral, "(no changes)")]
        );
    }

    #[test]
    fn test_spans_for_repository() {
        let repo = GitInfo::repository("main", 1, 2);
        assert_eq!(spans_for(&repo), spans_from_text("(+1 -2)"));

        let counts_only = GitInfo {
            changes_text: String::new(),
            ..GitInfo::repository("main", 7, 0)
        };
        assert_eq!(spans_for(&counts_only), spans_from_text("(+7)"));

        assert_eq!(
            tones(&spans_for(&GitInfo::not_a_repository())),
            vec![(Tone::Neutral, "(no git)")]
        );
    }
}
