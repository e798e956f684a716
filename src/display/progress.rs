//! Text-mode progress bars with sub-cell precision.
//!
//! A bar is laid out first ([`BarLayout`]: how many full cells, which
//! partial glyph, how many empty cells) and painted second, so the
//! quantization rules can be tested without any color handling.

use super::palette::Palette;
use super::policy::BarTones;

/// Glyphs used to draw a bar.
///
/// `fractions` is indexed by eighths filled for the horizontal sets
/// (index 0 is empty) and by height level for [`HEIGHT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub full: &'static str,
    pub empty: &'static str,
    pub fractions: [&'static str; 8],
}

pub const HORIZONTAL: GlyphSet = GlyphSet {
    full: "█",
    empty: "░",
    fractions: ["", "▏", "▎", "▍", "▌", "▋", "▊", "▉"],
};

/// Eight height levels, lowest first. Every entry is visible.
pub const HEIGHT: GlyphSet = GlyphSet {
    full: "█",
    empty: "░",
    fractions: ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"],
};

/// Leftover (in percent of the whole bar) that a partial cell must exceed
/// before [`Precision::Gated`] draws it.
pub const NOISE_THRESHOLD: f64 = 1.25;

/// How the remainder after the last full cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Exact 1/8-cell quantization.
    Exact,
    /// 1/8-cell glyph only when the leftover exceeds [`NOISE_THRESHOLD`].
    Gated,
    /// Whole cells only; the remainder is dropped.
    Whole,
    /// Any non-zero remainder picks one of eight height levels.
    Height,
}

impl Precision {
    /// Glyph set matching this precision mode.
    pub fn default_glyphs(self) -> GlyphSet {
        match self {
            Precision::Height => HEIGHT,
            Precision::Exact | Precision::Gated | Precision::Whole => HORIZONTAL,
        }
    }
}

/// Cell counts of a laid-out bar. `full + partial + empty == cells`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLayout {
    pub full: usize,
    /// Index into [`GlyphSet::fractions`] for the single partial cell.
    pub partial: Option<usize>,
    pub empty: usize,
}

/// Clamp to [0, 100]; NaN counts as empty.
pub fn clamp_percentage(percentage: f64) -> f64 {
    if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    }
}

/// Quantize `percentage` onto `cells` positions.
pub fn layout(percentage: f64, cells: usize, precision: Precision) -> BarLayout {
    let p = clamp_percentage(percentage);

    let (full, partial) = match precision {
        Precision::Exact => {
            let total_segments = cells * 8;
            let filled_segments = (p * total_segments as f64 / 100.0).floor() as usize;
            let full = (filled_segments / 8).min(cells);
            let remainder = filled_segments % 8;
            let partial = (remainder > 0 && full < cells).then_some(remainder);
            (full, partial)
        }
        Precision::Gated => {
            let scaled = p * cells as f64 / 100.0;
            let full = (scaled.floor() as usize).min(cells);
            let leftover = p - full as f64 * 100.0 / cells.max(1) as f64;
            let partial = (full < cells && leftover > NOISE_THRESHOLD)
                .then(|| (((scaled - full as f64) * 8.0).floor() as usize).clamp(1, 7));
            (full, partial)
        }
        Precision::Whole => {
            let full = ((p * cells as f64 / 100.0).floor() as usize).min(cells);
            (full, None)
        }
        Precision::Height => {
            let scaled = p * cells as f64 / 100.0;
            let full = (scaled.floor() as usize).min(cells);
            let fraction = scaled - full as f64;
            let partial =
                (full < cells && fraction > 0.0).then(|| ((fraction * 8.0).floor() as usize).min(7));
            (full, partial)
        }
    };

    let used = full + usize::from(partial.is_some());
    BarLayout {
        full,
        partial,
        empty: cells - used,
    }
}

/// A fixed-width bar with an explicit precision mode.
#[derive(Debug, Clone, Copy)]
pub struct ProgressBar {
    cells: usize,
    precision: Precision,
    glyphs: GlyphSet,
}

impl ProgressBar {
    pub fn new(cells: usize, precision: Precision) -> Self {
        Self {
            cells,
            precision,
            glyphs: precision.default_glyphs(),
        }
    }

    pub fn layout(&self, percentage: f64) -> BarLayout {
        layout(percentage, self.cells, self.precision)
    }

    /// Render the bar. The filled run (full cells plus the partial glyph) is
    /// painted as one unit, the empty run as another.
    pub fn render(&self, percentage: f64, tones: BarTones, palette: &Palette) -> String {
        let cells = self.layout(percentage);

        let mut filled = self.glyphs.full.repeat(cells.full);
        if let Some(idx) = cells.partial {
            filled.push_str(self.glyphs.fractions[idx]);
        }

        let mut out = palette.paint(tones.filled, &filled);
        out.push_str(&palette.paint(tones.empty, &self.glyphs.empty.repeat(cells.empty)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::policy;

    const ALL: [Precision; 4] = [
        Precision::Exact,
        Precision::Gated,
        Precision::Whole,
        Precision::Height,
    ];

    fn plain(bar: ProgressBar, percentage: f64) -> String {
        bar.render(percentage, policy::two_tone(), &Palette::plain())
    }

    /// Visual fill in eighths of a cell, comparable across percentages.
    fn fill_eighths(layout: BarLayout, precision: Precision) -> usize {
        let partial = match (precision, layout.partial) {
            (_, None) => 0,
            (Precision::Height, Some(level)) => level + 1,
            (_, Some(eighths)) => eighths,
        };
        layout.full * 8 + partial
    }

    #[test]
    fn test_bar_has_exact_width() {
        for precision in ALL {
            for cells in 1..=20 {
                for step in 0..=1000 {
                    let p = step as f64 / 10.0;
                    let out = plain(ProgressBar::new(cells, precision), p);
                    assert_eq!(
                        out.chars().count(),
                        cells,
                        "{:?} cells={} p={} -> {:?}",
                        precision,
                        cells,
                        p,
                        out
                    );
                }
            }
        }
    }

    #[test]
    fn test_bar_is_monotonic() {
        for precision in ALL {
            for cells in [1, 5, 10, 20] {
                let mut previous = 0;
                for step in 0..=10_000 {
                    let p = step as f64 / 100.0;
                    let fill = fill_eighths(layout(p, cells, precision), precision);
                    assert!(
                        fill >= previous,
                        "{:?} cells={} regressed at p={}",
                        precision,
                        cells,
                        p
                    );
                    previous = fill;
                }
            }
        }
    }

    #[test]
    fn test_zero_is_all_empty() {
        for precision in ALL {
            assert_eq!(plain(ProgressBar::new(10, precision), 0.0), "░".repeat(10));
        }
    }

    #[test]
    fn test_hundred_is_all_full() {
        for precision in ALL {
            let cells = layout(100.0, 10, precision);
            assert_eq!(cells.full, 10);
            assert_eq!(cells.partial, None);
            assert_eq!(cells.empty, 0);
            assert_eq!(plain(ProgressBar::new(10, precision), 100.0), "█".repeat(10));
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let bar = ProgressBar::new(10, Precision::Exact);
        assert_eq!(plain(bar, -20.0), plain(bar, 0.0));
        assert_eq!(plain(bar, 250.0), plain(bar, 100.0));
        assert_eq!(plain(bar, f64::NAN), plain(bar, 0.0));
    }

    #[test]
    fn test_exact_eighths() {
        let bar = ProgressBar::new(10, Precision::Exact);
        assert_eq!(plain(bar, 78.0), "███████▊░░");
        assert_eq!(plain(bar, 50.0), "█████░░░░░");
        assert_eq!(plain(bar, 1.25), "▏░░░░░░░░░");
        assert_eq!(plain(bar, 1.2), "░░░░░░░░░░");
    }

    #[test]
    fn test_exact_near_full_never_overflows() {
        let cells = layout(99.9, 10, Precision::Exact);
        assert_eq!(cells.full, 9);
        assert_eq!(cells.partial, Some(7));
        assert_eq!(cells.empty, 0);
    }

    #[test]
    fn test_gated_rounds_down_below_threshold() {
        let bar = ProgressBar::new(10, Precision::Gated);
        assert_eq!(plain(bar, 71.0), "███████░░░");
        assert_eq!(plain(bar, 71.25), "███████░░░");
        assert_eq!(plain(bar, 71.3), "███████▏░░");
        assert_eq!(plain(bar, 78.0), "███████▊░░");
    }

    #[test]
    fn test_whole_drops_remainder() {
        let bar = ProgressBar::new(20, Precision::Whole);
        assert_eq!(plain(bar, 78.0), format!("{}{}", "█".repeat(15), "░".repeat(5)));
        assert_eq!(plain(bar, 4.9), "░".repeat(20));
    }

    #[test]
    fn test_height_levels() {
        let bar = ProgressBar::new(10, Precision::Height);
        assert_eq!(plain(bar, 78.0), "███████▇░░");
        assert_eq!(plain(bar, 0.5), "▁░░░░░░░░░");
        assert_eq!(plain(bar, 30.0), "███░░░░░░░");
    }

    #[test]
    fn test_zero_cells_renders_nothing() {
        for precision in ALL {
            assert_eq!(plain(ProgressBar::new(0, precision), 50.0), "");
        }
    }
}
