//! Percentage → tone policies used by the context bars.

use super::palette::Tone;

/// Lower bound (inclusive) of the three-tier warning band.
pub const TIER_WARNING: f64 = 61.0;
/// Lower bound (inclusive) of the three-tier critical band.
pub const TIER_CRITICAL: f64 = 81.0;

/// Lower bound (inclusive) of the height-gradient warning band.
pub const BAND_WARNING: f64 = 50.0;
/// Lower bound (inclusive) of the height-gradient critical band.
pub const BAND_CRITICAL: f64 = 75.0;

/// Tones for the filled and empty runs of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarTones {
    pub filled: Tone,
    pub empty: Tone,
}

/// Fixed emphasis/dim split with no alarm semantics.
pub fn two_tone() -> BarTones {
    BarTones {
        filled: Tone::Emphasis,
        empty: Tone::Dim,
    }
}

/// ok / warning / critical at 61 and 81 percent.
pub fn three_tier(percentage: f64) -> Tone {
    if percentage >= TIER_CRITICAL {
        Tone::Critical
    } else if percentage >= TIER_WARNING {
        Tone::Warning
    } else {
        Tone::Ok
    }
}

/// Color band for bars where the glyph height carries the signal.
pub fn height_band(percentage: f64) -> Tone {
    if percentage >= BAND_CRITICAL {
        Tone::Critical
    } else if percentage >= BAND_WARNING {
        Tone::Warning
    } else {
        Tone::Ok
    }
}
