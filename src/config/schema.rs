use serde::Deserialize;

use crate::display::Tone;

/// User-configurable statusline settings.
/// Missing file is not an error -- all fields have defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StatuslineConfig {
    /// Style used when neither `--style` nor `CC_STATUSLINE_STYLE` is set.
    /// Default: classic
    pub style: Option<String>,

    /// Draw horizontal rules around the classic and minimal styles.
    /// Default: true
    pub rule: bool,

    /// Probe the working directory for git state.
    /// Default: true
    pub git: bool,

    /// Per-tone color overrides.
    pub colors: ColorOverrides,
}

impl Default for StatuslineConfig {
    fn default() -> Self {
        Self {
            style: None,
            rule: true,
            git: true,
            colors: ColorOverrides::default(),
        }
    }
}

/// Color overrides, each `#rrggbb` or a color name.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ColorOverrides {
    pub model: Option<String>,
    pub branch: Option<String>,
    pub added: Option<String>,
    pub removed: Option<String>,
    pub output_style: Option<String>,
    pub version: Option<String>,
    pub neutral: Option<String>,
    pub dim: Option<String>,
    pub emphasis: Option<String>,
    pub rule: Option<String>,
    pub ok: Option<String>,
    pub warning: Option<String>,
    pub critical: Option<String>,
}

impl ColorOverrides {
    /// The overrides that are set, paired with the tone they recolor.
    pub fn entries(&self) -> Vec<(Tone, &str)> {
        [
            (Tone::Model, &self.model),
            (Tone::Branch, &self.branch),
            (Tone::Added, &self.added),
            (Tone::Removed, &self.removed),
            (Tone::OutputStyle, &self.output_style),
            (Tone::Version, &self.version),
            (Tone::Neutral, &self.neutral),
            (Tone::Dim, &self.dim),
            (Tone::Emphasis, &self.emphasis),
            (Tone::Rule, &self.rule),
            (Tone::Ok, &self.ok),
            (Tone::Warning, &self.warning),
            (Tone::Critical, &self.critical),
        ]
        .into_iter()
        .filter_map(|(tone, value)| value.as_deref().map(|v| (tone, v)))
        .collect()
    }
}
