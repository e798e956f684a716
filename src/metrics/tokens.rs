use std::path::Path;

use crate::input::{transcript, ContextWindow, StatusHook};
use crate::display::progress::clamp_percentage;

/// Window assumed when only a transcript is available.
pub const DEFAULT_CONTEXT_WINDOW: u64 = 200_000;

/// Context window occupancy.
///
/// The percentage is always derived from the two counts and clamped to
/// [0, 100]; there is no way to construct it directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenMetrics {
    context_length: u64,
    context_window_size: u64,
    context_percentage: f64,
}

impl TokenMetrics {
    pub fn new(context_length: u64, context_window_size: u64) -> Self {
        let context_percentage = if context_window_size > 0 {
            clamp_percentage(context_length as f64 * 100.0 / context_window_size as f64)
        } else {
            0.0
        };
        Self {
            context_length,
            context_window_size,
            context_percentage,
        }
    }

    pub fn context_length(&self) -> u64 {
        self.context_length
    }

    pub fn context_window_size(&self) -> u64 {
        self.context_window_size
    }

    pub fn context_percentage(&self) -> f64 {
        self.context_percentage
    }
}

/// Metrics from the hook's `context_window` block. A null `current_usage`
/// means nothing is known about occupancy yet.
pub fn from_context_window(window: &ContextWindow) -> TokenMetrics {
    let length = window
        .current_usage
        .as_ref()
        .map(|usage| usage.context_tokens())
        .unwrap_or(0);
    TokenMetrics::new(length, window.context_window_size)
}

/// Resolve metrics for a hook payload: the `context_window` block when
/// present, otherwise the latest main-chain usage recorded in the
/// transcript. `None` when neither source yields anything.
pub fn resolve(hook: &StatusHook) -> Option<TokenMetrics> {
    if let Some(window) = &hook.context_window {
        return Some(from_context_window(window));
    }

    if hook.transcript_path.is_empty() {
        return None;
    }

    match transcript::read_context_length(Path::new(&hook.transcript_path)) {
        Ok(Some(length)) => Some(TokenMetrics::new(length, DEFAULT_CONTEXT_WINDOW)),
        Ok(None) => None,
        Err(e) => {
            tracing::debug!("transcript {} unavailable: {}", hook.transcript_path, e);
            None
        }
    }
}
