use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::StatusError;

/// Upper bound on how much of stdin is read.
const MAX_PAYLOAD_BYTES: u64 = 64 * 1024;

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Status hook payload piped on every statusline refresh.
/// Unknown fields are ignored; everything except `model.display_name` and
/// `version` may be missing.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct StatusHook {
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub hook_event_name: String,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub session_id: String,
    pub transcript_path: String,
    pub cwd: String,
    pub model: Model,
    pub workspace: Workspace,
    pub version: String,
    pub output_style: OutputStyle,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub cost: Cost,
    pub context_window: Option<ContextWindow>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Model {
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub id: String,
    pub display_name: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Workspace {
    pub current_dir: String,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    pub project_dir: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct OutputStyle {
    pub name: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
#[allow(dead_code)] // Session cost is carried for future segments.
pub struct Cost {
    pub total_cost_usd: f64,
    pub total_duration_ms: u64,
    pub total_api_duration_ms: u64,
    pub total_lines_added: u64,
    pub total_lines_removed: u64,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ContextWindow {
    #[allow(dead_code)] // Session totals; occupancy comes from current_usage.
    pub total_input_tokens: u64,
    #[allow(dead_code)] // Session totals; occupancy comes from current_usage.
    pub total_output_tokens: u64,
    pub context_window_size: u64,
    pub current_usage: Option<Usage>,
}

/// Token usage of one request, shared with transcript entries.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Usage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cache_creation_input_tokens: u64,
    pub cache_read_input_tokens: u64,
}

impl Usage {
    /// Tokens occupying the context window: fresh input plus cached input.
    pub fn context_tokens(&self) -> u64 {
        self.input_tokens
            .saturating_add(self.cache_creation_input_tokens)
            .saturating_add(self.cache_read_input_tokens)
    }
}

impl StatusHook {
    /// Directory to inspect for repository state.
    pub fn working_dir(&self) -> PathBuf {
        if !self.workspace.current_dir.is_empty() {
            PathBuf::from(&self.workspace.current_dir)
        } else if !self.cwd.is_empty() {
            PathBuf::from(&self.cwd)
        } else {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        }
    }
}

// ---------------------------------------------------------------------------
// Session descriptor
// ---------------------------------------------------------------------------

/// The part of the payload every formatter renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub model: String,
    /// Empty when no output style is active.
    pub output_style: String,
    pub version: String,
}

impl From<&StatusHook> for SessionInfo {
    fn from(hook: &StatusHook) -> Self {
        Self {
            model: hook.model.display_name.clone(),
            output_style: hook.output_style.name.clone(),
            version: hook.version.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Read and validate a status hook payload.
/// Reads at most 64KB so a runaway producer cannot stall the line.
pub fn parse_hook<R: Read>(reader: R) -> Result<StatusHook, StatusError> {
    let mut buf = Vec::with_capacity(4096);
    reader.take(MAX_PAYLOAD_BYTES).read_to_end(&mut buf)?;

    let hook: StatusHook = serde_json::from_slice(&buf)?;

    if hook.model.display_name.is_empty() {
        return Err(StatusError::MissingField("model.display_name"));
    }
    if hook.version.is_empty() {
        return Err(StatusError::MissingField("version"));
    }

    Ok(hook)
}
