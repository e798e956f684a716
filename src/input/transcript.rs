//! Session transcript (JSONL) fallback for context usage.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::Usage;
use crate::error::StatusError;

/// One line of the transcript. Only the fields needed for context usage.
#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct TranscriptLine {
    timestamp: String,
    is_sidechain: bool,
    is_api_error_message: bool,
    message: Option<Message>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Message {
    usage: Option<Usage>,
}

impl TranscriptLine {
    /// Timestamp and usage of a main-chain assistant reply, if this line is one.
    fn main_chain_usage(&self) -> Option<(DateTime<FixedOffset>, Usage)> {
        if self.is_sidechain || self.is_api_error_message {
            return None;
        }
        let usage = self.message.as_ref()?.usage?;
        let at = DateTime::parse_from_rfc3339(&self.timestamp).ok()?;
        Some((at, usage))
    }
}

/// Context length from the main-chain entry with the latest timestamp.
///
/// Lines that are blank, not UTF-8, not JSON, or lack an RFC 3339 timestamp
/// are skipped. Only read failures are errors. `None` when no line carries
/// usage.
pub fn context_length<R: BufRead>(reader: R) -> Result<Option<u64>, StatusError> {
    let mut latest: Option<(DateTime<FixedOffset>, Usage)> = None;

    for line in reader.split(b'\n') {
        let line = line?;
        let Ok(text) = std::str::from_utf8(&line) else {
            continue;
        };
        if text.trim().is_empty() {
            continue;
        }
        let Ok(entry) = serde_json::from_str::<TranscriptLine>(text) else {
            continue;
        };
        if let Some((at, usage)) = entry.main_chain_usage() {
            if latest.map_or(true, |(best, _)| at > best) {
                latest = Some((at, usage));
            }
        }
    }

    Ok(latest.map(|(_, usage)| usage.context_tokens()))
}

pub fn read_context_length(path: &Path) -> Result<Option<u64>, StatusError> {
    let file = File::open(path)?;
    context_length(BufReader::new(file))
}
