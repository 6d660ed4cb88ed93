use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Transcription;

/// Parse a cached transcription file into a Transcription
///
/// Absent `text` or `utterances` fields default to empty; downstream
/// analysis produces well-defined MISSING/NEUTRAL reports for them.
pub fn load_transcription(path: &Path) -> Result<Transcription> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcription: {:?}", path))?;
    parse_transcription(&content)
}

/// Parse transcription JSON (`text` + speaker-attributed `utterances`)
pub fn parse_transcription(json: &str) -> Result<Transcription> {
    serde_json::from_str(json).context("Failed to parse transcription JSON")
}
