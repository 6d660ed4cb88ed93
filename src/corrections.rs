use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AnalysisError, Result};
use crate::lexicon::{LexiconEntry, LexiconStore};
use crate::models::{Category, Token};

/// One human-reviewed correction for an unknown lexeme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Correction {
    /// The lexeme as it came out of the tokenizer
    pub original_lexeme: String,
    /// The reviewed form to learn (may equal the original)
    pub corrected_lexeme: String,
    /// Polarity assigned by the reviewer, in [-3, 3]
    pub polarity: i32,
    /// Category assigned by the reviewer
    #[serde(default)]
    pub category: Category,
}

/// Read a correction batch from a JSON file
pub fn load_batch(path: &Path) -> Result<Vec<Correction>> {
    let content = std::fs::read_to_string(path)?;
    let batch: Vec<Correction> = serde_json::from_str(&content).map_err(|e| {
        AnalysisError::InvalidArgument(format!("unparseable correction batch {:?}: {}", path, e))
    })?;
    Ok(batch)
}

/// Merge a correction batch into the lexicon and patch the in-flight tokens
///
/// The lexicon write happens first and persists atomically; if it fails the
/// token list is left untouched and the error is surfaced (a lost
/// correction is data loss). Patched tokens keep their position, so the
/// caller re-runs scoring and protocol checking without re-tokenizing.
pub fn apply_corrections(
    store: &mut LexiconStore,
    tokens: &mut [Token],
    batch: &[Correction],
) -> Result<usize> {
    store.merge(batch.iter().map(|c| {
        (
            c.corrected_lexeme.to_lowercase(),
            LexiconEntry {
                polarity: c.polarity,
                category: c.category,
            },
        )
    }))?;

    let mut patched = 0;
    for token in tokens.iter_mut() {
        for correction in batch {
            if token.lexeme == correction.original_lexeme {
                token.lexeme = correction.corrected_lexeme.to_lowercase();
                token.is_valid = true;
                token.polarity = correction.polarity;
                token.category = correction.category;
                patched += 1;
            }
        }
    }

    info!("Applied {} corrections, patched {} tokens", batch.len(), patched);
    Ok(patched)
}

/// Unique invalid lexemes in first-seen order: the reviewer's worklist
pub fn unknown_lexemes(tokens: &[Token]) -> Vec<&Token> {
    let mut seen = std::collections::HashSet::new();
    tokens
        .iter()
        .filter(|t| !t.is_valid && seen.insert(t.lexeme.as_str()))
        .collect()
}
