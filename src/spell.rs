use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// External general-dictionary capability: validity plus ranked correction
/// candidates
///
/// The tokenizer takes this as an explicit dependency so tests can swap in
/// an in-memory fake.
pub trait SpellOracle {
    /// Whether the word is orthographically valid for the target language
    fn is_valid(&self, word: &str) -> bool;

    /// Ranked correction candidates; the tokenizer re-filters these by
    /// edit distance, so a generous list is fine
    fn suggest(&self, word: &str) -> Vec<String>;
}

/// File-backed oracle: one lowercase word per line, `#` starts a comment
///
/// A plain wordlist stands in for a full hunspell dictionary. Candidate
/// generation is a cheap scan over words of similar shape; precision comes
/// from the tokenizer's distance filter, not from here.
pub struct WordlistOracle {
    words: Vec<String>,
    index: HashSet<String>,
}

/// Cap on raw candidates handed back to the tokenizer
const MAX_CANDIDATES: usize = 20;

impl WordlistOracle {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_content(&content))
    }

    pub fn from_content(content: &str) -> Self {
        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        let index = words.iter().cloned().collect();
        debug!("Wordlist oracle loaded {} words", words.len());
        Self { words, index }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellOracle for WordlistOracle {
    fn is_valid(&self, word: &str) -> bool {
        self.index.contains(&word.to_lowercase())
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        let word_len = word.chars().count();
        let first = word.chars().next();

        self.words
            .iter()
            .filter(|w| {
                let len = w.chars().count();
                len.abs_diff(word_len) <= 2 && w.chars().next() == first
            })
            .take(MAX_CANDIDATES)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle() -> WordlistOracle {
        WordlistOracle::from_content("# palabras\nhola\nbuenos\ndias\ngracias\ngrandes\n")
    }

    #[test]
    fn test_is_valid() {
        let oracle = oracle();
        assert!(oracle.is_valid("hola"));
        assert!(oracle.is_valid("HOLA"));
        assert!(!oracle.is_valid("ola"));
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        assert_eq!(oracle().len(), 5);
    }

    #[test]
    fn test_suggest_similar_shape() {
        let suggestions = oracle().suggest("grasias");
        assert!(suggestions.contains(&"gracias".to_string()));
        // "hola" shares neither first letter nor length
        assert!(!suggestions.contains(&"hola".to_string()));
    }
}
