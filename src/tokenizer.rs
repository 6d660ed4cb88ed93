use regex::Regex;
use tracing::debug;

use crate::distance::{levenshtein, padded_hamming};
use crate::lexicon::LexiconStore;
use crate::models::Token;
use crate::spell::SpellOracle;

/// Maximum combined edit distance for a suggestion to be kept
pub const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Maximum number of suggestions attached to a token
pub const MAX_SUGGESTIONS: usize = 3;

/// Splits transcript text into classified word tokens
///
/// Classification order per word: lexicon entry, then oracle validity,
/// then unknown-with-suggestions. Never mutates the store; the correction
/// workflow owns lexicon writes.
pub struct Tokenizer<'a> {
    store: &'a LexiconStore,
    oracle: &'a dyn SpellOracle,
    word_pattern: Regex,
}

impl<'a> Tokenizer<'a> {
    pub fn new(store: &'a LexiconStore, oracle: &'a dyn SpellOracle) -> Self {
        Self {
            store,
            oracle,
            // Unicode word runs; punctuation separates and is dropped
            word_pattern: Regex::new(r"\w+").expect("static pattern"),
        }
    }

    /// Tokenize normalized text into classified tokens, in input order
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let text = text.to_lowercase();
        let mut tokens = Vec::new();

        for m in self.word_pattern.find_iter(&text) {
            let word = m.as_str();

            let token = if let Some(entry) = self.store.lookup(word) {
                Token::known(word, entry.polarity, entry.category)
            } else if self.oracle.is_valid(word) {
                Token::oracle_valid(word)
            } else {
                Token::unknown(word, self.find_suggestions(word))
            };
            tokens.push(token);
        }

        debug!(
            "Tokenized {} words ({} unknown)",
            tokens.len(),
            tokens.iter().filter(|t| !t.is_valid).count()
        );
        tokens
    }

    /// Rank oracle candidates for an unknown word
    ///
    /// Each candidate scores the minimum of Levenshtein and space-padded
    /// Hamming distance to the word. Candidates beyond
    /// `MAX_SUGGESTION_DISTANCE` are dropped; the sort is stable so ties
    /// keep the oracle's order. At most `MAX_SUGGESTIONS` words survive.
    pub fn find_suggestions(&self, word: &str) -> Vec<String> {
        let mut scored: Vec<(String, usize)> = self
            .oracle
            .suggest(word)
            .into_iter()
            .filter_map(|candidate| {
                let lev = levenshtein(word, &candidate);
                let ham = padded_hamming(word, &candidate, ' ');
                let score = lev.min(ham);
                (score <= MAX_SUGGESTION_DISTANCE).then_some((candidate, score))
            })
            .collect();

        scored.sort_by_key(|(_, score)| *score);
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(word, _)| word)
            .collect()
    }
}
