use serde::{Deserialize, Serialize};

/// Protocol-relevant classification of a lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Greeting,
    Identification,
    Farewell,
    Prohibited,
    Query,
    #[default]
    Other,
}

/// One word token produced by the tokenizer
///
/// Immutable after tokenization except through the correction workflow,
/// which may rewrite lexeme, validity, polarity and category in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Normalized (lowercased) surface form
    pub lexeme: String,
    /// Whether the word is known to the lexicon or the spell oracle
    pub is_valid: bool,
    /// Sentiment weight in [-3, 3]; 0 means neutral, not unset
    pub polarity: i32,
    /// Protocol classification from the lexicon
    pub category: Category,
    /// Ranked correction candidates for unknown words (at most 3)
    pub suggestions: Vec<String>,
}

impl Token {
    /// A token recognized by the lexicon
    pub fn known(lexeme: &str, polarity: i32, category: Category) -> Self {
        Self {
            lexeme: lexeme.to_string(),
            is_valid: true,
            polarity,
            category,
            suggestions: Vec::new(),
        }
    }

    /// A word the oracle accepts but the lexicon has no entry for
    pub fn oracle_valid(lexeme: &str) -> Self {
        Self {
            lexeme: lexeme.to_string(),
            is_valid: true,
            polarity: 0,
            category: Category::Other,
            suggestions: Vec::new(),
        }
    }

    /// An unrecognized word carrying correction suggestions
    pub fn unknown(lexeme: &str, suggestions: Vec<String>) -> Self {
        Self {
            lexeme: lexeme.to_string(),
            is_valid: false,
            polarity: 0,
            category: Category::Other,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_as_enum_name() {
        assert_eq!(
            serde_json::to_string(&Category::Prohibited).unwrap(),
            "\"PROHIBITED\""
        );
        assert_eq!(serde_json::to_string(&Category::Other).unwrap(), "\"OTHER\"");
    }

    #[test]
    fn test_known_token_carries_entry_values() {
        let token = Token::known("excelente", 2, Category::Other);
        assert!(token.is_valid);
        assert_eq!(token.polarity, 2);
        assert!(token.suggestions.is_empty());
    }

    #[test]
    fn test_unknown_token_is_neutral() {
        let token = Token::unknown("grasias", vec!["gracias".to_string()]);
        assert!(!token.is_valid);
        assert_eq!(token.polarity, 0);
        assert_eq!(token.category, Category::Other);
    }
}
