use serde::{Deserialize, Serialize};

/// Sentinel reported when no prohibited words were detected
pub const NO_PROHIBITED_WORDS: &str = "Ninguna detectada";

/// Call-level sentiment verdict, by sign of the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Positive,
    Negative,
    Neutral,
}

/// A word paired with its polarity score
///
/// The empty placeholder (`word: "", score: 0`) stands in when the
/// positive or negative set is empty; the field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredWord {
    pub word: String,
    pub score: i32,
}

impl ScoredWord {
    pub fn placeholder() -> Self {
        Self {
            word: String::new(),
            score: 0,
        }
    }
}

/// Aggregated sentiment over one call's token stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub sentiment: Verdict,
    pub score: i32,
    pub positive_words_count: usize,
    pub negative_words_count: usize,
    pub most_positive: ScoredWord,
    pub most_negative: ScoredWord,
}

/// Outcome of one protocol phase check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseStatus {
    Ok,
    Missing,
    Detected,
}

/// A phase that must be present in the call (greeting, identification,
/// farewell)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseCheck {
    pub status: PhaseStatus,
    pub found: bool,
}

impl PhaseCheck {
    pub fn from_detection(found: bool) -> Self {
        Self {
            status: if found {
                PhaseStatus::Ok
            } else {
                PhaseStatus::Missing
            },
            found,
        }
    }
}

/// Prohibited-word scan result; `found` carries the matched lexemes, or
/// the sentinel when none were detected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProhibitedCheck {
    pub status: PhaseStatus,
    pub found: Vec<String>,
}

impl ProhibitedCheck {
    pub fn from_lexemes(lexemes: Vec<String>) -> Self {
        if lexemes.is_empty() {
            Self {
                status: PhaseStatus::Ok,
                found: vec![NO_PROHIBITED_WORDS.to_string()],
            }
        } else {
            Self {
                status: PhaseStatus::Detected,
                found: lexemes,
            }
        }
    }

    /// True when the sentinel is the only content
    pub fn is_clean(&self) -> bool {
        self.status == PhaseStatus::Ok
    }
}

/// Per-phase protocol compliance for one call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolReport {
    pub greeting: PhaseCheck,
    pub identification: PhaseCheck,
    pub prohibited_words: ProhibitedCheck,
    pub farewell: PhaseCheck,
}

/// The terminal artifact of one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub sentiment_analysis: SentimentReport,
    pub protocol_analysis: ProtocolReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_check_status_follows_detection() {
        assert_eq!(PhaseCheck::from_detection(true).status, PhaseStatus::Ok);
        assert_eq!(
            PhaseCheck::from_detection(false).status,
            PhaseStatus::Missing
        );
    }

    #[test]
    fn test_prohibited_sentinel_when_empty() {
        let check = ProhibitedCheck::from_lexemes(vec![]);
        assert_eq!(check.status, PhaseStatus::Ok);
        assert_eq!(check.found, vec![NO_PROHIBITED_WORDS.to_string()]);
        assert!(check.is_clean());
    }

    #[test]
    fn test_prohibited_keeps_matched_words() {
        let check = ProhibitedCheck::from_lexemes(vec!["tonto".to_string()]);
        assert_eq!(check.status, PhaseStatus::Detected);
        assert_eq!(check.found, vec!["tonto".to_string()]);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&PhaseStatus::Ok).unwrap(), "\"OK\"");
        assert_eq!(
            serde_json::to_string(&PhaseStatus::Missing).unwrap(),
            "\"MISSING\""
        );
        assert_eq!(
            serde_json::to_string(&Verdict::Neutral).unwrap(),
            "\"NEUTRAL\""
        );
    }
}
