use regex::Regex;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::models::{
    Category, PhaseCheck, ProhibitedCheck, ProtocolReport, Speaker, Token, Utterance,
};

/// Phrase catalogs and scan policy for protocol checking
///
/// Patterns are written unaccented; utterance text is case- and
/// diacritic-folded before matching, so accented input still matches.
#[derive(Debug, Clone)]
pub struct ProtocolConfig {
    /// Greeting phrases, scanned over every agent utterance
    pub greeting_patterns: Vec<String>,
    /// Identification requests, scanned over every agent utterance
    pub identification_patterns: Vec<String>,
    /// Farewell phrases, scanned only over the closing window
    pub farewell_patterns: Vec<String>,
    /// How many of the agent's final utterances count for the farewell
    pub farewell_window: usize,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            greeting_patterns: vec![
                r"buen[oa]s? (dias|tardes|noches)".to_string(),
                r"hola".to_string(),
                r"bienvenido[ae]?".to_string(),
            ],
            identification_patterns: vec![
                r"con quien tengo el gusto".to_string(),
                r"me puede indicar su nombre".to_string(),
                r"podria confirmarme su numero de documento".to_string(),
                r"me indica su numero de cliente".to_string(),
                r"para verificar sus datos".to_string(),
                r"me podria facilitar su identificacion".to_string(),
                r"me podria decir su nombre".to_string(),
            ],
            farewell_patterns: vec![
                r"gracias por comunicarse".to_string(),
                r"gracias por contactarnos".to_string(),
                r"gracias por su preferencia".to_string(),
                r"que tenga (un |una )?(buen[oa]?|excelente|gran) (dia|tarde|noche)".to_string(),
                r"algo mas en lo que le pueda (ayudar|asistir)".to_string(),
                r"fue un placer atenderle".to_string(),
                r"le deseo (un |una )?(excelente|buen[oa]?|gran) (dia|tarde|noche)".to_string(),
                r"hasta luego".to_string(),
            ],
            farewell_window: 2,
        }
    }
}

/// Detects protocol phases over agent utterances and prohibited words over
/// the full token stream
pub struct ProtocolChecker {
    greeting: Vec<Regex>,
    identification: Vec<Regex>,
    farewell: Vec<Regex>,
    farewell_window: usize,
}

impl ProtocolChecker {
    pub fn new(config: &ProtocolConfig) -> Self {
        Self {
            greeting: compile(&config.greeting_patterns),
            identification: compile(&config.identification_patterns),
            farewell: compile(&config.farewell_patterns),
            farewell_window: config.farewell_window,
        }
    }

    /// Check one call against the interaction protocol
    ///
    /// Greeting and identification scan the whole call; the farewell only
    /// the agent's last `farewell_window` utterances. Prohibited-word
    /// detection is token-based and ignores the speaker. An empty
    /// utterance list yields MISSING for all three phases.
    pub fn check(&self, tokens: &[Token], utterances: &[Utterance]) -> ProtocolReport {
        let agent_texts: Vec<String> = utterances
            .iter()
            .filter(|u| u.speaker == Speaker::Agent)
            .map(|u| fold(&u.text))
            .collect();

        let greeting = agent_texts.iter().any(|t| matches_any(&self.greeting, t));
        let identification = agent_texts
            .iter()
            .any(|t| matches_any(&self.identification, t));

        let closing_start = agent_texts.len().saturating_sub(self.farewell_window);
        let farewell = agent_texts[closing_start..]
            .iter()
            .any(|t| matches_any(&self.farewell, t));

        let prohibited: Vec<String> = tokens
            .iter()
            .filter(|t| t.category == Category::Prohibited)
            .map(|t| t.lexeme.clone())
            .collect();

        debug!(
            "Protocol: greeting={}, identification={}, farewell={}, prohibited={}",
            greeting,
            identification,
            farewell,
            prohibited.len()
        );

        ProtocolReport {
            greeting: PhaseCheck::from_detection(greeting),
            identification: PhaseCheck::from_detection(identification),
            prohibited_words: ProhibitedCheck::from_lexemes(prohibited),
            farewell: PhaseCheck::from_detection(farewell),
        }
    }
}

impl Default for ProtocolChecker {
    fn default() -> Self {
        Self::new(&ProtocolConfig::default())
    }
}

fn compile(patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .collect()
}

fn matches_any(patterns: &[Regex], text: &str) -> bool {
    patterns.iter().any(|p| p.is_match(text))
}

/// Lowercase and strip diacritics: NFD, then drop combining marks
fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhaseStatus;

    fn agent(text: &str) -> Utterance {
        Utterance {
            speaker: Speaker::Agent,
            text: text.to_string(),
        }
    }

    fn customer(text: &str) -> Utterance {
        Utterance {
            speaker: Speaker::Customer,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_fold_strips_accents() {
        assert_eq!(fold("Buenos DÍAS, ¿qué tal?"), "buenos dias, ¿que tal?");
        assert_eq!(fold("número"), "numero");
    }

    #[test]
    fn test_greeting_and_farewell_detected() {
        let checker = ProtocolChecker::default();
        let utterances = vec![
            agent("Buenos días, bienvenido"),
            agent("¿algo más en lo que le pueda ayudar? hasta luego"),
        ];

        let report = checker.check(&[], &utterances);

        assert_eq!(report.greeting.status, PhaseStatus::Ok);
        assert_eq!(
            report.identification.status,
            PhaseStatus::Missing
        );
        assert_eq!(report.farewell.status, PhaseStatus::Ok);
    }

    #[test]
    fn test_farewell_outside_closing_window_is_missing() {
        let checker = ProtocolChecker::default();
        let utterances = vec![
            agent("hasta luego"),
            agent("un momento por favor"),
            agent("ya le confirmo"),
            agent("listo, quedo atento"),
        ];

        let report = checker.check(&[], &utterances);

        assert_eq!(report.farewell.status, PhaseStatus::Missing);
    }

    #[test]
    fn test_greeting_scans_the_whole_call() {
        let checker = ProtocolChecker::default();
        let utterances = vec![
            agent("un momento"),
            agent("ya reviso su caso"),
            agent("hola, disculpe la espera"),
        ];

        let report = checker.check(&[], &utterances);

        assert_eq!(report.greeting.status, PhaseStatus::Ok);
    }

    #[test]
    fn test_identification_request_detected_with_accents() {
        let checker = ProtocolChecker::default();
        let utterances = vec![agent("¿Me podría decir su nombre y número de documento?")];

        let report = checker.check(&[], &utterances);

        assert_eq!(report.identification.status, PhaseStatus::Ok);
    }

    #[test]
    fn test_customer_utterances_never_satisfy_phases() {
        let checker = ProtocolChecker::default();
        let utterances = vec![customer("hola, buenos días"), customer("hasta luego")];

        let report = checker.check(&[], &utterances);

        assert_eq!(report.greeting.status, PhaseStatus::Missing);
        assert_eq!(report.farewell.status, PhaseStatus::Missing);
    }

    #[test]
    fn test_prohibited_words_ignore_speaker() {
        let checker = ProtocolChecker::default();
        let tokens = vec![
            Token::known("hola", 0, Category::Greeting),
            Token::known("tonto", -2, Category::Prohibited),
            Token::known("inutil", -2, Category::Prohibited),
        ];

        let report = checker.check(&tokens, &[]);

        assert_eq!(
            report.prohibited_words.status,
            PhaseStatus::Detected
        );
        assert_eq!(
            report.prohibited_words.found,
            vec!["tonto".to_string(), "inutil".to_string()]
        );
    }

    #[test]
    fn test_empty_call_is_all_missing_and_clean() {
        let checker = ProtocolChecker::default();

        let report = checker.check(&[], &[]);

        assert_eq!(report.greeting.status, PhaseStatus::Missing);
        assert_eq!(
            report.identification.status,
            PhaseStatus::Missing
        );
        assert_eq!(report.farewell.status, PhaseStatus::Missing);
        assert!(report.prohibited_words.is_clean());
    }
}
