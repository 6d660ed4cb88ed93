use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{ComplianceReport, ProtocolReport, SentimentReport};

/// Merge the two analysis results into the persisted compliance record
///
/// Pure restructuring, no computation. Identical inputs assemble to
/// byte-identical serialized reports.
pub fn assemble(sentiment: SentimentReport, protocol: ProtocolReport) -> ComplianceReport {
    ComplianceReport {
        sentiment_analysis: sentiment,
        protocol_analysis: protocol,
    }
}

/// Write a compliance report as pretty JSON, creating parent directories
pub fn write_json(report: &ComplianceReport, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, report).map_err(std::io::Error::other)?;
    info!("Report written to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{self, ProtocolChecker};
    use crate::models::{Category, Token, Utterance};

    #[test]
    fn test_assemble_is_idempotent() {
        let tokens = vec![
            Token::known("excelente", 2, Category::Other),
            Token::known("tonto", -2, Category::Prohibited),
        ];
        let utterances: Vec<Utterance> = vec![];
        let checker = ProtocolChecker::default();

        let first = assemble(
            analysis::score(&tokens),
            checker.check(&tokens, &utterances),
        );
        let second = assemble(
            analysis::score(&tokens),
            checker.check(&tokens, &utterances),
        );

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_wire_shape_has_two_top_level_keys() {
        let tokens = vec![Token::known("bien", 1, Category::Other)];
        let report = assemble(
            analysis::score(&tokens),
            ProtocolChecker::default().check(&tokens, &[]),
        );

        let value = serde_json::to_value(&report).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert!(object.contains_key("sentiment_analysis"));
        assert!(object.contains_key("protocol_analysis"));

        let protocol = object["protocol_analysis"].as_object().unwrap();
        for key in ["greeting", "identification", "prohibited_words", "farewell"] {
            assert!(protocol.contains_key(key), "missing {key}");
        }

        let sentiment = object["sentiment_analysis"].as_object().unwrap();
        assert_eq!(sentiment["sentiment"], "POSITIVE");
        assert_eq!(sentiment["score"], 1);
        assert_eq!(sentiment["most_negative"]["word"], "");
    }

    #[test]
    fn test_write_json_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outputs").join("report.json");
        let report = assemble(
            analysis::score(&[]),
            ProtocolChecker::default().check(&[], &[]),
        );

        write_json(&report, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: ComplianceReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report);
    }
}
