pub mod analysis;
pub mod corrections;
pub mod distance;
pub mod error;
pub mod io;
pub mod lexicon;
pub mod models;
pub mod report;
pub mod spell;
pub mod stt;
pub mod tokenizer;

pub use analysis::{ProtocolChecker, ProtocolConfig};
pub use corrections::{apply_corrections, unknown_lexemes, Correction};
pub use distance::{hamming, hamming_with_padding, levenshtein};
pub use error::{AnalysisError, Result};
pub use io::{load_transcription, parse_transcription};
pub use lexicon::{LexiconEntry, LexiconStore};
pub use models::{
    Category, ComplianceReport, PhaseStatus, ProtocolReport, SentimentReport, Speaker, Token,
    Transcription, Utterance, Verdict,
};
pub use spell::{SpellOracle, WordlistOracle};
pub use stt::{transcribe_cached, AssemblyClient, AssemblyConfig};
pub use tokenizer::Tokenizer;
