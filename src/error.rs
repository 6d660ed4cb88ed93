use std::path::PathBuf;

/// Errors produced by the analysis pipeline and its persistence layer
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The persisted lexicon exists but cannot be parsed
    #[error("corrupt lexicon at {path:?}: {source}")]
    CorruptLexicon {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A caller-supplied value is outside its documented domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Transcript text or utterances are absent where required
    #[error("missing collaborator data: {0}")]
    MissingCollaboratorData(String),

    /// A lexicon save did not reach disk; the correction batch is not durable
    #[error("failed to persist lexicon to {path:?}")]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
