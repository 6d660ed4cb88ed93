use serde::{Deserialize, Serialize};

/// Which side of the call a turn belongs to
///
/// Diarization labels the agent channel "A"; every other label is treated
/// as the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Speaker {
    Agent,
    Customer,
}

impl From<String> for Speaker {
    fn from(label: String) -> Self {
        if label == "A" {
            Speaker::Agent
        } else {
            Speaker::Customer
        }
    }
}

impl From<Speaker> for String {
    fn from(speaker: Speaker) -> Self {
        match speaker {
            Speaker::Agent => "A",
            Speaker::Customer => "B",
        }
        .to_string()
    }
}

/// One speaker turn with attributed text, supplied by the transcription
/// collaborator and read-only to the analysis core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
    pub speaker: Speaker,
    pub text: String,
}

/// A diarized transcript: full text plus speaker-attributed turns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcription {
    /// Concatenated transcript text (tokenizer input)
    #[serde(default)]
    pub text: String,
    /// Speaker turns in call order (protocol checker input)
    #[serde(default)]
    pub utterances: Vec<Utterance>,
}

impl Transcription {
    /// Whether the collaborator supplied anything to analyze
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.utterances.is_empty()
    }
}
