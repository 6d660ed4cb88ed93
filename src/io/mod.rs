pub mod input;

pub use input::{load_transcription, parse_transcription};
