use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::models::{Transcription, Utterance};

/// Configuration for the AssemblyAI transcription client
#[derive(Debug, Clone)]
pub struct AssemblyConfig {
    /// API key (from ASSEMBLYAI_API_KEY env var)
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Transcription language
    pub language_code: String,
    /// Delay between status polls
    pub poll_interval: Duration,
}

impl AssemblyConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ASSEMBLYAI_API_KEY")
            .context("ASSEMBLYAI_API_KEY environment variable not set")?;

        Ok(Self {
            api_key,
            base_url: "https://api.assemblyai.com".to_string(),
            language_code: "es".to_string(),
            poll_interval: Duration::from_secs(3),
        })
    }
}

/// AssemblyAI transcription+diarization client
pub struct AssemblyClient {
    client: Client,
    config: AssemblyConfig,
}

impl AssemblyClient {
    pub fn new(config: AssemblyConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Transcribe and diarize one audio file
    ///
    /// Uploads the audio, creates a transcription job with speaker labels,
    /// then polls until the job completes or fails.
    pub async fn transcribe(&self, audio_path: &Path) -> Result<Transcription> {
        let audio_url = self.upload(audio_path).await?;
        let job_id = self.create_job(&audio_url).await?;
        info!("Transcription job {} created", job_id);
        self.poll_job(&job_id).await
    }

    async fn upload(&self, audio_path: &Path) -> Result<String> {
        let bytes = std::fs::read(audio_path)
            .with_context(|| format!("Failed to read audio file: {:?}", audio_path))?;

        let response = self
            .client
            .post(format!("{}/v2/upload", self.config.base_url))
            .header("authorization", &self.config.api_key)
            .body(bytes)
            .send()
            .await
            .context("Failed to upload audio to AssemblyAI")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("AssemblyAI upload error: {} - {}", status, body);
        }

        let upload: UploadResponse = response
            .json()
            .await
            .context("Failed to parse upload response")?;
        Ok(upload.upload_url)
    }

    async fn create_job(&self, audio_url: &str) -> Result<String> {
        let request = TranscriptRequest {
            audio_url: audio_url.to_string(),
            speaker_labels: true,
            language_code: self.config.language_code.clone(),
        };

        let response = self
            .client
            .post(format!("{}/v2/transcript", self.config.base_url))
            .header("authorization", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to create transcription job")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("AssemblyAI transcript error: {} - {}", status, body);
        }

        let job: TranscriptJob = response
            .json()
            .await
            .context("Failed to parse transcript job response")?;
        Ok(job.id)
    }

    async fn poll_job(&self, job_id: &str) -> Result<Transcription> {
        loop {
            let response = self
                .client
                .get(format!("{}/v2/transcript/{}", self.config.base_url, job_id))
                .header("authorization", &self.config.api_key)
                .send()
                .await
                .context("Failed to poll transcription job")?;

            let job: TranscriptJob = response
                .json()
                .await
                .context("Failed to parse transcript status")?;

            match job.status.as_str() {
                "completed" => {
                    let transcription = Transcription {
                        text: job.text.unwrap_or_default(),
                        utterances: job.utterances.unwrap_or_default(),
                    };
                    if transcription.is_empty() {
                        return Err(AnalysisError::MissingCollaboratorData(format!(
                            "transcription job {} completed with no text or utterances",
                            job_id
                        ))
                        .into());
                    }
                    return Ok(transcription);
                }
                "error" => {
                    anyhow::bail!(
                        "Transcription failed: {}",
                        job.error.unwrap_or_else(|| "unknown error".to_string())
                    );
                }
                status => {
                    debug!("Job {} still {}", job_id, status);
                    tokio::time::sleep(self.config.poll_interval).await;
                }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Debug, Serialize)]
struct TranscriptRequest {
    audio_url: String,
    speaker_labels: bool,
    language_code: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptJob {
    id: String,
    status: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    utterances: Option<Vec<Utterance>>,
    #[serde(default)]
    error: Option<String>,
}
