use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-001";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generation API returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed generation response: {0}")]
    Decode(String),
    #[error("model returned no text ({reason})")]
    Empty { reason: String },
}

/// A hosted text-generation model.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generated text for `prompt`, unmodified.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

// generateContent request/response structures
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback", default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason", default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason", default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

/// Extract the first candidate's text from a generateContent response body.
pub fn parse_generated_text(body: &str) -> Result<String, GenerationError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::Decode(e.to_string()))?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .map(|r| format!("prompt blocked: {}", r))
            .unwrap_or_else(|| "no candidates".to_string());
        return Err(GenerationError::Empty { reason });
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate
            .finish_reason
            .map(|r| format!("finish reason: {}", r))
            .unwrap_or_else(|| "empty candidate".to_string());
        return Err(GenerationError::Empty { reason });
    }
    Ok(text)
}

pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// A missing key is sent as empty and rejected upstream.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.unwrap_or_default(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        info!(model = %self.model, prompt_chars = prompt.len(), "generating content");

        let request = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("generation request failed: {}", e);
                GenerationError::Transport(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or_else(|| body.trim().to_string());
            error!(status = status.as_u16(), "generation API error: {}", message);
            return Err(GenerationError::Status {
                status: status.as_u16(),
                message,
            });
        }

        parse_generated_text(&body).inspect_err(|e| error!("{}", e))
    }
}
