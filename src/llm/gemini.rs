use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::LlmSettings;
use crate::llm::client::{GenerationResult, TextGenerator};
use crate::llm::error::GenerationError;

const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(settings: &LlmSettings) -> Result<Self, GenerationError> {
        let api_key = settings.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(GenerationError::missing_api_key());
        }

        let model = if settings.model.trim().is_empty() {
            DEFAULT_GEMINI_MODEL.to_string()
        } else {
            settings.model.trim().to_string()
        };

        let endpoint = if settings.endpoint.trim().is_empty() {
            DEFAULT_GEMINI_ENDPOINT.to_string()
        } else {
            settings.endpoint.trim().trim_end_matches('/').to_string()
        };

        let mut builder = Client::builder();
        if settings.timeout_secs > 0 {
            builder = builder.timeout(std::time::Duration::from_secs(settings.timeout_secs));
        }
        let http = builder.build().map_err(|e| {
            GenerationError::network(format!("Failed to build Gemini HTTP client: {}", e))
        })?;

        Ok(Self {
            http,
            api_key,
            model,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> GenerationResult {
        let body = GeminiGenerateContentRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Sending Gemini request");

        let response = self
            .http
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            // without_url keeps the API key out of the message
            .map_err(|e| {
                GenerationError::network(format!("Gemini request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<GeminiErrorResponse>(&raw)
                .map(|e| e.error.message)
                .unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Gemini returned an error status");
            return Err(GenerationError::from_status(status.as_u16(), &detail));
        }

        let raw = response.text().await.map_err(|e| {
            GenerationError::network(format!(
                "Failed to read Gemini response: {}",
                e.without_url()
            ))
        })?;

        let payload: GeminiGenerateContentResponse = serde_json::from_str(&raw).map_err(|e| {
            GenerationError::malformed(format!("Failed to parse Gemini response: {}", e))
        })?;

        // The reply may be split across parts of the first candidate.
        let joined: String = payload
            .candidates
            .iter()
            .find_map(|c| c.content.as_ref())
            .map(|c| c.parts.iter().filter_map(|p| p.text.as_deref()).collect())
            .unwrap_or_default();

        let text = joined.trim();
        if text.is_empty() {
            return Err(GenerationError::empty());
        }
        let text = text.to_string();

        tracing::debug!(response_len = text.len(), "Gemini request succeeded");

        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Serialize)]
struct GeminiGenerateContentRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiGenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContentResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    #[serde(default)]
    message: String,
}
