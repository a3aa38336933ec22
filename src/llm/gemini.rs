use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::{LlmError, TextGenerator};
use crate::config::GeminiConfig;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for the `generateContent` endpoint
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn error_message(body: &str) -> String {
        serde_json::from_str::<GenerateContentResponse>(body)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| body.trim().to_string(), |e| e.message)
    }

    fn extract_text(response: GenerateContentResponse) -> Result<String> {
        let text: String = response
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(LlmError::EmptyResponse.into());
        }
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.config.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                response_mime_type: "application/json",
            },
        };

        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read Gemini response")?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(LlmError::from_status(status, Self::error_message(&body)).into());
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).context("Failed to decode Gemini response")?;

        if let Some(err) = parsed.error {
            return Err(LlmError::Unknown(err.message).into());
        }

        let text = Self::extract_text(parsed)?;
        debug!(response_len = text.len(), "Received Gemini response");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = GeminiConfig::new("key")
            .with_base_url("http://localhost:9999/v1beta/")
            .with_model("gemini-test");
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: "hello" }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.5,
                response_mime_type: "application/json",
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(GeminiClient::extract_text(response).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_extract_text_rejects_empty_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        let err = GeminiClient::extract_text(response).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LlmError>(),
            Some(&LlmError::EmptyResponse)
        );
    }

    #[test]
    fn test_error_message_prefers_api_body() {
        assert_eq!(
            GeminiClient::error_message(r#"{"error":{"message":"API key not valid"}}"#),
            "API key not valid"
        );
        assert_eq!(GeminiClient::error_message("plain text"), "plain text");
    }
}
