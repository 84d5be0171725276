//! Gemini `generateContent` client.
//!
//! # Invariants
//! - The api key travels in a request header, never in the URL or logs.
//! - Responses without text decode to an empty string.

use crate::assist::{AssistError, TextGenerator};
use crate::config::TextGenerationConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-goog-api-key";

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

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// HTTP-backed `TextGenerator`.
pub struct GeminiTextGenerator {
    client: reqwest::Client,
    config: TextGenerationConfig,
}

impl GeminiTextGenerator {
    pub fn new(config: TextGenerationConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|_| reqwest::Client::new());
        Self { client, config }
    }

    /// `{endpoint}/models/{model}:generateContent`.
    pub fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AssistError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AssistError::MissingApiKey)?;
        let body = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.request_url())
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AssistError::Status(response.status().as_u16()));
        }

        let decoded: GenerateContentResponse = response.json().await?;
        Ok(decoded.text())
    }
}

#[cfg(test)]
mod tests {
    use super::{GeminiTextGenerator, GenerateContentRequest, GenerateContentResponse};
    use super::{RequestContent, RequestPart, API_KEY_HEADER};
    use crate::assist::{AssistError, TextGenerator};
    use crate::config::TextGenerationConfig;

    #[test]
    fn request_body_matches_generate_content_shape() {
        let body = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: "hello" }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn response_text_joins_first_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "Hello, "}, {"text": "world."}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text(), "Hello, world.");
    }

    #[test]
    fn response_without_candidates_is_empty_text() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(response.text(), "");
    }

    #[test]
    fn request_url_uses_configured_model() {
        let mut config = TextGenerationConfig::default();
        config.endpoint = "https://example.test/v1beta/".to_string();
        config.model = "m-1".to_string();
        let generator = GeminiTextGenerator::new(config);
        assert_eq!(
            generator.request_url(),
            "https://example.test/v1beta/models/m-1:generateContent"
        );
    }

    #[test]
    fn api_key_stays_out_of_request_url() {
        let mut config = TextGenerationConfig::default();
        config.api_key = Some("secret-key".to_string());
        let url = GeminiTextGenerator::new(config).request_url();
        assert!(!url.contains("secret-key"));
        assert!(!url.contains("key="));
        assert_eq!(API_KEY_HEADER, "x-goog-api-key");
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let generator = GeminiTextGenerator::new(TextGenerationConfig::default());
        let err = generator.generate("prompt").await.unwrap_err();
        assert!(matches!(err, AssistError::MissingApiKey));
    }
}
