use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

use crate::error::{ModelAtlasError, Result};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// One `generateContent` call to the Gemini API.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    pub role: String,
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema")]
    pub response_schema: Value,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    pub content: GeminiContent,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if the API returned one.
    pub fn first_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text = candidate
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<String>();
        Some(text)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn generate(&self, model: &str, req: &GenerateRequest) -> Result<GenerateResponse>;
}

pub struct GeminiTransport {
    client: Client,
    api_key: String,
}

impl GeminiTransport {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl Transport for GeminiTransport {
    /// Single attempt, no retries: a failed search is terminal and the
    /// caller reports it to the user.
    async fn generate(&self, model: &str, req: &GenerateRequest) -> Result<GenerateResponse> {
        let url = format!("{GEMINI_API_BASE}/{model}:generateContent");

        // The key travels as a query parameter; it must never appear in
        // logs or error strings.
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(req)
            .send()
            .await
            .map_err(|e| {
                ModelAtlasError::UpstreamUnavailable(format!(
                    "Failed to reach the Gemini API: {}",
                    e.without_url()
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ModelAtlasError::UpstreamUnavailable(format!(
                "Gemini API returned HTTP {status}"
            )));
        }

        response.json().await.map_err(|e| {
            ModelAtlasError::UpstreamFormat(format!(
                "Failed to parse Gemini API response: {}",
                e.without_url()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::model_list_schema;

    fn request_with_prompt(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.2,
                max_output_tokens: 4096,
                response_mime_type: "application/json".to_string(),
                response_schema: model_list_schema(),
            },
        }
    }

    #[test]
    fn test_request_serializes_camel_case_config() {
        let req = request_with_prompt("find translation models");
        let value = serde_json::to_value(&req).expect("serializable");
        let config = &value["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["maxOutputTokens"], 4096);
        assert_eq!(config["responseSchema"]["type"], "array");
    }

    #[test]
    fn test_first_text_joins_parts() {
        let response = GenerateResponse {
            candidates: vec![GeminiCandidate {
                content: GeminiContent {
                    role: "model".to_string(),
                    parts: vec![
                        GeminiPart {
                            text: "[{\"name\":".to_string(),
                        },
                        GeminiPart {
                            text: "\"T1\"}]".to_string(),
                        },
                    ],
                },
            }],
        };
        assert_eq!(
            response.first_text().as_deref(),
            Some("[{\"name\":\"T1\"}]")
        );
    }

    #[test]
    fn test_first_text_empty_candidates() {
        let response: GenerateResponse =
            serde_json::from_str("{}").expect("missing candidates defaults to empty");
        assert!(response.first_text().is_none());
    }
}
