use async_trait::async_trait;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::error::{ModelAtlasError, Result};
use crate::models::{ModelRecord, model_list_schema};
use crate::transport::{GeminiContent, GeminiPart, GenerateRequest, GenerationConfig, Transport};
use crate::validation;

// Low temperature keeps the JSON output consistent across calls.
const SEARCH_TEMPERATURE: f32 = 0.2;
const SEARCH_MAX_OUTPUT_TOKENS: u32 = 4096;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelSearcher: Send + Sync {
    /// Resolves a free-text query into an ordered set of model records.
    async fn search(&self, query: &str) -> Result<Vec<ModelRecord>>;
}

pub struct GeminiSearcher {
    tx: Arc<dyn Transport>,
    model: String,
}

impl GeminiSearcher {
    pub fn new(tx: Arc<dyn Transport>, model: String) -> Self {
        Self { tx, model }
    }

    fn build_request(query: &str) -> GenerateRequest {
        let prompt = format!(
            "You are an AI model encyclopedia. Find AI models related to the query: \
             \"{query}\". For each model, provide all the requested details in the \
             JSON schema. Return a list of the most relevant models."
        );

        GenerateRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: SEARCH_TEMPERATURE,
                max_output_tokens: SEARCH_MAX_OUTPUT_TOKENS,
                response_mime_type: "application/json".to_string(),
                response_schema: model_list_schema(),
            },
        }
    }
}

#[async_trait]
impl ModelSearcher for GeminiSearcher {
    async fn search(&self, query: &str) -> Result<Vec<ModelRecord>> {
        let query = validation::validate_query(query)?;
        tracing::info!("Searching AI models for query: {}", query);

        let request = Self::build_request(&query);
        let response = self.tx.generate(&self.model, &request).await?;

        let Some(text) = response.first_text() else {
            return Err(ModelAtlasError::UpstreamFormat(
                "Gemini API returned no candidates".to_string(),
            ));
        };

        // An empty array is a valid "no results" answer. Anything that is
        // valid JSON but misses a required field rejects the whole set.
        let records: Vec<ModelRecord> = serde_json::from_str(text.trim()).map_err(|e| {
            ModelAtlasError::UpstreamFormat(format!(
                "Failed to deserialize model list JSON: {e}"
            ))
        })?;
        validation::validate_records(&records)?;

        tracing::info!("Query resolved to {} model records", records.len());
        Ok(records)
    }
}
