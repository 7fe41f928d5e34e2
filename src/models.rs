use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// One AI model's encyclopedia entry, as returned by a search.
///
/// All six fields are required on the wire; a JSON object missing any of
/// them fails deserialization, which rejects the whole response set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    /// Display title of the model.
    pub name: String,
    /// One-sentence summary for the card view.
    pub description: String,
    /// Detailed paragraph for the detail page.
    pub long_description: String,
    /// Primary function or category, free-form (e.g. "Text Generation").
    pub primary_function: String,
    /// Official URL or homepage.
    pub website_url: String,
    /// Pricing structure; opaque text matched case-insensitively by filters.
    pub pricing_model: String,
}

/// JSON schema for the Gemini structured-output contract: an array of
/// model entries with all six fields required.
pub fn model_list_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "The name of the AI model."
                },
                "description": {
                    "type": "string",
                    "description": "A brief, one-sentence summary of the AI model's capabilities for a card view."
                },
                "longDescription": {
                    "type": "string",
                    "description": "A detailed paragraph describing the model, its features, and common use cases for a detail page."
                },
                "primaryFunction": {
                    "type": "string",
                    "description": "The primary function or category of the model (e.g., Text Generation, Image Generation, Code Generation)."
                },
                "websiteUrl": {
                    "type": "string",
                    "description": "The official URL or homepage for the AI model."
                },
                "pricingModel": {
                    "type": "string",
                    "description": "The pricing structure. Common values are 'Free', 'Freemium', 'Subscription', or 'One-time Purchase'."
                }
            },
            "required": [
                "name",
                "description",
                "longDescription",
                "primaryFunction",
                "websiteUrl",
                "pricingModel"
            ]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_record_round_trips_camel_case() {
        let raw = r#"{
            "name": "T1",
            "description": "d",
            "longDescription": "ld",
            "primaryFunction": "Translation",
            "websiteUrl": "https://t1.example",
            "pricingModel": "Free"
        }"#;
        let record: ModelRecord = serde_json::from_str(raw).expect("valid record");
        assert_eq!(record.long_description, "ld");
        assert_eq!(record.pricing_model, "Free");

        let back = serde_json::to_value(&record).expect("serializable");
        assert_eq!(back["longDescription"], "ld");
        assert_eq!(back["websiteUrl"], "https://t1.example");
    }

    #[test]
    fn test_model_record_rejects_missing_field() {
        // No pricingModel.
        let raw = r#"{
            "name": "T1",
            "description": "d",
            "longDescription": "ld",
            "primaryFunction": "Translation",
            "websiteUrl": "https://t1.example"
        }"#;
        assert!(serde_json::from_str::<ModelRecord>(raw).is_err());
    }

    #[test]
    fn test_schema_names_all_required_fields() {
        let schema = model_list_schema();
        let required = schema["items"]["required"]
            .as_array()
            .expect("required list");
        assert_eq!(required.len(), 6);
        for field in [
            "name",
            "description",
            "longDescription",
            "primaryFunction",
            "websiteUrl",
            "pricingModel",
        ] {
            assert!(required.iter().any(|v| v == field), "missing {field}");
        }
    }
}
