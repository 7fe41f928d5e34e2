use crate::error::{ModelAtlasError, Result};
use crate::models::ModelRecord;

const MAX_QUERY_LENGTH: usize = 512;

/// Trims and validates a search query before it reaches the Gemini call.
pub fn validate_query(query: &str) -> Result<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(ModelAtlasError::InvalidRequest(
            "Query is required".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_QUERY_LENGTH {
        return Err(ModelAtlasError::InvalidRequest(format!(
            "Query exceeds maximum length of {MAX_QUERY_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Rejects a result set wholesale if any record is unusable. Structurally
/// missing fields already fail deserialization; this catches records that
/// deserialized but carry a blank display title.
pub fn validate_records(records: &[ModelRecord]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(ModelAtlasError::UpstreamFormat(format!(
                "Record at index {index} has an empty name"
            )));
        }
    }
    Ok(())
}
