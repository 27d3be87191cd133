use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Failed to parse climate records from JSON")]
    JsonParse(#[from] serde_json::Error),
}
