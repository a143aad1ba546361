use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstateCalcError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for EstateCalcError {
    fn from(e: serde_json::Error) -> Self {
        EstateCalcError::SerializationError(e.to_string())
    }
}
