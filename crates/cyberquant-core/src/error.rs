use thiserror::Error;

/// Errors that can occur during risk quantification
#[derive(Error, Debug)]
pub enum RiskQuantError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RiskQuantError {
    fn from(err: serde_json::Error) -> Self {
        RiskQuantError::SerializationError(err.to_string())
    }
}
