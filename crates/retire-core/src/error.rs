use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetireError {
    #[error("Computation fault: {context}")]
    ComputationFault { context: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RetireError {
    fn from(e: serde_json::Error) -> Self {
        RetireError::SerializationError(e.to_string())
    }
}
