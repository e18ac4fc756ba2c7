use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error("{scale}: no response for item '{item_id}'")]
    MissingResponse { scale: String, item_id: String },

    #[error("{scale}: item '{item_id}' score {value} is invalid ({message})")]
    InvalidResponse {
        scale: String,
        item_id: String,
        value: f64,
        message: String,
    },

    #[error("{scale}: unknown item '{item_id}'")]
    UnknownItem { scale: String, item_id: String },
}

impl ScoringError {
    /// Item the error refers to, if any.
    pub fn item_id(&self) -> Option<&str> {
        match self {
            ScoringError::UnknownScale(_) => None,
            ScoringError::MissingResponse { item_id, .. }
            | ScoringError::InvalidResponse { item_id, .. }
            | ScoringError::UnknownItem { item_id, .. } => Some(item_id),
        }
    }
}
