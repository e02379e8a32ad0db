use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DomainError {
    #[error("Remote service error: {0}")]
    RemoteService(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Invalid service: {0}")]
    InvalidService(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Image exceeds the {0} byte limit")]
    ImageTooLarge(usize),
}
