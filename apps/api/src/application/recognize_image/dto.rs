use crate::domain::recognition::{entity::RecognitionResult, value_objects::RecognitionService};
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RecognitionResponse {
    pub service: RecognitionService,
    pub result: RecognitionResult,
    /// Display string shown to the user.
    pub message: String,
}

impl From<RecognitionResult> for RecognitionResponse {
    fn from(result: RecognitionResult) -> Self {
        Self {
            service: result.service(),
            message: result.to_string(),
            result,
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ServiceOption {
    pub id: String,
    pub label: String,
}

impl From<RecognitionService> for ServiceOption {
    fn from(service: RecognitionService) -> Self {
        Self {
            id: service.id().to_string(),
            label: service.label().to_string(),
        }
    }
}
