use super::{entity::RecognitionRequest, errors::DomainError};
use bytes::Bytes;
use image::ImageFormat;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use ts_rs::TS;
use validator::Validate;

lazy_static! {
    static ref IMAGE_FILE_NAME_REGEX: regex::Regex =
        regex::Regex::new(r"(?i)\.(jpe?g|png)$").unwrap();
}

/// The remote recognition operations a user can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecognitionService {
    Celebrity,
    Text,
    FacialAnalysis,
}

impl RecognitionService {
    /// Options in the order the selector presents them.
    pub const ALL: [RecognitionService; 3] = [
        RecognitionService::Celebrity,
        RecognitionService::Text,
        RecognitionService::FacialAnalysis,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Celebrity => "celebrity",
            Self::Text => "text",
            Self::FacialAnalysis => "facial_analysis",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Celebrity => "Celebrity",
            Self::Text => "Text",
            Self::FacialAnalysis => "Facial Analysis",
        }
    }
}

impl fmt::Display for RecognitionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RecognitionService {
    type Err = DomainError;

    /// Accepts labels and ids alike: case is ignored, as are spaces, `_` and `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "celebrity" => Ok(Self::Celebrity),
            "text" => Ok(Self::Text),
            "facialanalysis" => Ok(Self::FacialAnalysis),
            _ => Err(DomainError::InvalidService(s.trim().to_string())),
        }
    }
}

/// An uploaded image that passed local checks and may be forwarded.
#[derive(Debug, Clone, Validate)]
pub struct ImageUpload {
    #[validate(regex(path = *IMAGE_FILE_NAME_REGEX))]
    pub file_name: String,
    pub bytes: Bytes,
}

impl ImageUpload {
    pub fn new(file_name: String, bytes: Bytes, max_bytes: usize) -> Result<Self, DomainError> {
        let upload = Self { file_name, bytes };

        if upload.validate().is_err() {
            return Err(DomainError::ValidationError(format!(
                "Unsupported file type '{}', expected jpg, jpeg or png",
                upload.file_name
            )));
        }

        if upload.bytes.is_empty() {
            return Err(DomainError::ValidationError("Image is empty".into()));
        }

        if upload.bytes.len() > max_bytes {
            return Err(DomainError::ImageTooLarge(max_bytes));
        }

        match image::guess_format(&upload.bytes) {
            Ok(ImageFormat::Jpeg | ImageFormat::Png) => Ok(upload),
            _ => Err(DomainError::ValidationError(
                "Image content must be JPEG or PNG".into(),
            )),
        }
    }

    pub fn into_request(self, service: RecognitionService) -> RecognitionRequest {
        RecognitionRequest {
            image_bytes: self.bytes,
            service,
        }
    }
}
