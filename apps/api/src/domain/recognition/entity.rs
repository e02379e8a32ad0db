use super::{
    detections::{CelebrityRecognition, FaceDetails, TextDetections},
    value_objects::RecognitionService,
};
use bytes::Bytes;
use serde::Serialize;
use std::fmt;
use ts_rs::TS;

pub const CELEBRITY_EMOJI: &str = "🎉";
pub const TEXT_EMOJI: &str = "📝";
pub const FACIAL_EMOJI: &str = "😀";

#[derive(Debug, Clone)]
pub struct RecognitionRequest {
    pub image_bytes: Bytes,
    pub service: RecognitionService,
}

/// Outcome of a single recognition call.
///
/// Only the first entry of a celebrity or face detection list is kept; text
/// keeps every fragment in the order the remote service returned them.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum RecognitionResult {
    CelebrityMatch {
        name: String,
        confidence: f32,
    },
    NoCelebrity,
    TextBlock {
        lines: Vec<String>,
    },
    NoText,
    FaceAttributes {
        age_low: i32,
        age_high: i32,
        gender: String,
        smiling: bool,
    },
    NoFace,
}

impl RecognitionResult {
    pub fn from_celebrities(response: CelebrityRecognition) -> Self {
        match response.celebrity_faces.into_iter().next() {
            Some(face) => Self::CelebrityMatch {
                name: face.name,
                confidence: face.match_confidence,
            },
            None => Self::NoCelebrity,
        }
    }

    pub fn from_text(response: TextDetections) -> Self {
        if response.text_detections.is_empty() {
            return Self::NoText;
        }
        Self::TextBlock {
            lines: response
                .text_detections
                .into_iter()
                .map(|detection| detection.detected_text)
                .collect(),
        }
    }

    pub fn from_faces(response: FaceDetails) -> Self {
        match response.face_details.into_iter().next() {
            Some(face) => Self::FaceAttributes {
                age_low: face.age_range.low,
                age_high: face.age_range.high,
                gender: face.gender.value,
                smiling: face.smile.value,
            },
            None => Self::NoFace,
        }
    }

    pub fn service(&self) -> RecognitionService {
        match self {
            Self::CelebrityMatch { .. } | Self::NoCelebrity => RecognitionService::Celebrity,
            Self::TextBlock { .. } | Self::NoText => RecognitionService::Text,
            Self::FaceAttributes { .. } | Self::NoFace => RecognitionService::FacialAnalysis,
        }
    }
}

impl fmt::Display for RecognitionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CelebrityMatch { name, confidence } => {
                write!(f, "{} {} ({:.2}%)", CELEBRITY_EMOJI, name, confidence)
            }
            Self::NoCelebrity => f.write_str("No celebrities detected"),
            Self::TextBlock { lines } => write!(f, "{} {}", TEXT_EMOJI, lines.join("\n")),
            Self::NoText => f.write_str("No text detected"),
            Self::FaceAttributes {
                age_low,
                age_high,
                gender,
                smiling,
            } => write!(
                f,
                "{} This person is {} to {} years old, {}, and {}",
                FACIAL_EMOJI,
                age_low,
                age_high,
                gender,
                if *smiling { "smiling" } else { "not smiling" }
            ),
            Self::NoFace => f.write_str("No faces detected"),
        }
    }
}
