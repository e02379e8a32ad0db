//! Typed responses of the remote recognition operations.
//!
//! Field names follow the remote service's JSON schema. Every field is
//! required, so a payload missing one fails to deserialize instead of
//! producing a partial detection.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CelebrityRecognition {
    pub celebrity_faces: Vec<CelebrityFace>,
}

impl CelebrityRecognition {
    pub fn detection_count(&self) -> usize {
        self.celebrity_faces.len()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CelebrityFace {
    pub name: String,
    /// 0-100.
    pub match_confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextDetections {
    pub text_detections: Vec<TextDetection>,
}

impl TextDetections {
    pub fn detection_count(&self) -> usize {
        self.text_detections.len()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextDetection {
    pub detected_text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceDetails {
    pub face_details: Vec<FaceDetail>,
}

impl FaceDetails {
    pub fn detection_count(&self) -> usize {
        self.face_details.len()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceDetail {
    pub age_range: AgeRange,
    pub gender: Gender,
    pub smile: Smile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AgeRange {
    pub low: i32,
    pub high: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Gender {
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Smile {
    pub value: bool,
}
