use super::{
    detections::{CelebrityRecognition, FaceDetails, TextDetections},
    errors::DomainError,
};
use async_trait::async_trait;

/// The remote computer-vision operations. Each call takes the raw image bytes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecognitionClient: Send + Sync {
    async fn recognize_celebrities(
        &self,
        image: &[u8],
    ) -> Result<CelebrityRecognition, DomainError>;

    async fn detect_text(&self, image: &[u8]) -> Result<TextDetections, DomainError>;

    /// Requests the full facial attribute set.
    async fn detect_faces(&self, image: &[u8]) -> Result<FaceDetails, DomainError>;
}
