use crate::domain::recognition::{
    entity::{RecognitionRequest, RecognitionResult},
    errors::DomainError,
    recognizer::RecognitionClient,
    value_objects::RecognitionService,
};
use bytes::Bytes;
use std::sync::Arc;

/// Routes an image to the selected remote operation and interprets the answer.
///
/// Remote failures are returned as-is; nothing is retried and no state is
/// kept between calls.
pub struct RecognizeImageUseCase {
    client: Arc<dyn RecognitionClient>,
}

impl RecognizeImageUseCase {
    pub fn new(client: Arc<dyn RecognitionClient>) -> Self {
        Self { client }
    }

    pub async fn execute(
        &self,
        request: RecognitionRequest,
    ) -> Result<RecognitionResult, DomainError> {
        let image = request.image_bytes.as_ref();
        let (result, detections) = match request.service {
            RecognitionService::Celebrity => {
                let response = self.client.recognize_celebrities(image).await?;
                let count = response.detection_count();
                (RecognitionResult::from_celebrities(response), count)
            }
            RecognitionService::Text => {
                let response = self.client.detect_text(image).await?;
                let count = response.detection_count();
                (RecognitionResult::from_text(response), count)
            }
            RecognitionService::FacialAnalysis => {
                let response = self.client.detect_faces(image).await?;
                let count = response.detection_count();
                (RecognitionResult::from_faces(response), count)
            }
        };

        tracing::info!(
            service = request.service.id(),
            image_bytes = image.len(),
            detections,
            "recognition complete"
        );

        Ok(result)
    }

    /// Runs the recognition and renders the display string.
    pub async fn recognize(
        &self,
        image_bytes: Bytes,
        service: RecognitionService,
    ) -> Result<String, DomainError> {
        let result = self
            .execute(RecognitionRequest {
                image_bytes,
                service,
            })
            .await?;
        Ok(result.to_string())
    }
}
