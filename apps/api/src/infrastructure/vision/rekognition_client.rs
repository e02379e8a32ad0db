use crate::domain::recognition::{
    detections::{
        AgeRange, CelebrityFace, CelebrityRecognition, FaceDetail, FaceDetails, Gender, Smile,
        TextDetection, TextDetections,
    },
    errors::DomainError,
    recognizer::RecognitionClient,
};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_rekognition::{
    Client,
    error::DisplayErrorContext,
    primitives::Blob,
    types::{Attribute, Image},
};

pub struct RekognitionClient {
    client: Client,
}

impl RekognitionClient {
    /// Builds a client from the default AWS configuration chain.
    ///
    /// `region`, `endpoint_url` and the static `credentials` pair override
    /// what the chain would otherwise resolve.
    pub async fn new(
        region: Option<String>,
        endpoint_url: Option<String>,
        credentials: Option<(String, String)>,
    ) -> anyhow::Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        if let Some(endpoint) = endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        if let Some((key, secret)) = credentials {
            loader = loader.credentials_provider(Credentials::new(
                key,
                secret,
                None,
                None,
                "recognition-api",
            ));
        }

        let shared = loader.load().await;
        if shared.region().is_none() {
            anyhow::bail!("No AWS region configured, set AWS_REGION");
        }

        Ok(Self::from_client(Client::new(&shared)))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

fn image_of(bytes: &[u8]) -> Image {
    Image::builder().bytes(Blob::new(bytes.to_vec())).build()
}

fn remote_error<E>(operation: &str, err: E) -> DomainError
where
    E: std::error::Error + 'static,
{
    let detail = DisplayErrorContext(&err).to_string();
    tracing::warn!(operation, error = %detail, "rekognition call failed");
    DomainError::RemoteService(format!("{} failed: {}", operation, detail))
}

fn required<T>(value: Option<T>, field: &str, index: usize) -> Result<T, DomainError> {
    value.ok_or_else(|| {
        DomainError::MalformedResponse(format!("{} missing on detection {}", field, index))
    })
}

#[async_trait]
impl RecognitionClient for RekognitionClient {
    async fn recognize_celebrities(
        &self,
        image: &[u8],
    ) -> Result<CelebrityRecognition, DomainError> {
        let output = self
            .client
            .recognize_celebrities()
            .image(image_of(image))
            .send()
            .await
            .map_err(|e| remote_error("RecognizeCelebrities", e))?;

        let celebrity_faces = output
            .celebrity_faces()
            .iter()
            .enumerate()
            .map(|(i, celebrity)| {
                Ok(CelebrityFace {
                    name: required(celebrity.name(), "Name", i)?.to_string(),
                    match_confidence: required(celebrity.match_confidence(), "MatchConfidence", i)?,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(CelebrityRecognition { celebrity_faces })
    }

    async fn detect_text(&self, image: &[u8]) -> Result<TextDetections, DomainError> {
        let output = self
            .client
            .detect_text()
            .image(image_of(image))
            .send()
            .await
            .map_err(|e| remote_error("DetectText", e))?;

        let text_detections = output
            .text_detections()
            .iter()
            .enumerate()
            .map(|(i, detection)| {
                Ok(TextDetection {
                    detected_text: required(detection.detected_text(), "DetectedText", i)?
                        .to_string(),
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(TextDetections { text_detections })
    }

    async fn detect_faces(&self, image: &[u8]) -> Result<FaceDetails, DomainError> {
        let output = self
            .client
            .detect_faces()
            .image(image_of(image))
            .attributes(Attribute::All)
            .send()
            .await
            .map_err(|e| remote_error("DetectFaces", e))?;

        let face_details = output
            .face_details()
            .iter()
            .enumerate()
            .map(|(i, face)| {
                let age_range = required(face.age_range(), "AgeRange", i)?;
                let gender = required(face.gender().and_then(|g| g.value()), "Gender.Value", i)?;
                Ok(FaceDetail {
                    age_range: AgeRange {
                        low: required(age_range.low(), "AgeRange.Low", i)?,
                        high: required(age_range.high(), "AgeRange.High", i)?,
                    },
                    gender: Gender {
                        value: gender.as_str().to_string(),
                    },
                    // The SDK reads an absent Smile.Value as false.
                    smile: Smile {
                        value: required(face.smile(), "Smile", i)?.value(),
                    },
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(FaceDetails { face_details })
    }
}
