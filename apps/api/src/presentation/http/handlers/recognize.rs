use crate::{
    application::recognize_image::{
        dto::{RecognitionResponse, ServiceOption},
        use_case::RecognizeImageUseCase,
    },
    domain::recognition::value_objects::{ImageUpload, RecognitionService},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Multipart, State},
};

pub async fn list_services() -> Json<Vec<ServiceOption>> {
    Json(RecognitionService::ALL.into_iter().map(Into::into).collect())
}

pub async fn recognize_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<RecognitionResponse>, AppError> {
    let mut image = None;
    let mut service = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name().unwrap_or("") {
            "image" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                image = Some((file_name, field.bytes().await?));
            }
            "service" => service = Some(field.text().await?),
            _ => {}
        }
    }

    let service: RecognitionService = service
        .ok_or_else(|| AppError::BadRequest("Missing service".into()))?
        .parse()?;
    let (file_name, bytes) = image.ok_or_else(|| AppError::BadRequest("Missing image".into()))?;
    let upload = ImageUpload::new(file_name, bytes, state.config.max_image_bytes)?;

    tracing::debug!(
        service = service.id(),
        file_name = %upload.file_name,
        image_bytes = upload.bytes.len(),
        "forwarding upload"
    );

    let result = RecognizeImageUseCase::new(state.recognizer.clone())
        .execute(upload.into_request(service))
        .await?;

    Ok(Json(result.into()))
}
