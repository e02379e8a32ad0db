use super::helpers::{
    Script, assert_status, expect_status, fixture, read_json, read_text, recognize_request, send,
    spawn_app, spawn_app_with_limit, tiny_png_bytes,
};
use axum::http::StatusCode;
use recognition_api::domain::recognition::errors::DomainError;
use serde_json::Value;

#[tokio::test]
async fn celebrity_upload_reports_first_match_only() {
    let app = spawn_app(Script::Celebrities(fixture(
        r#"{"CelebrityFaces":[
            {"Name":"Ada Lovelace","MatchConfidence":97.345},
            {"Name":"Charles Babbage","MatchConfidence":99.9}
        ]}"#,
    )));
    let png = tiny_png_bytes();

    let res = send(
        &app.app,
        recognize_request(Some("Celebrity"), Some(("ada.png", png.as_slice()))),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["message"], "🎉 Ada Lovelace (97.35%)");
    assert_eq!(body["service"], "celebrity");
    assert_eq!(body["result"]["kind"], "celebrity_match");
    assert_eq!(body["result"]["name"], "Ada Lovelace");
    assert_eq!(app.recognizer.calls(), ["RecognizeCelebrities"]);
}

#[tokio::test]
async fn no_celebrity_is_a_normal_result() {
    let app = spawn_app(Script::Celebrities(fixture(r#"{"CelebrityFaces":[]}"#)));
    let png = tiny_png_bytes();

    let res = send(
        &app.app,
        recognize_request(Some("celebrity"), Some(("crowd.png", png.as_slice()))),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["message"], "No celebrities detected");
    assert_eq!(body["result"]["kind"], "no_celebrity");
}

#[tokio::test]
async fn text_upload_joins_fragments_in_order() {
    let app = spawn_app(Script::Text(fixture(
        r#"{"TextDetections":[
            {"DetectedText":"CLOSED ON"},
            {"DetectedText":"SUNDAYS"},
            {"DetectedText":"CLOSED"}
        ]}"#,
    )));
    let png = tiny_png_bytes();

    let res = send(
        &app.app,
        recognize_request(Some("Text"), Some(("sign.PNG", png.as_slice()))),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["message"], "📝 CLOSED ON\nSUNDAYS\nCLOSED");
    assert_eq!(
        body["result"]["lines"],
        serde_json::json!(["CLOSED ON", "SUNDAYS", "CLOSED"])
    );
    assert_eq!(app.recognizer.calls(), ["DetectText"]);
}

#[tokio::test]
async fn text_upload_without_detections_says_so() {
    let app = spawn_app(Script::Text(fixture(r#"{"TextDetections":[]}"#)));
    let png = tiny_png_bytes();

    let res = send(
        &app.app,
        recognize_request(Some("Text"), Some(("blank.png", png.as_slice()))),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["message"], "No text detected");
}

#[tokio::test]
async fn facial_analysis_describes_first_face() {
    let app = spawn_app(Script::Faces(fixture(
        r#"{"FaceDetails":[
            {"AgeRange":{"Low":25,"High":34},"Gender":{"Value":"Female"},"Smile":{"Value":false}},
            {"AgeRange":{"Low":50,"High":60},"Gender":{"Value":"Male"},"Smile":{"Value":true}}
        ]}"#,
    )));
    let png = tiny_png_bytes();

    let res = send(
        &app.app,
        recognize_request(Some("Facial Analysis"), Some(("portrait.png", png.as_slice()))),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(
        body["message"],
        "😀 This person is 25 to 34 years old, Female, and not smiling"
    );
    assert_eq!(body["service"], "facial_analysis");
    assert_eq!(body["result"]["smiling"], false);
    assert_eq!(app.recognizer.calls(), ["DetectFaces"]);
}

#[tokio::test]
async fn no_face_is_a_normal_result() {
    let app = spawn_app(Script::Faces(fixture(r#"{"FaceDetails":[]}"#)));
    let png = tiny_png_bytes();

    let res = send(
        &app.app,
        recognize_request(Some("facial_analysis"), Some(("landscape.png", png.as_slice()))),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["message"], "No faces detected");
}

#[tokio::test]
async fn unknown_service_is_rejected_before_remote_call() {
    let app = spawn_app(Script::Celebrities(fixture(r#"{"CelebrityFaces":[]}"#)));
    let png = tiny_png_bytes();

    let res = send(
        &app.app,
        recognize_request(Some("Landmarks"), Some(("photo.png", png.as_slice()))),
    )
    .await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    let text = read_text(res).await;

    assert!(text.contains("Landmarks"), "unexpected body: {text}");
    assert!(app.recognizer.calls().is_empty());
}

#[tokio::test]
async fn missing_parts_are_bad_requests() {
    let app = spawn_app(Script::Text(fixture(r#"{"TextDetections":[]}"#)));
    let png = tiny_png_bytes();

    let res = send(&app.app, recognize_request(Some("Text"), None)).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    assert!(read_text(res).await.contains("Missing image"));

    let res = send(&app.app, recognize_request(None, Some(("photo.png", png.as_slice())))).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    assert!(read_text(res).await.contains("Missing service"));

    assert!(app.recognizer.calls().is_empty());
}

#[tokio::test]
async fn non_image_uploads_never_reach_remote_service() {
    let app = spawn_app(Script::Text(fixture(r#"{"TextDetections":[]}"#)));
    let png = tiny_png_bytes();

    let res = send(
        &app.app,
        recognize_request(Some("Text"), Some(("notes.txt", png.as_slice()))),
    )
    .await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);

    let res = send(
        &app.app,
        recognize_request(Some("Text"), Some(("photo.png", &b"not an image"[..]))),
    )
    .await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    assert!(read_text(res).await.contains("JPEG or PNG"));

    assert!(app.recognizer.calls().is_empty());
}

#[tokio::test]
async fn image_over_configured_limit_is_payload_too_large() {
    let app = spawn_app_with_limit(Script::Text(fixture(r#"{"TextDetections":[]}"#)), 32);
    let png = tiny_png_bytes();
    assert!(png.len() > 32);

    let res = send(
        &app.app,
        recognize_request(Some("Text"), Some(("photo.png", png.as_slice()))),
    )
    .await;
    assert_status(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "Image is too large");
    assert!(app.recognizer.calls().is_empty());
}

#[tokio::test]
async fn body_over_transport_limit_is_payload_too_large() {
    let app = spawn_app_with_limit(Script::Text(fixture(r#"{"TextDetections":[]}"#)), 32);
    let oversized = vec![0u8; 256 * 1024];

    let res = send(
        &app.app,
        recognize_request(Some("Text"), Some(("huge.png", oversized.as_slice()))),
    )
    .await;
    assert_status(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(app.recognizer.calls().is_empty());
}

#[tokio::test]
async fn remote_failure_is_bad_gateway_and_not_retried() {
    let app = spawn_app(Script::Fail(DomainError::RemoteService(
        "DetectFaces failed: InvalidImageFormatException".into(),
    )));
    let png = tiny_png_bytes();

    let res = send(
        &app.app,
        recognize_request(Some("Facial Analysis"), Some(("photo.png", png.as_slice()))),
    )
    .await;
    assert_status(res.status(), StatusCode::BAD_GATEWAY);
    let body: Value = read_json(res).await;

    assert_eq!(body["error"], "Recognition service failed");
    assert_eq!(app.recognizer.calls(), ["DetectFaces"]);
}
