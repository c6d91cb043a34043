use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use mock_server::app;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn job_request(body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri("/api/v2/jobs")
        .header(http::header::CONTENT_TYPE, "application/json")
        .header("Zencoder-Api-Key", "test-key")
        .body(body.to_string())
        .unwrap()
}

#[tokio::test]
async fn create_job_returns_201_with_id_and_outputs() {
    let app = app();
    let resp = app
        .oneshot(job_request(
            r#"{"input":"s3://bucket/in.mov","output":[{"label":"mp4"},{"label":"webm"}]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let job = body_json(resp).await;
    assert_eq!(job["id"], 1);
    let outputs = job["outputs"].as_array().unwrap();
    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs[0]["label"], "mp4");
    assert_eq!(outputs[1]["label"], "webm");
}

#[tokio::test]
async fn missing_api_key_returns_401() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v2/jobs")
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(r#"{"input":"s3://bucket/in.mov"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["errors"][0], "missing api key");
}

#[tokio::test]
async fn empty_input_returns_422() {
    let app = app();
    let resp = app.oneshot(job_request(r#"{"input":""}"#)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["errors"][0], "bad input");
}

#[tokio::test]
async fn empty_notifications_array_returns_422() {
    let app = app();
    let resp = app
        .oneshot(job_request(
            r#"{"input":"s3://bucket/in.mov","notifications":[]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["errors"][0], "empty notifications");
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let app = app();
    let resp = app.oneshot(job_request(r#"{"input":"#)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_input_field_returns_422() {
    let app = app();
    let resp = app
        .oneshot(job_request(r#"{"output":[{"label":"mp4"}]}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn job_ids_are_sequential() {
    use tower::Service;

    let mut app = app().into_service();

    for expected_id in 1..=3 {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(job_request(r#"{"input":"s3://bucket/in.mov"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let job = body_json(resp).await;
        assert_eq!(job["id"], expected_id);
    }
}
