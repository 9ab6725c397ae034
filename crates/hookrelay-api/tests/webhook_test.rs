//! Webhook relay integration tests.
//!
//! Remote endpoints (asset API, download origin) are mockito servers; the
//! relay router runs under axum-test. No network beyond loopback.

mod helpers;

use axum::http::StatusCode;
use helpers::{setup_test_app, TEST_TOKEN, UNREACHABLE_ASSET_API};
use serde_json::{json, Value};

fn bearer() -> String {
    format!("Bearer {}", TEST_TOKEN)
}

#[tokio::test]
async fn test_rejects_non_post_method() {
    let app = setup_test_app(UNREACHABLE_ASSET_API).await;

    let response = app.server.get("/webhook").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("invalid method GET"));
}

#[tokio::test]
async fn test_rejects_wrong_content_type_despite_valid_json() {
    let app = setup_test_app(UNREACHABLE_ASSET_API).await;

    let response = app
        .server
        .post("/webhook")
        .content_type("text/plain")
        .text(r#"{"url": "https://example.com/f.bin", "name": "out.bin"}"#)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("invalid content type text/plain"));
}

#[tokio::test]
async fn test_rejects_content_type_with_parameters() {
    let app = setup_test_app(UNREACHABLE_ASSET_API).await;

    let response = app
        .server
        .post("/webhook")
        .content_type("application/json; charset=utf-8")
        .text(r#"{"url": "https://example.com/f.bin"}"#)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("invalid content type"));
}

#[tokio::test]
async fn test_rejects_malformed_json_body() {
    let app = setup_test_app(UNREACHABLE_ASSET_API).await;

    let response = app
        .server
        .post("/webhook")
        .text(r#"{"url": "#)
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("invalid request body"));
}

#[tokio::test]
async fn test_rejects_empty_url() {
    let app = setup_test_app(UNREACHABLE_ASSET_API).await;

    let response = app
        .server
        .post("/webhook")
        .json(&json!({"url": "", "name": "out.bin"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "URL is required");
}

#[tokio::test]
async fn test_downloads_direct_payload_to_disk() {
    let mut origin = mockito::Server::new_async().await;
    let file_mock = origin
        .mock("GET", "/f.bin")
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body("DEADBEEF")
        .create_async()
        .await;

    let app = setup_test_app(UNREACHABLE_ASSET_API).await;
    let response = app
        .server
        .post("/webhook")
        .json(&json!({"URL": format!("{}/f.bin", origin.url()), "name": "out.bin"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "Yey!");
    assert_eq!(body["description"], "File downloaded successfully");

    let saved = std::fs::read(app.downloaded("out.bin")).expect("file written");
    assert_eq!(saved, b"DEADBEEF");
    file_mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_name_falls_back_to_default() {
    let mut origin = mockito::Server::new_async().await;
    let _file_mock = origin
        .mock("GET", "/f.bin")
        .with_status(200)
        .with_body("bytes")
        .create_async()
        .await;

    let app = setup_test_app(UNREACHABLE_ASSET_API).await;
    let response = app
        .server
        .post("/webhook")
        .json(&json!({"url": format!("{}/f.bin", origin.url()), "name": ""}))
        .await;

    response.assert_status_ok();
    let saved = std::fs::read(app.downloaded("downloaded_file")).expect("default-named file");
    assert_eq!(saved, b"bytes");
}

#[tokio::test]
async fn test_non_success_origin_status_still_copied() {
    let mut origin = mockito::Server::new_async().await;
    let _file_mock = origin
        .mock("GET", "/f.bin")
        .with_status(500)
        .with_body("origin exploded")
        .create_async()
        .await;

    let app = setup_test_app(UNREACHABLE_ASSET_API).await;
    let response = app
        .server
        .post("/webhook")
        .json(&json!({"url": format!("{}/f.bin", origin.url()), "name": "out.bin"}))
        .await;

    response.assert_status_ok();
    let saved = std::fs::read(app.downloaded("out.bin")).expect("file written");
    assert_eq!(saved, b"origin exploded");
}

#[tokio::test]
async fn test_unreachable_origin_is_500() {
    let app = setup_test_app(UNREACHABLE_ASSET_API).await;

    let response = app
        .server
        .post("/webhook")
        .json(&json!({"url": "http://127.0.0.1:9/f.bin", "name": "out.bin"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("download request failed"));
}

#[tokio::test]
async fn test_traversal_filename_rejected() {
    let mut origin = mockito::Server::new_async().await;
    let _file_mock = origin
        .mock("GET", "/f.bin")
        .with_status(200)
        .with_body("bytes")
        .create_async()
        .await;

    let app = setup_test_app(UNREACHABLE_ASSET_API).await;
    let response = app
        .server
        .post("/webhook")
        .json(&json!({"url": format!("{}/f.bin", origin.url()), "name": "../escape.bin"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("invalid file name"));
    assert!(!app
        .download_dir
        .path()
        .parent()
        .unwrap()
        .join("escape.bin")
        .exists());
}

#[tokio::test]
async fn test_resource_without_download_name_gets_form_prompt() {
    let mut api = mockito::Server::new_async().await;
    let lookup = api
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let app = setup_test_app(&api.url()).await;
    let response = app
        .server
        .post("/webhook")
        .json(&json!({"resource": {"id": "abc123", "type": "file.ready"}, "data": {}}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "Download File");
    assert_eq!(
        body["description"],
        "Please provide the name of the file to download"
    );
    assert_eq!(body["fields"][0]["name"], "dw_name");
    assert_eq!(body["fields"][0]["type"], "text");

    // Terminal branch: no lookup, no download.
    lookup.assert_async().await;
}

#[tokio::test]
async fn test_resource_with_download_name_resolves_and_downloads() {
    let mut api = mockito::Server::new_async().await;
    let lookup = api
        .mock("GET", "/assets/asset-123")
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "original": format!("{}/files/asset-123.bin", api.url()),
                "name": "asset-123.bin"
            })
            .to_string(),
        )
        .create_async()
        .await;
    let download = api
        .mock("GET", "/files/asset-123.bin")
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body("resolved bytes")
        .create_async()
        .await;

    let app = setup_test_app(&api.url()).await;
    let response = app
        .server
        .post("/webhook")
        .json(&json!({
            "resource": {"id": "asset-123", "type": "file.ready"},
            "data": {"dw_name": "renamed.bin"}
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "Yey!");

    // The caller-supplied name wins over the asset's own name.
    let saved = std::fs::read(app.downloaded("renamed.bin")).expect("file written");
    assert_eq!(saved, b"resolved bytes");
    assert!(!app.downloaded("asset-123.bin").exists());

    lookup.assert_async().await;
    download.assert_async().await;
}

#[tokio::test]
async fn test_resource_with_empty_resolved_url_is_400() {
    let mut api = mockito::Server::new_async().await;
    let _lookup = api
        .mock("GET", "/assets/asset-123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name": "asset-123.bin"}"#)
        .create_async()
        .await;

    let app = setup_test_app(&api.url()).await;
    let response = app
        .server
        .post("/webhook")
        .json(&json!({
            "resource": {"id": "asset-123", "type": "file.ready"},
            "data": {"dw_name": "out.bin"}
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "URL is required");
}

#[tokio::test]
async fn test_lookup_failure_is_500() {
    let mut api = mockito::Server::new_async().await;
    let _lookup = api
        .mock("GET", "/assets/asset-123")
        .with_status(500)
        .with_body("lookup backend down")
        .create_async()
        .await;

    let app = setup_test_app(&api.url()).await;
    let response = app
        .server
        .post("/webhook")
        .json(&json!({
            "resource": {"id": "asset-123", "type": "file.ready"},
            "data": {"dw_name": "out.bin"}
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("asset lookup failed"));
}
