//! Integration tests for the Lukulasi HTTP API.

mod support;

use axum::body::Bytes;
use axum::http::StatusCode;
use lukulasi_server::extract::{DocumentExtractor, ExtractError, ExtractedDocument};
use std::sync::Arc;
use support::{setup_content_server, test_config, test_server_for_config, test_server_with_extractor};
use tempfile::TempDir;

struct StubExtractor;

impl DocumentExtractor for StubExtractor {
    fn extract(&self, _bytes: &[u8]) -> Result<ExtractedDocument, ExtractError> {
        Ok(ExtractedDocument {
            text: "Hei maailma".to_string(),
            page_count: 2,
            title: None,
            author: None,
        })
    }
}

#[tokio::test]
async fn content_listing_is_sorted_and_meta_only() {
    let (server, _temp) = setup_content_server();

    let response = server.get("/api/content").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let listing: serde_json::Value = response.json();
    let items = listing.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], "kissa");
    assert_eq!(items[1]["id"], "saunailta");
    assert_eq!(items[1]["difficulty"], "intermediate");
    assert_eq!(items[1]["tags"][0], "kulttuuri");
    assert!(items[0].get("text").is_none(), "listing must omit full text");
}

#[tokio::test]
async fn content_item_returns_full_text() {
    let (server, _temp) = setup_content_server();

    let response = server.get("/api/content/kissa").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let item: serde_json::Value = response.json();
    assert_eq!(item["title"], "Kissa");
    assert_eq!(item["text"], "Kissa nukkuu matolla.");
}

#[tokio::test]
async fn unknown_content_id_is_not_found() {
    let (server, _temp) = setup_content_server();

    let response = server.get("/api/content/puuttuva").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Content not found");
}

#[tokio::test]
async fn upload_rejects_non_pdf_content_type() {
    let (server, _temp) = setup_content_server();

    let response = server
        .post("/api/pdf-upload")
        .content_type("text/plain")
        .bytes(Bytes::from_static(b"hello"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("Only PDF files"));
}

#[tokio::test]
async fn upload_reports_parsing_failures_with_code() {
    let (server, _temp) = setup_content_server();

    let response = server
        .post("/api/pdf-upload")
        .content_type("application/pdf")
        .bytes(Bytes::from_static(b"definitely not a pdf"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "ParsingFailed");
}

#[tokio::test]
async fn upload_reports_oversized_files_with_code() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config = test_config(temp_dir.path(), 64);
    let server = test_server_for_config(config);

    let response = server
        .post("/api/pdf-upload")
        .content_type("application/pdf")
        .bytes(Bytes::from(vec![0u8; 128]))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "FileTooLarge");
}

#[tokio::test]
async fn upload_returns_extracted_text() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config = test_config(temp_dir.path(), 10 * 1024 * 1024);
    let server = test_server_with_extractor(config, Arc::new(StubExtractor));

    let response = server
        .post("/api/pdf-upload")
        .content_type("application/pdf")
        .bytes(Bytes::from_static(b"%PDF-1.4 pretend"))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["text"], "Hei maailma");
    assert_eq!(body["page_count"], 2);
}
