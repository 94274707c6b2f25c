use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use hold_core::control::HoldControlPlane;
use hold_mcp::server::{McpHttpServerConfig, build_router};
use hold_store::{HoldingDataset, InvoiceNotFound};
use serde_json::{Value, json};
use tower::ServiceExt;

fn control() -> HoldControlPlane {
    let dataset = HoldingDataset::seed()
        .unwrap_or_else(|err| panic!("failed to load seed dataset: {err}"));
    HoldControlPlane::from_dataset(dataset)
}

/// Finds the JSON-RPC response with `id` in a plain JSON or SSE body.
fn find_response(body: &str, id: u64) -> Value {
    let trimmed = body.trim_start();
    if trimmed.starts_with('{') {
        return serde_json::from_str(trimmed)
            .unwrap_or_else(|err| panic!("invalid JSON response: {err}\n{body}"));
    }

    body.lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .filter_map(|data| serde_json::from_str::<Value>(data.trim()).ok())
        .find(|message| message["id"] == json!(id))
        .unwrap_or_else(|| panic!("no response for id {id} in body:\n{body}"))
}

#[tokio::test]
async fn tools_call_routes_unknown_invoice_to_not_found_result() {
    let mut config = McpHttpServerConfig::default().with_stateful_mode(false);
    config.sse_keep_alive = None;
    let app = build_router(control(), &config);

    let request = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {
            "name": "get_holding_reason_detail",
            "arguments": { "invoice_id": "INV-999" }
        }
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mcp")
                .header(header::HOST, "localhost")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::ACCEPT, "application/json, text/event-stream")
                .body(Body::from(request.to_string()))
                .expect("request should build"),
        )
        .await
        .expect("router should respond");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = tokio::time::timeout(
        Duration::from_secs(5),
        to_bytes(response.into_body(), usize::MAX),
    )
    .await
    .expect("response stream should close")
    .expect("body should be readable");
    let body = String::from_utf8(bytes.to_vec()).expect("body should be UTF-8");

    let message = find_response(&body, 1);
    assert!(
        message.get("error").is_none(),
        "unexpected JSON-RPC error: {message}"
    );
    let result = &message["result"];
    assert_eq!(result["isError"], json!(true));

    let text = result["content"][0]["text"]
        .as_str()
        .unwrap_or_else(|| panic!("tool result should carry text content: {result}"));
    let not_found: InvoiceNotFound =
        serde_json::from_str(text).expect("content should be an InvoiceNotFound payload");
    assert_eq!(not_found.invoice_id, "INV-999");
    assert_eq!(
        not_found.error,
        "Invoice ID 'INV-999' not found in holding list"
    );
    assert_eq!(not_found.available_ids.len(), 10);
    assert_eq!(not_found.available_ids[0], "INV-001");
}
