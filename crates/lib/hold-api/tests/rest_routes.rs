use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use hold_api::build_router;
use hold_core::control::HoldControlPlane;
use hold_store::{
    HoldingDataset,
    HoldingInvoice,
    HoldingReasonDetail,
    InvoiceNotFound,
    InvoiceStatistics,
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

const SERVER_URL: &str = "http://localhost:8000";

fn app() -> Router {
    let dataset = HoldingDataset::seed()
        .unwrap_or_else(|err| panic!("failed to load seed dataset: {err}"));
    build_router(HoldControlPlane::from_dataset(dataset), SERVER_URL)
}

async fn get<T: DeserializeOwned>(app: Router, uri: &str) -> (StatusCode, T) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request should build"),
        )
        .await
        .expect("router should respond");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let payload = serde_json::from_slice(&bytes)
        .unwrap_or_else(|err| panic!("{uri} returned non-JSON body: {err}"));
    (status, payload)
}

#[tokio::test]
async fn lists_holding_invoices() {
    let (status, invoices): (_, Vec<HoldingInvoice>) =
        get(app(), "/api/v1/invoices/holding").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(invoices.len(), 10);
    assert_eq!(invoices[4].id, "INV-005");
}

#[tokio::test]
async fn fetches_one_reason_detail() {
    let (status, detail): (_, HoldingReasonDetail) =
        get(app(), "/api/v1/invoices/holding/INV-001/reason").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail.invoice_id, "INV-001");
    assert_eq!(detail.reason, "발주금액 불일치");
}

#[tokio::test]
async fn unknown_invoice_is_404_with_available_ids() {
    let (status, not_found): (_, InvoiceNotFound) =
        get(app(), "/api/v1/invoices/holding/INV-999/reason").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(not_found.invoice_id, "INV-999");
    assert_eq!(not_found.available_ids.len(), 10);
}

#[tokio::test]
async fn lists_all_reason_details() {
    let (status, details): (_, Vec<HoldingReasonDetail>) =
        get(app(), "/api/v1/invoices/holding/reasons/all").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(details.len(), 10);
}

#[tokio::test]
async fn reports_statistics() {
    let (status, stats): (_, InvoiceStatistics) = get(app(), "/api/v1/invoices/statistics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats.total, 10);
    assert_eq!(stats.reason_distribution.values().sum::<usize>(), 10);
}

#[tokio::test]
async fn serves_openapi_document() {
    let (status, document): (_, serde_json::Value) = get(app(), "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(document["servers"][0]["url"], SERVER_URL);
    assert!(
        document["paths"]
            .get("/api/v1/invoices/statistics")
            .is_some()
    );
}
