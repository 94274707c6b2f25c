//! REST surface for hold-mcp.
//!
//! Mirrors the four MCP tools as read-only HTTP endpoints and serves the
//! matching OpenAPI document.

pub mod openapi;

use std::net::SocketAddr;

use axum::Router;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use hold_core::control::HoldControlPlane;
use hold_store::{HoldingInvoice, HoldingReasonDetail, InvoiceNotFound, InvoiceStatistics};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

pub const DEFAULT_API_ADDR: &str = "127.0.0.1:8000";

/// Configuration for the REST server.
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    pub addr: SocketAddr,
    pub public_url: Option<String>,
}

impl ApiServerConfig {
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            public_url: None,
        }
    }

    #[must_use]
    pub fn with_public_url(mut self, public_url: impl Into<String>) -> Self {
        self.public_url = Some(public_url.into());
        self
    }

    /// URL advertised in the OpenAPI `servers` list.
    #[must_use]
    pub fn server_url(&self) -> String {
        self.public_url
            .clone()
            .unwrap_or_else(|| format!("http://{}", self.addr))
    }
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 8000)))
    }
}

/// HTTP server wrapper for the REST surface.
pub struct ApiServer {
    config: ApiServerConfig,
    state: AppState,
}

impl ApiServer {
    #[must_use]
    pub fn new(control: HoldControlPlane, config: ApiServerConfig) -> Self {
        let state = AppState {
            control,
            server_url: config.server_url(),
        };
        Self { config, state }
    }

    /// Runs the HTTP server until shutdown.
    ///
    /// # Errors
    /// Returns any listener or server error.
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = self.config.addr;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        let app = router_with_state(self.state);

        info!("hold-api listening on {addr}");
        axum::serve(listener, app).await?;
        Ok(())
    }
}

#[derive(Clone)]
struct AppState {
    control: HoldControlPlane,
    server_url: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(InvoiceNotFound),
    Internal(String),
}

impl From<InvoiceNotFound> for ApiError {
    fn from(err: InvoiceNotFound) -> Self {
        Self::NotFound(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(payload) => (StatusCode::NOT_FOUND, Json(payload)).into_response(),
            Self::Internal(error) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error })).into_response()
            }
        }
    }
}

/// Builds the REST router; `server_url` is advertised by `/openapi.json`.
#[must_use]
pub fn build_router(control: HoldControlPlane, server_url: impl Into<String>) -> Router {
    router_with_state(AppState {
        control,
        server_url: server_url.into(),
    })
}

fn router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_document))
        .route("/api/v1/invoices/holding", get(list_holding_invoices))
        .route(
            "/api/v1/invoices/holding/reasons/all",
            get(get_all_holding_reason_details),
        )
        .route(
            "/api/v1/invoices/holding/:invoice_id/reason",
            get(get_holding_reason_detail),
        )
        .route("/api/v1/invoices/statistics", get(get_invoice_statistics))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn openapi_document(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    openapi::build_document(&state.server_url)
        .map(Json)
        .map_err(|err| ApiError::Internal(err.to_string()))
}

async fn list_holding_invoices(State(state): State<AppState>) -> Json<Vec<HoldingInvoice>> {
    Json(state.control.list_holding_invoices())
}

async fn get_holding_reason_detail(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<Json<HoldingReasonDetail>, ApiError> {
    Ok(Json(state.control.get_holding_reason_detail(&invoice_id)?))
}

async fn get_all_holding_reason_details(
    State(state): State<AppState>,
) -> Json<Vec<HoldingReasonDetail>> {
    Json(state.control.get_all_holding_reason_details())
}

async fn get_invoice_statistics(State(state): State<AppState>) -> Json<InvoiceStatistics> {
    Json(state.control.get_invoice_statistics())
}
