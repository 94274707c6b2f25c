//! OpenAPI 3.0 description of the holding-invoice operations.
//!
//! The document mirrors the REST routes in this crate, one GET path per MCP
//! tool, with component schemas generated from the shared models.

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use hold_store::{HoldingInvoice, HoldingReasonDetail, InvoiceNotFound, InvoiceStatistics};
use schemars::schema_for;
use serde_json::{Map, Value, json};
use tracing::info;

pub const OPENAPI_VERSION: &str = "3.0.0";
pub const API_TITLE: &str = "Invoice Holding Management API";
pub const API_VERSION: &str = "1.0.0";
pub const DEFAULT_SCHEMA_FILE: &str = "openapi_schema.json";

/// A REST operation backed by one MCP tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    pub operation_id: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
    pub response_schema: &'static str,
    pub is_array: bool,
}

pub const OPERATIONS: [OperationSpec; 4] = [
    OperationSpec {
        operation_id: "list_holding_invoices",
        path: "/api/v1/invoices/holding",
        summary: "List holding invoices",
        response_schema: "HoldingInvoice",
        is_array: true,
    },
    OperationSpec {
        operation_id: "get_holding_reason_detail",
        path: "/api/v1/invoices/holding/{invoice_id}/reason",
        summary: "Get the holding reason for one invoice",
        response_schema: "HoldingReasonDetail",
        is_array: false,
    },
    OperationSpec {
        operation_id: "get_all_holding_reason_details",
        path: "/api/v1/invoices/holding/reasons/all",
        summary: "Get holding reasons for all invoices",
        response_schema: "HoldingReasonDetail",
        is_array: true,
    },
    OperationSpec {
        operation_id: "get_invoice_statistics",
        path: "/api/v1/invoices/statistics",
        summary: "Get holding invoice statistics",
        response_schema: "InvoiceStatistics",
        is_array: false,
    },
];

#[derive(Debug)]
pub enum SchemaExportError {
    Encode(serde_json::Error),
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for SchemaExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode OpenAPI document: {err}"),
            Self::Io { path, source } => {
                write!(f, "failed to write OpenAPI document {}: {source}", path.display())
            }
        }
    }
}

impl Error for SchemaExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for SchemaExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err)
    }
}

/// Builds the OpenAPI document. `server_url` is advertised under `servers`.
///
/// # Errors
/// Returns `SchemaExportError::Encode` if a component schema cannot be encoded.
pub fn build_document(server_url: &str) -> Result<Value, SchemaExportError> {
    let mut schemas = Map::new();
    schemas.insert(
        "HoldingInvoice".to_string(),
        serde_json::to_value(schema_for!(HoldingInvoice))?,
    );
    schemas.insert(
        "HoldingReasonDetail".to_string(),
        serde_json::to_value(schema_for!(HoldingReasonDetail))?,
    );
    schemas.insert(
        "ErrorResponse".to_string(),
        serde_json::to_value(schema_for!(InvoiceNotFound))?,
    );
    schemas.insert(
        "InvoiceStatistics".to_string(),
        serde_json::to_value(schema_for!(InvoiceStatistics))?,
    );

    let mut paths = Map::new();
    for operation in &OPERATIONS {
        paths.insert(operation.path.to_string(), json!({ "get": operation_object(operation) }));
    }

    Ok(json!({
        "openapi": OPENAPI_VERSION,
        "info": {
            "title": API_TITLE,
            "description": "Read-only access to invoices on hold and their reasons.",
            "version": API_VERSION,
            "contact": {
                "name": "Invoice Management Team",
                "email": "support@company.com"
            }
        },
        "servers": [
            { "url": server_url, "description": "hold-mcp REST surface" }
        ],
        "paths": paths,
        "components": { "schemas": schemas }
    }))
}

fn operation_object(operation: &OperationSpec) -> Value {
    let schema_ref = json!({
        "$ref": format!("#/components/schemas/{}", operation.response_schema)
    });
    let schema = if operation.is_array {
        json!({ "type": "array", "items": schema_ref })
    } else {
        schema_ref
    };

    let mut object = json!({
        "summary": operation.summary,
        "operationId": operation.operation_id,
        "responses": {
            "200": {
                "description": "Successful response",
                "content": { "application/json": { "schema": schema } }
            }
        }
    });

    if operation.path.contains("{invoice_id}") {
        object["parameters"] = json!([{
            "name": "invoice_id",
            "in": "path",
            "required": true,
            "schema": { "type": "string" },
            "description": "Invoice id",
            "example": "INV-001"
        }]);
        object["responses"]["404"] = json!({
            "description": "Invoice is not in the holding list",
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                }
            }
        });
    }

    object
}

/// Writes the OpenAPI document to `path` as pretty-printed UTF-8 JSON.
///
/// # Errors
/// Returns `SchemaExportError` if encoding or writing fails.
pub fn write_document(path: impl AsRef<Path>, server_url: &str) -> Result<(), SchemaExportError> {
    let path = path.as_ref();
    let document = build_document(server_url)?;
    let mut text = serde_json::to_string_pretty(&document)?;
    text.push('\n');
    std::fs::write(path, text).map_err(|source| SchemaExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote OpenAPI document");
    Ok(())
}
