use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::not_found_message;

/// An invoice that is blocked from further processing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct HoldingInvoice {
    /// Invoice id, e.g. `INV-001`.
    pub id: String,
    /// Invoice status.
    pub status: String,
    /// Holding reason category.
    pub reason: String,
}

/// Detailed explanation of why an invoice is held.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct HoldingReasonDetail {
    /// Invoice id, e.g. `INV-001`.
    pub invoice_id: String,
    /// Holding reason category; matches the invoice's reason.
    pub reason: String,
    /// Free-text explanation.
    pub detail: String,
    /// Keywords for searching the related policy documents.
    pub search_query: String,
}

/// Summary of the current holding invoices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct InvoiceStatistics {
    /// Total number of holding invoices.
    #[serde(rename = "total_holding")]
    pub total: usize,
    /// Number of invoices per holding reason.
    pub reason_distribution: BTreeMap<String, usize>,
    /// Reason with the highest count. Ties go to the lexicographically smallest reason.
    pub most_common_reason: String,
    /// Count for `most_common_reason`.
    pub most_common_count: usize,
    /// Number of distinct reasons.
    pub unique_reasons: usize,
}

/// Returned when an invoice id is not in the holding list.
///
/// Carries every valid id so the caller can correct the request without a
/// second round trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct InvoiceNotFound {
    /// Error message naming the missing id.
    pub error: String,
    /// The id that was requested.
    pub invoice_id: String,
    /// Ids that are currently available.
    pub available_ids: Vec<String>,
}

impl InvoiceNotFound {
    #[must_use]
    pub fn new(invoice_id: impl Into<String>, available_ids: Vec<String>) -> Self {
        let invoice_id = invoice_id.into();
        Self {
            error: not_found_message(&invoice_id),
            invoice_id,
            available_ids,
        }
    }
}

impl fmt::Display for InvoiceNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error)
    }
}

impl Error for InvoiceNotFound {}
