use hold_store::{HoldingInvoice, HoldingReasonDetail, InvoiceNotFound, InvoiceStatistics};
use tracing::debug;

use super::{HoldControlPlane, summarize};

impl HoldControlPlane {
    /// Lists every holding invoice in insertion order.
    #[must_use]
    pub fn list_holding_invoices(&self) -> Vec<HoldingInvoice> {
        self.store.invoices().to_vec()
    }

    /// Fetches the holding reason detail for one invoice.
    ///
    /// # Errors
    /// Returns `InvoiceNotFound` with all valid ids when the id is unknown.
    pub fn get_holding_reason_detail(
        &self,
        invoice_id: &str,
    ) -> Result<HoldingReasonDetail, InvoiceNotFound> {
        match self.store.detail(invoice_id) {
            Ok(detail) => Ok(detail.clone()),
            Err(err) => {
                debug!(invoice_id, "holding invoice not found");
                Err(err)
            }
        }
    }

    /// Lists every holding reason detail in insertion order.
    #[must_use]
    pub fn get_all_holding_reason_details(&self) -> Vec<HoldingReasonDetail> {
        self.store.details().to_vec()
    }

    /// Computes the reason distribution over the current invoices.
    #[must_use]
    pub fn get_invoice_statistics(&self) -> InvoiceStatistics {
        summarize(self.store.invoices())
    }
}
