use std::collections::HashMap;

use hold_store::{HoldingDataset, HoldingInvoice, HoldingReasonDetail, InvoiceNotFound};

/// Immutable, indexed view over a holding dataset.
#[derive(Debug, Clone, Default)]
pub struct MemoryHoldStore {
    invoices: Vec<HoldingInvoice>,
    details: Vec<HoldingReasonDetail>,
    detail_index: HashMap<String, usize>,
}

impl MemoryHoldStore {
    /// Builds the store from a dataset without re-validating it.
    ///
    /// When detail ids repeat, the first entry wins the index.
    #[must_use]
    pub fn new(dataset: HoldingDataset) -> Self {
        let HoldingDataset { invoices, details } = dataset;
        let mut detail_index = HashMap::with_capacity(details.len());
        for (position, detail) in details.iter().enumerate() {
            detail_index
                .entry(detail.invoice_id.clone())
                .or_insert(position);
        }
        Self {
            invoices,
            details,
            detail_index,
        }
    }

    /// All holding invoices in insertion order.
    #[must_use]
    pub fn invoices(&self) -> &[HoldingInvoice] {
        &self.invoices
    }

    /// All detail records in insertion order.
    #[must_use]
    pub fn details(&self) -> &[HoldingReasonDetail] {
        &self.details
    }

    /// Looks up a detail by exact, case-sensitive id.
    ///
    /// # Errors
    /// Returns `InvoiceNotFound` carrying every listed invoice id.
    pub fn detail(&self, invoice_id: &str) -> Result<&HoldingReasonDetail, InvoiceNotFound> {
        self.detail_index
            .get(invoice_id)
            .map(|&position| &self.details[position])
            .ok_or_else(|| InvoiceNotFound::new(invoice_id, self.invoice_ids()))
    }

    #[must_use]
    pub fn invoice_ids(&self) -> Vec<String> {
        self.invoices.iter().map(|invoice| invoice.id.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }
}

impl From<HoldingDataset> for MemoryHoldStore {
    fn from(dataset: HoldingDataset) -> Self {
        Self::new(dataset)
    }
}
