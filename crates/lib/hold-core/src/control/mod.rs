use std::sync::Arc;

use hold_store::HoldingDataset;

use crate::store::MemoryHoldStore;

pub mod invoices;
pub mod statistics;

pub use statistics::summarize;

/// Query service over a shared, immutable record store.
///
/// Cloning is cheap; clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct HoldControlPlane {
    store: Arc<MemoryHoldStore>,
}

impl HoldControlPlane {
    #[must_use]
    pub fn new(store: MemoryHoldStore) -> Self {
        Self::from_arc(Arc::new(store))
    }

    #[must_use]
    pub const fn from_arc(store: Arc<MemoryHoldStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn from_dataset(dataset: HoldingDataset) -> Self {
        Self::new(MemoryHoldStore::new(dataset))
    }

    #[must_use]
    pub fn store(&self) -> &MemoryHoldStore {
        &self.store
    }
}
