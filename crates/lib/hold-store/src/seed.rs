use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::{HoldingInvoice, HoldingReasonDetail};
use crate::schema::{SEED_TOML, is_valid_invoice_id};

#[derive(Debug)]
pub enum DatasetError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(Box<toml::de::Error>),
    InvalidId(String),
    DuplicateInvoice(String),
    DuplicateDetail(String),
    EmptyStatus(String),
    MissingDetail(String),
    OrphanDetail(String),
    ReasonMismatch {
        invoice_id: String,
        invoice_reason: String,
        detail_reason: String,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dataset {}: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid dataset TOML: {err}"),
            Self::InvalidId(id) => write!(f, "invalid invoice id: {id:?}"),
            Self::DuplicateInvoice(id) => write!(f, "duplicate invoice id: {id}"),
            Self::DuplicateDetail(id) => write!(f, "duplicate detail for invoice: {id}"),
            Self::EmptyStatus(id) => write!(f, "invoice {id} has an empty status"),
            Self::MissingDetail(id) => write!(f, "invoice {id} has no detail record"),
            Self::OrphanDetail(id) => write!(f, "detail {id} has no invoice record"),
            Self::ReasonMismatch {
                invoice_id,
                invoice_reason,
                detail_reason,
            } => write!(
                f,
                "reason mismatch for {invoice_id}: invoice says {invoice_reason:?}, detail says {detail_reason:?}"
            ),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for DatasetError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(Box::new(err))
    }
}

/// Holding invoices paired with their detail records, in insertion order.
///
/// Construction through [`HoldingDataset::new`] performs no checks so tests
/// can build deliberately broken datasets; the loaders validate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingDataset {
    #[serde(default)]
    pub invoices: Vec<HoldingInvoice>,
    #[serde(default)]
    pub details: Vec<HoldingReasonDetail>,
}

impl HoldingDataset {
    #[must_use]
    pub const fn new(invoices: Vec<HoldingInvoice>, details: Vec<HoldingReasonDetail>) -> Self {
        Self { invoices, details }
    }

    /// Loads the dataset compiled into the crate.
    ///
    /// # Errors
    /// Returns `DatasetError` if the embedded seed fails to parse or validate,
    /// which indicates a packaging defect.
    pub fn seed() -> Result<Self, DatasetError> {
        Self::from_toml_str(SEED_TOML)
    }

    /// Parses and validates a dataset from TOML text.
    ///
    /// # Errors
    /// Returns `DatasetError` on malformed TOML or a failed structural check.
    pub fn from_toml_str(text: &str) -> Result<Self, DatasetError> {
        let dataset: Self = toml::from_str(text)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Reads, parses, and validates a dataset file.
    ///
    /// # Errors
    /// Returns `DatasetError` if the file cannot be read or fails validation.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks id shape and uniqueness, non-empty status, and the 1:1
    /// invoice/detail pairing with matching reasons.
    ///
    /// # Errors
    /// Returns the first violation found, scanning invoices before details.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut details: HashMap<&str, &HoldingReasonDetail> =
            HashMap::with_capacity(self.details.len());
        for detail in &self.details {
            if !is_valid_invoice_id(&detail.invoice_id) {
                return Err(DatasetError::InvalidId(detail.invoice_id.clone()));
            }
            if details.insert(detail.invoice_id.as_str(), detail).is_some() {
                return Err(DatasetError::DuplicateDetail(detail.invoice_id.clone()));
            }
        }

        let mut seen = HashSet::with_capacity(self.invoices.len());
        for invoice in &self.invoices {
            if !is_valid_invoice_id(&invoice.id) {
                return Err(DatasetError::InvalidId(invoice.id.clone()));
            }
            if !seen.insert(invoice.id.as_str()) {
                return Err(DatasetError::DuplicateInvoice(invoice.id.clone()));
            }
            if invoice.status.trim().is_empty() {
                return Err(DatasetError::EmptyStatus(invoice.id.clone()));
            }
            let Some(detail) = details.get(invoice.id.as_str()) else {
                return Err(DatasetError::MissingDetail(invoice.id.clone()));
            };
            if detail.reason != invoice.reason {
                return Err(DatasetError::ReasonMismatch {
                    invoice_id: invoice.id.clone(),
                    invoice_reason: invoice.reason.clone(),
                    detail_reason: detail.reason.clone(),
                });
            }
        }

        if let Some(orphan) = self
            .details
            .iter()
            .find(|detail| !seen.contains(detail.invoice_id.as_str()))
        {
            return Err(DatasetError::OrphanDetail(orphan.invoice_id.clone()));
        }

        Ok(())
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
