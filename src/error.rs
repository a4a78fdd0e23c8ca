//! Error types for the edgequake-table2md library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`TableError`] — **Non-fatal**: a single `<table>` block could not be
//!   converted (no header row, unparseable markup, a cell transform blew up).
//!   The block is left verbatim in the output and the error is recorded in
//!   [`crate::output::TableFailure`] so callers can inspect what was skipped.
//!
//! * [`ConversionError`] — **Document level**: the scan/substitution pass
//!   itself failed (the whole document is returned unmodified), the caller
//!   asked for strict results via
//!   [`crate::output::ConversionOutput::into_result`], or the configuration
//!   is invalid.
//!
//! Neither type ever escapes [`crate::convert::convert`]: the entry points
//! always return a string and report failures to the configured
//! [`crate::sink::ErrorSink`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A non-fatal error for a single table block.
///
/// `table` is the 0-based index of the block in document order.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TableError {
    /// No `thead th` cells and no usable first body row.
    #[error("Table {table}: no header cells found")]
    HeaderNotFound { table: usize },

    /// The block could not be parsed into a table tree, or a cell
    /// transform failed unexpectedly.
    #[error("Table {table}: structural parse failure: {detail}")]
    StructuralParse { table: usize, detail: String },
}

impl TableError {
    /// Index of the block this error belongs to.
    pub fn table(&self) -> usize {
        match self {
            TableError::HeaderNotFound { table } | TableError::StructuralParse { table, .. } => {
                *table
            }
        }
    }

    pub(crate) fn structural(table: usize, detail: impl Into<String>) -> Self {
        TableError::StructuralParse {
            table,
            detail: detail.into(),
        }
    }
}

/// Document-level errors.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Scanning or substitution failed; the original document was returned.
    #[error("Conversion of the whole document failed: {detail}")]
    WholeDocument { detail: String },

    /// Some tables converted but at least one was left as HTML.
    ///
    /// Returned by [`crate::output::ConversionOutput::into_result`] when
    /// the caller wants to treat any skipped table as an error.
    #[error("{skipped}/{total} tables could not be converted")]
    PartialFailure {
        converted: usize,
        skipped: usize,
        total: usize,
    },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
