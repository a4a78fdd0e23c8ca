//! Result types returned by [`crate::convert::convert_with_report`].

use crate::error::{ConversionError, TableError};
use serde::Serialize;

/// The converted document plus what happened to each table block.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionOutput {
    /// The output document. Equal to the input when nothing converted.
    pub markdown: String,
    pub stats: ConversionStats,
    /// One entry per block left as HTML.
    pub failures: Vec<TableFailure>,
}

/// Counters for one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub tables_found: usize,
    pub tables_converted: usize,
    pub tables_skipped: usize,
    /// True when the document-level fallback kicked in.
    pub document_fallback: bool,
    pub duration_us: u64,
}

/// A block that was left verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableFailure {
    /// Byte offset of the block in the input document.
    pub offset: usize,
    pub error: TableError,
}

impl ConversionOutput {
    /// Treat any skipped table (or document fallback) as an error.
    pub fn into_result(self) -> Result<String, ConversionError> {
        if self.stats.document_fallback {
            return Err(ConversionError::WholeDocument {
                detail: "document returned unmodified".into(),
            });
        }
        if self.stats.tables_skipped > 0 {
            return Err(ConversionError::PartialFailure {
                converted: self.stats.tables_converted,
                skipped: self.stats.tables_skipped,
                total: self.stats.tables_found,
            });
        }
        Ok(self.markdown)
    }
}
