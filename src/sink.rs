//! Error-reporting sink for recoverable conversion failures.
//!
//! Inject an [`Arc<dyn ErrorSink>`] via
//! [`crate::config::ConversionConfigBuilder::error_sink`] to receive a
//! `(message, context)` pair every time a table block is skipped or the whole
//! document falls back to identity.
//!
//! # Why a trait instead of returning errors?
//!
//! The entry points promise to always return usable text. Failures are side
//! information: callers can forward them to their own logger, a metrics
//! counter, or nowhere at all. When no sink is configured the failures go to
//! [`TracingSink`], which emits `tracing::warn!` events.
//!
//! A sink that panics is contained: see [`deliver`].
//!
//! # Example
//!
//! ```rust
//! use edgequake_table2md::{convert_with, ConversionConfig, ErrorContext, ErrorSink};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingSink(AtomicUsize);
//!
//! impl ErrorSink for CountingSink {
//!     fn report(&self, _message: &str, _context: &ErrorContext) {
//!         self.0.fetch_add(1, Ordering::SeqCst);
//!     }
//! }
//!
//! let sink = Arc::new(CountingSink(AtomicUsize::new(0)));
//! let config = ConversionConfig::builder()
//!     .error_sink(sink.clone())
//!     .build()
//!     .unwrap();
//!
//! let out = convert_with("<table><tbody></tbody></table>", &config);
//! assert_eq!(out, "<table><tbody></tbody></table>");
//! assert_eq!(sink.0.load(Ordering::SeqCst), 1);
//! ```

use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::warn;

/// Message used for per-block failures.
pub const TABLE_FAILURE_MESSAGE: &str = "Error converting single HTML table:";

/// Message used when the whole document falls back to identity.
pub const DOCUMENT_FAILURE_MESSAGE: &str = "Error converting HTML tables to Markdown:";

/// Structured context accompanying a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorContext {
    /// 0-based index of the failing block, `None` for document-level failures.
    pub table: Option<usize>,
    /// Byte offset of the failing block in the input document.
    pub offset: Option<usize>,
    /// Human-readable error description.
    pub error: String,
}

/// Receives recoverable failures.
///
/// Implementations must be `Send + Sync`: one config may be shared by
/// conversions running on many threads.
pub trait ErrorSink: Send + Sync {
    fn report(&self, message: &str, context: &ErrorContext);
}

/// Drops every report.
pub struct NoopSink;

impl ErrorSink for NoopSink {
    fn report(&self, _message: &str, _context: &ErrorContext) {}
}

/// Forwards reports to `tracing::warn!`. Used when no sink is configured.
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, message: &str, context: &ErrorContext) {
        warn!(
            table = ?context.table,
            offset = ?context.offset,
            error = %context.error,
            "{}",
            message
        );
    }
}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type SharedErrorSink = Arc<dyn ErrorSink>;

/// Hand a report to `sink`, swallowing any panic it raises.
pub(crate) fn deliver(sink: Option<&SharedErrorSink>, message: &str, context: &ErrorContext) {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| match sink {
        Some(sink) => sink.report(message, context),
        None => TracingSink.report(message, context),
    }));
    if outcome.is_err() {
        warn!("error sink panicked while reporting: {}", context.error);
    }
}
