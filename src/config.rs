//! Configuration types for HTML-table-to-Markdown conversion.
//!
//! Conversion needs almost no knobs: [`crate::convert::convert`] runs with
//! [`ConversionConfig::default()`]. The few that exist are gathered in one
//! struct, built via [`ConversionConfigBuilder`], so the config can be shared
//! across threads and extended without breaking callers.

use crate::error::ConversionError;
use crate::sink::ErrorSink;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Configuration for a conversion run.
///
/// # Example
/// ```rust
/// use edgequake_table2md::{ConversionConfig, RowOverflow};
///
/// let config = ConversionConfig::builder()
///     .row_overflow(RowOverflow::Truncate)
///     .bullet("-")
///     .build()
///     .unwrap();
/// assert_eq!(config.bullet, "-");
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// What to do with data rows that have more cells than there are headers.
    /// Default: [`RowOverflow::Preserve`].
    pub row_overflow: RowOverflow,

    /// Glyph prefixed to each list item inside a cell. Default: `"•"`.
    pub bullet: String,

    /// Receiver for recoverable failures. `None` uses [`crate::sink::TracingSink`].
    pub error_sink: Option<Arc<dyn ErrorSink>>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            row_overflow: RowOverflow::default(),
            bullet: String::from("•"),
            error_sink: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("row_overflow", &self.row_overflow)
            .field("bullet", &self.bullet)
            .field("error_sink", &self.error_sink.as_ref().map(|_| "<dyn ErrorSink>"))
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn row_overflow(mut self, policy: RowOverflow) -> Self {
        self.config.row_overflow = policy;
        self
    }

    pub fn bullet(mut self, bullet: impl Into<String>) -> Self {
        self.config.bullet = bullet.into();
        self
    }

    pub fn error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.config.error_sink = Some(sink);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, ConversionError> {
        let bullet = &self.config.bullet;
        if bullet.trim().is_empty() {
            return Err(ConversionError::InvalidConfig(
                "bullet must not be blank".into(),
            ));
        }
        if bullet.contains('|') || bullet.contains('\n') {
            return Err(ConversionError::InvalidConfig(format!(
                "bullet {bullet:?} would break the table row"
            )));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Policy for data rows wider than the header row.
///
/// Short rows are always padded with empty cells. Long rows are a different
/// matter: GFM renderers disagree on what a row with extra cells means, and
/// silently dropping data is not always acceptable either.
///
/// | Policy | Result for headers `A,B` and row `1,2,3` |
/// |--------|-------------------------------------------|
/// | `Preserve` | `\| 1 \| 2 \| 3 \|` (default) |
/// | `Truncate` | `\| 1 \| 2 \|` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowOverflow {
    /// Emit every cell, even past the header count. (default)
    #[default]
    Preserve,
    /// Drop cells beyond the header count.
    Truncate,
}
