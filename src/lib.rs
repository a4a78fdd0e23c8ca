//! # edgequake-table2md
//!
//! Convert HTML `<table>` blocks embedded in a Markdown document into GFM
//! pipe tables, leaving everything else byte-for-byte untouched.
//!
//! ## Why this crate?
//!
//! Ingestion pipelines (VLM page transcription, web scraping, office export)
//! regularly emit Markdown with raw HTML tables mixed in, because the source
//! had merged cells or the model fell back to HTML. Downstream tools such as
//! chunkers, embedders and diffing expect pure Markdown. This crate rewrites
//! just the tables, including inline emphasis and lists inside cells, and never
//! fails: a table it cannot handle stays as HTML.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown + HTML
//!  │
//!  ├─ 1. Locate    linear scan for <table>…</table> blocks
//!  ├─ 2. Parse     html5ever tree → headers + raw cell markup
//!  ├─ 3. Format    <b>/<em>/<p>/<br>/<li> → markdown tokens
//!  ├─ 4. Sanitize  escape pipes, normalise <br>, un-escape markdown
//!  ├─ 5. Render    | h | header, | --- | separator, padded rows
//!  └─ 6. Splice    rendered table replaces the block at its byte span
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use edgequake_table2md::convert;
//!
//! let doc = "Intro\n\n<table><tr><td>Name</td><td>Qty</td></tr>\
//!            <tr><td>Apple</td><td><b>3</b></td></tr></table>\n";
//! let md = convert(doc);
//! assert_eq!(md, "Intro\n\n| Name | Qty |\n| --- | --- |\n| Apple | **3** |\n\n");
//! ```
//!
//! For statistics and per-table failures use [`convert_with_report`]; to
//! route failures somewhere other than `tracing`, configure an [`ErrorSink`].

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod sink;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, RowOverflow};
pub use convert::{convert, convert_with, convert_with_report};
pub use error::{ConversionError, TableError};
pub use output::{ConversionOutput, ConversionStats, TableFailure};
pub use pipeline::format::{classify_cell, CellKind};
pub use pipeline::locate::{locate_tables, TableBlock};
pub use sink::{ErrorContext, ErrorSink, NoopSink, SharedErrorSink, TracingSink};
