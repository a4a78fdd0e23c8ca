//! Conversion entry points.
//!
//! All three functions run the same pipeline; they differ only in how much
//! they tell the caller:
//!
//! | Function | Returns |
//! |----------|---------|
//! | [`convert`] | converted text, default config |
//! | [`convert_with`] | converted text, caller's config |
//! | [`convert_with_report`] | text + [`ConversionStats`] + per-table failures |
//!
//! None of them fail or panic. A block that cannot be converted stays as
//! HTML; if the scan/substitution pass itself goes wrong the input comes back
//! unchanged. Either way the configured [`crate::sink::ErrorSink`] is told.

use crate::config::ConversionConfig;
use crate::error::{ConversionError, TableError};
use crate::output::{ConversionOutput, ConversionStats, TableFailure};
use crate::pipeline::{format, locate, parse, render, sanitize};
use crate::sink::{self, ErrorContext, DOCUMENT_FAILURE_MESSAGE, TABLE_FAILURE_MESSAGE};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;
use tracing::{debug, info};

/// Replace every convertible HTML table in `document` with a markdown table.
///
/// # Example
/// ```rust
/// let md = edgequake_table2md::convert(
///     "<table><thead><tr><th>A</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>",
/// );
/// assert_eq!(md, "| A |\n| --- |\n| 1 |\n");
/// ```
pub fn convert(document: &str) -> String {
    convert_with(document, &ConversionConfig::default())
}

/// [`convert`] with an explicit configuration.
pub fn convert_with(document: &str, config: &ConversionConfig) -> String {
    convert_with_report(document, config).markdown
}

/// Convert and return statistics plus the list of skipped blocks.
pub fn convert_with_report(document: &str, config: &ConversionConfig) -> ConversionOutput {
    let started = Instant::now();

    // ── Fast path: nothing that could be a table ─────────────────────────
    if !locate::contains_table(document) {
        return ConversionOutput {
            markdown: document.to_string(),
            stats: ConversionStats {
                duration_us: elapsed_us(started),
                ..Default::default()
            },
            failures: Vec::new(),
        };
    }

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| convert_document(document, config)))
        .unwrap_or_else(|payload| {
            Err(ConversionError::WholeDocument {
                detail: panic_message(&*payload),
            })
        });

    let mut output = match outcome {
        Ok(output) => output,
        Err(err) => {
            debug!("Returning document unmodified: {}", err);
            sink::deliver(
                config.error_sink.as_ref(),
                DOCUMENT_FAILURE_MESSAGE,
                &ErrorContext {
                    table: None,
                    offset: None,
                    error: err.to_string(),
                },
            );
            ConversionOutput {
                markdown: document.to_string(),
                stats: ConversionStats {
                    document_fallback: true,
                    ..Default::default()
                },
                failures: Vec::new(),
            }
        }
    };

    output.stats.duration_us = elapsed_us(started);
    info!(
        "Table conversion complete: {}/{} tables converted, {}us",
        output.stats.tables_converted, output.stats.tables_found, output.stats.duration_us
    );
    output
}

/// Scan, convert each block, and splice results at the original byte spans.
fn convert_document(
    document: &str,
    config: &ConversionConfig,
) -> Result<ConversionOutput, ConversionError> {
    let blocks = locate::locate_tables(document);
    debug!("Located {} table blocks", blocks.len());

    let mut markdown = String::with_capacity(document.len());
    let mut stats = ConversionStats {
        tables_found: blocks.len(),
        ..Default::default()
    };
    let mut failures = Vec::new();
    let mut cursor = 0;

    for (index, block) in blocks.iter().enumerate() {
        let before = document
            .get(cursor..block.start)
            .ok_or_else(|| ConversionError::WholeDocument {
                detail: format!(
                    "table {index} at byte {} overlaps the previous block ending at {cursor}",
                    block.start
                ),
            })?;
        markdown.push_str(before);

        match convert_block(block.html, index, config) {
            Ok(table) => {
                debug!("Table {} converted ({} bytes)", index, table.len());
                markdown.push_str(&table);
                stats.tables_converted += 1;
            }
            Err(error) => {
                debug!("Leaving table {} at byte {} as HTML: {}", index, block.start, error);
                sink::deliver(
                    config.error_sink.as_ref(),
                    TABLE_FAILURE_MESSAGE,
                    &ErrorContext {
                        table: Some(index),
                        offset: Some(block.start),
                        error: error.to_string(),
                    },
                );
                markdown.push_str(block.html);
                stats.tables_skipped += 1;
                failures.push(TableFailure {
                    offset: block.start,
                    error,
                });
            }
        }
        cursor = block.end;
    }

    let rest = document
        .get(cursor..)
        .ok_or_else(|| ConversionError::WholeDocument {
            detail: format!("last table ends at byte {cursor}, past the document end"),
        })?;
    markdown.push_str(rest);

    Ok(ConversionOutput {
        markdown,
        stats,
        failures,
    })
}

/// Convert one block. A panic anywhere in parse/format/render aborts the
/// block, not the document.
fn convert_block(html: &str, index: usize, config: &ConversionConfig) -> Result<String, TableError> {
    panic::catch_unwind(AssertUnwindSafe(|| -> Result<String, TableError> {
        let table = parse::parse_block(html, index)?;
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| sanitize::sanitize_cell(&format::format_cell(cell, &config.bullet)))
                    .collect()
            })
            .collect();
        Ok(render::render_table(&table.headers, &rows, config.row_overflow))
    }))
    .unwrap_or_else(|payload| Err(TableError::structural(index, panic_message(&*payload))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected panic".to_string()
    }
}

fn elapsed_us(started: Instant) -> u64 {
    started.elapsed().as_micros() as u64
}

// ── Tests ────────────────────────────────────────────────────────────────────
