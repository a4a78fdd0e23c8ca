//! Table block → header/row model.
//!
//! Header cells are taken by *text content* and sanitised immediately; data
//! cells keep their raw inner markup so [`super::format`] can rebuild inline
//! formatting and lists later. Header text is re-escaped (`&`, `<`, `>`) so it
//! reads the same as data-cell markup and never reintroduces live tags.

use super::dom::{self, DomNode, Query};
use super::sanitize::sanitize_cell;
use crate::error::TableError;

/// Raw content of one data cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawCell {
    /// Inner markup of the `<td>`.
    pub markup: String,
    /// Trimmed inner markup of every `<li>` inside the cell, in order.
    pub list_items: Vec<String>,
}

impl RawCell {
    /// A cell with no list-item elements.
    pub fn from_markup(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            list_items: Vec::new(),
        }
    }

    fn from_node<N: DomNode>(td: &N) -> Self {
        Self {
            markup: td.inner_markup(),
            list_items: td
                .find_all(Query::ListItems)
                .iter()
                .map(|li| li.inner_markup().trim().to_string())
                .collect(),
        }
    }
}

/// A table ready for cell formatting. `headers` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

/// Parse one located block with the scraper backend.
///
/// `table` is the block index, used only for error reporting.
pub fn parse_block(html: &str, table: usize) -> Result<ParsedTable, TableError> {
    let fragment = dom::parse_fragment(html);
    let root = dom::table_root(&fragment)
        .ok_or_else(|| TableError::structural(table, "no <table> element in block"))?;
    parse_table(&root, table)
}

/// Extract headers and data rows from a table element.
///
/// Headers come from `thead th`. Without any, the first body row's `td, th`
/// cells are used instead. When the table has no `<thead>` at all, that first
/// body row is skipped as data; the skip is by position, so a later row with
/// identical content is still emitted.
pub fn parse_table<N: DomNode>(root: &N, table: usize) -> Result<ParsedTable, TableError> {
    let has_head = root.find_first(Query::Head).is_some();
    let body_rows = root.find_all(Query::BodyRows);

    let mut headers: Vec<String> = root
        .find_all(Query::HeadHeaderCells)
        .iter()
        .map(header_text)
        .collect();

    if headers.is_empty() {
        if let Some(first) = body_rows.first() {
            headers = first
                .find_all(Query::RowCells)
                .iter()
                .map(header_text)
                .collect();
        }
    }

    if headers.is_empty() {
        return Err(TableError::HeaderNotFound { table });
    }

    let skip = usize::from(!has_head);
    let rows = body_rows
        .iter()
        .skip(skip)
        .map(|tr| {
            tr.find_all(Query::DataCells)
                .iter()
                .map(RawCell::from_node)
                .collect()
        })
        .collect();

    Ok(ParsedTable { headers, rows })
}

fn header_text<N: DomNode>(cell: &N) -> String {
    sanitize_cell(&html_escape::encode_text(&cell.text_content()))
}

// ── Tests ────────────────────────────────────────────────────────────────────
