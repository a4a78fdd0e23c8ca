//! Markdown table assembly.
//!
//! Output shape (every line ends with `\n`):
//!
//! ```text
//! | A | B |
//! | --- | --- |
//! | 1 | 2 |
//! ```

use crate::config::RowOverflow;

const SEPARATOR_CELL: &str = "---";

/// Render headers and already-sanitised rows as a GFM pipe table.
///
/// Rows shorter than `headers` are padded on the right with empty cells.
/// Longer rows are handled per `overflow`.
pub fn render_table(headers: &[String], rows: &[Vec<String>], overflow: RowOverflow) -> String {
    let width = headers.len();
    let mut out = String::with_capacity(64 * (rows.len() + 2));

    push_row(&mut out, headers.iter().map(String::as_str));
    push_row(&mut out, std::iter::repeat_n(SEPARATOR_CELL, width));

    for row in rows {
        let kept = match overflow {
            RowOverflow::Preserve => row.len(),
            RowOverflow::Truncate => row.len().min(width),
        };
        let padding = width.saturating_sub(row.len());
        push_row(
            &mut out,
            row[..kept]
                .iter()
                .map(String::as_str)
                .chain(std::iter::repeat_n("", padding)),
        );
    }

    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(cell);
        out.push_str(" |");
    }
    out.push('\n');
}

// ── Tests ────────────────────────────────────────────────────────────────────
