//! Cell formatting: raw `<td>` markup → markdown-aware single-line text.
//!
//! Cells come in two flavours, picked by [`classify_cell`]:
//!
//! - **List-bearing** cells (markdown bullets, `**` emphasis, or `<li>`
//!   elements) are rebuilt as `• item<br>• item`.
//! - **Plain** cells get their inline tags mapped to markdown tokens.
//!
//! Both end with every tag except `<br>` stripped and the text trimmed.
//! The result still goes through [`super::sanitize::sanitize_cell`].

use super::parse::RawCell;
use super::sanitize::BREAK_MARKER;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Formatting branch for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Plain,
    ListBearing,
}

static RE_LIST_ITEM_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<li\b").unwrap());

/// Pick the formatting branch for a cell's raw markup.
///
/// `**` and `* ` (an asterisk followed by one or more spaces, which covers the
/// two- and three-space bullet forms) are markdown list/emphasis markers that
/// survived into the HTML. `<li` is an HTML list.
pub fn classify_cell(markup: &str) -> CellKind {
    if markup.contains("**") || markup.contains("* ") || RE_LIST_ITEM_TAG.is_match(markup) {
        CellKind::ListBearing
    } else {
        CellKind::Plain
    }
}

/// Format one cell. `bullet` prefixes each list item.
///
/// A list-bearing cell with no list items (e.g. `**bold** text`) is
/// formatted as a plain cell instead of coming out empty.
pub fn format_cell(cell: &RawCell, bullet: &str) -> String {
    let text = match classify_cell(&cell.markup) {
        CellKind::ListBearing => {
            let items = list_items(cell);
            if items.is_empty() {
                // `**bold**` alone is emphasis, not a list.
                inline_to_markdown(&cell.markup)
            } else {
                join_items(&items, bullet)
            }
        }
        CellKind::Plain => inline_to_markdown(&cell.markup),
    };
    strip_tags(&text).trim().to_string()
}

// ── List branch ──────────────────────────────────────────────────────────────

static RE_BULLET_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\*\s+").unwrap());

/// `<li>` contents if the cell has any, otherwise markdown `* ` lines.
fn list_items(cell: &RawCell) -> Vec<String> {
    if !cell.list_items.is_empty() {
        return cell.list_items.clone();
    }
    cell.markup
        .split('\n')
        .map(str::trim)
        .filter_map(|line| {
            RE_BULLET_PREFIX
                .find(line)
                .map(|prefix| line[prefix.end()..].to_string())
        })
        .collect()
}

/// `**…**` and `_…_` inside items are left as they are.
fn join_items(items: &[String], bullet: &str) -> String {
    items
        .iter()
        .map(|item| format!("{bullet} {item}"))
        .collect::<Vec<_>>()
        .join(BREAK_MARKER)
}

// ── Plain branch ─────────────────────────────────────────────────────────────

static RE_BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?(?:strong|b)(?:\s[^>]*)?>").unwrap());
static RE_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?(?:em|i)(?:\s[^>]*)?>").unwrap());
static RE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"<br\s*/?>").unwrap());
static RE_PARA_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<p(?:\s[^>]*)?>").unwrap());

fn inline_to_markdown(markup: &str) -> String {
    let s = RE_BOLD.replace_all(markup, "**");
    let s = RE_ITALIC.replace_all(&s, "_");
    let s = RE_BREAK.replace_all(&s, BREAK_MARKER);
    let s = RE_PARA_OPEN.replace_all(&s, "");
    s.replace("</p>", BREAK_MARKER)
}

// ── Tag stripping ────────────────────────────────────────────────────────────

static RE_ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Remove every tag except `<br …>` / `</br>`.
fn strip_tags(text: &str) -> String {
    RE_ANY_TAG
        .replace_all(text, |caps: &Captures<'_>| {
            let tag = &caps[0];
            if is_break_tag(tag) {
                tag.to_string()
            } else {
                String::new()
            }
        })
        .to_string()
}

fn is_break_tag(tag: &str) -> bool {
    let name = tag.trim_start_matches('<');
    let name = name.strip_prefix('/').unwrap_or(name);
    match name.strip_prefix("br") {
        Some(rest) => !rest
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_'),
        None => false,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
