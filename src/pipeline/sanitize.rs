//! Final escaping pass applied to every header and data cell.

/// The token that stands for a line break inside a single-line table cell.
pub const BREAK_MARKER: &str = "<br>";

/// Make formatted cell text safe to place between two `|` delimiters.
///
/// Steps, in order:
/// 1. trim
/// 2. escape `|` as `\|`
/// 3. raw newlines become `<br>`
/// 4. entity-encoded `&lt;br&gt;` is restored to `<br>`
/// 5. backslash-escaped markdown (`\*\*`, `\*`, `\_`) is un-escaped
pub fn sanitize_cell(content: &str) -> String {
    content
        .trim()
        .replace('|', "\\|")
        .replace('\n', BREAK_MARKER)
        .replace("&lt;br&gt;", BREAK_MARKER)
        .replace("\\*\\*", "**")
        .replace("\\*", "*")
        .replace("\\_", "_")
}
