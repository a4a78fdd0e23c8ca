//! Table block discovery.
//!
//! Finds every `<table …>…</table>` region in a document with a single
//! forward scan. A backtracking regex such as `<table[^>]*>[\s\S]*?</table>`
//! is avoided on purpose: the scanner below never revisits a byte it has
//! already passed, so hostile input (thousands of unterminated `<table`
//! openers, a missing `</table>`) costs time linear in its length.
//!
//! Matching rules:
//! - The opening tag is `<table>` or `<table` + whitespace + attributes + `>`.
//!   `<tablex>` or `<table/>` are not openers. Tag names are lower case.
//! - The first `</table>` after the opener ends the block. Nested tables are
//!   not supported; their block boundaries are whatever this rule yields.
//! - Blocks never overlap; scanning resumes after each closing tag.

const OPEN_TAG: &str = "<table";
const CLOSE_TAG: &str = "</table>";

/// One `<table>` region of the input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBlock<'a> {
    /// Byte offset of the `<` of the opening tag.
    pub start: usize,
    /// Byte offset one past the `>` of the closing tag.
    pub end: usize,
    /// Exact original text, `&document[start..end]`.
    pub html: &'a str,
}

/// Cheap pre-check: can `document` contain a table block at all?
pub fn contains_table(document: &str) -> bool {
    document.contains(OPEN_TAG)
}

/// Locate all table blocks in document order.
pub fn locate_tables(document: &str) -> Vec<TableBlock<'_>> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(rel) = document[cursor..].find(OPEN_TAG) {
        let start = cursor + rel;
        let after_name = start + OPEN_TAG.len();

        let body_start = match opening_tag_end(document, after_name) {
            OpeningTag::Complete(end) => end,
            OpeningTag::NotATable => {
                cursor = after_name;
                continue;
            }
            // No `>` anywhere ahead: no later opener can complete either.
            OpeningTag::Unterminated => break,
        };

        // No `</table>` ahead: nothing after this point can form a block.
        let Some(close_rel) = document[body_start..].find(CLOSE_TAG) else {
            break;
        };
        let end = body_start + close_rel + CLOSE_TAG.len();

        blocks.push(TableBlock {
            start,
            end,
            html: &document[start..end],
        });
        cursor = end;
    }

    blocks
}

enum OpeningTag {
    /// Offset one past the closing `>`.
    Complete(usize),
    NotATable,
    Unterminated,
}

fn opening_tag_end(document: &str, after_name: usize) -> OpeningTag {
    let rest = &document[after_name..];
    match rest.chars().next() {
        Some('>') => OpeningTag::Complete(after_name + 1),
        Some(c) if c.is_whitespace() => match rest.find('>') {
            Some(i) => OpeningTag::Complete(after_name + i + 1),
            None => OpeningTag::Unterminated,
        },
        Some(_) => OpeningTag::NotATable,
        None => OpeningTag::Unterminated,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(doc: &str) -> Vec<&str> {
        locate_tables(doc).into_iter().map(|b| b.html).collect()
    }

    #[test]
    fn test_no_table() {
        assert!(locate_tables("# Title\n\nplain text").is_empty());
        assert!(!contains_table("# Title"));
    }

    #[test]
    fn test_single_block_offsets() {
        let doc = "before <table><tr><td>1</td></tr></table> after";
        let blocks = locate_tables(doc);
        assert_eq!(blocks.len(), 1);
        let b = blocks[0];
        assert_eq!(b.start, 7);
        assert_eq!(&doc[b.start..b.end], b.html);
        assert!(b.html.starts_with("<table>"));
        assert!(b.html.ends_with("</table>"));
    }

    #[test]
    fn test_attributes_and_newlines_in_opener() {
        let doc = "<table\n  class=\"data\" border=\"1\"><tr><td>x</td></tr></table>";
        assert_eq!(spans(doc), vec![doc]);
    }

    #[test]
    fn test_lookalike_tags_ignored() {
        assert!(locate_tables("<tablex>a</table>").is_empty());
        assert!(locate_tables("<table/>a</table>").is_empty());
    }

    #[test]
    fn test_lookalike_then_real_table() {
        let doc = "<tablet> <table>a</table>";
        assert_eq!(spans(doc), vec!["<table>a</table>"]);
    }

    #[test]
    fn test_missing_close_tag() {
        assert!(locate_tables("<table><tr><td>1</td></tr>").is_empty());
    }

    #[test]
    fn test_unterminated_opener() {
        assert!(locate_tables("text <table class=\"x\" and no end").is_empty());
    }

    #[test]
    fn test_two_blocks_in_order() {
        let doc = "<table>a</table>\n\nmid\n\n<table id=\"t2\">b</table>";
        assert_eq!(
            spans(doc),
            vec!["<table>a</table>", "<table id=\"t2\">b</table>"]
        );
    }

    #[test]
    fn test_first_close_wins() {
        let doc = "<table><tr><td><table>inner</table></td></tr></table>";
        assert_eq!(spans(doc), vec!["<table><tr><td><table>inner</table>"]);
    }

    #[test]
    fn test_malformed_then_wellformed() {
        // The first opener pairs with the only closing tag.
        let doc = "<table>broken\n<table>ok</table>";
        assert_eq!(spans(doc), vec![doc]);
    }

    #[test]
    fn test_multibyte_text_around_blocks() {
        let doc = "日本語 <table>é</table> ü";
        let blocks = locate_tables(doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].html, "<table>é</table>");
    }

    #[test]
    fn test_adversarial_openers_are_fast() {
        let doc = "<table ".repeat(200_000);
        let started = std::time::Instant::now();
        assert!(locate_tables(&doc).is_empty());
        assert!(started.elapsed().as_secs() < 5);
    }
}
