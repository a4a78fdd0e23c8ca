//! Minimal DOM capability used by the table parser.
//!
//! The parser only ever needs three things from an HTML tree: descendant
//! lookup for a handful of fixed queries, the text content of an element, and
//! its inner markup. [`DomNode`] captures exactly that, so the parsing rules
//! in [`super::parse`] do not depend on a particular HTML library.
//!
//! The production backend is [`scraper`] (html5ever + CSS selectors). As in a
//! browser DOM, html5ever inserts the implicit `<tbody>` around rows written
//! directly under `<table>`, which is what the header-fallback rule relies on.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

/// The fixed set of lookups the parser performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// `thead`
    Head,
    /// `thead th`
    HeadHeaderCells,
    /// `tbody tr`
    BodyRows,
    /// `td, th`
    RowCells,
    /// `td`
    DataCells,
    /// `li`
    ListItems,
}

impl Query {
    /// CSS selector text for this query.
    pub fn css(self) -> &'static str {
        match self {
            Query::Head => "thead",
            Query::HeadHeaderCells => "thead th",
            Query::BodyRows => "tbody tr",
            Query::RowCells => "td, th",
            Query::DataCells => "td",
            Query::ListItems => "li",
        }
    }
}

/// Element-level operations the parser needs.
pub trait DomNode: Sized {
    /// All descendants matching `query`, in document order.
    fn find_all(&self, query: Query) -> Vec<Self>;

    /// First descendant matching `query`.
    fn find_first(&self, query: Query) -> Option<Self> {
        self.find_all(query).into_iter().next()
    }

    /// Concatenated text of all descendant text nodes.
    fn text_content(&self) -> String;

    /// Serialised markup of the element's children.
    fn inner_markup(&self) -> String;
}

// ── scraper backend ──────────────────────────────────────────────────────────

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static HEAD: Lazy<Selector> = Lazy::new(|| Selector::parse(Query::Head.css()).unwrap());
static HEAD_HEADER_CELLS: Lazy<Selector> =
    Lazy::new(|| Selector::parse(Query::HeadHeaderCells.css()).unwrap());
static BODY_ROWS: Lazy<Selector> = Lazy::new(|| Selector::parse(Query::BodyRows.css()).unwrap());
static ROW_CELLS: Lazy<Selector> = Lazy::new(|| Selector::parse(Query::RowCells.css()).unwrap());
static DATA_CELLS: Lazy<Selector> =
    Lazy::new(|| Selector::parse(Query::DataCells.css()).unwrap());
static LIST_ITEMS: Lazy<Selector> =
    Lazy::new(|| Selector::parse(Query::ListItems.css()).unwrap());

fn selector(query: Query) -> &'static Selector {
    match query {
        Query::Head => &*HEAD,
        Query::HeadHeaderCells => &*HEAD_HEADER_CELLS,
        Query::BodyRows => &*BODY_ROWS,
        Query::RowCells => &*ROW_CELLS,
        Query::DataCells => &*DATA_CELLS,
        Query::ListItems => &*LIST_ITEMS,
    }
}

impl<'a> DomNode for ElementRef<'a> {
    fn find_all(&self, query: Query) -> Vec<Self> {
        self.select(selector(query)).collect()
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn inner_markup(&self) -> String {
        self.inner_html()
    }
}

/// Parse one table block as an HTML fragment.
pub fn parse_fragment(html: &str) -> Html {
    Html::parse_fragment(html)
}

/// The first `<table>` element of a parsed fragment.
pub fn table_root(fragment: &Html) -> Option<ElementRef<'_>> {
    fragment.select(&TABLE).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_query_selector_parses() {
        for q in [
            Query::Head,
            Query::HeadHeaderCells,
            Query::BodyRows,
            Query::RowCells,
            Query::DataCells,
            Query::ListItems,
        ] {
            // Forces the Lazy; panics if a selector is invalid.
            let _ = selector(q);
        }
    }

    #[test]
    fn implicit_tbody_is_inserted() {
        let fragment = parse_fragment("<table><tr><td>a</td></tr></table>");
        let table = table_root(&fragment).unwrap();
        assert_eq!(table.find_all(Query::BodyRows).len(), 1);
        assert!(table.find_first(Query::Head).is_none());
    }

    #[test]
    fn text_and_inner_markup() {
        let fragment = parse_fragment("<table><tr><td>a <b>b</b> c</td></tr></table>");
        let table = table_root(&fragment).unwrap();
        let td = table.find_first(Query::DataCells).unwrap();
        assert_eq!(td.text_content(), "a b c");
        assert_eq!(td.inner_markup(), "a <b>b</b> c");
    }

    #[test]
    fn no_table_in_fragment() {
        let fragment = parse_fragment("<div>nothing</div>");
        assert!(table_root(&fragment).is_none());
    }
}
