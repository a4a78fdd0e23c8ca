//! Pipeline stages for HTML-table-to-Markdown conversion.
//!
//! Each submodule implements exactly one transformation step, as a pure
//! function with no shared state, so every stage is testable on its own.
//!
//! ## Data Flow
//!
//! ```text
//! document ──▶ locate ──▶ parse ──▶ format ──▶ sanitize ──▶ render
//!              (blocks)   (dom)     (per cell)  (per cell)   (GFM table)
//! ```
//!
//! 1. [`locate`]   — find `<table>…</table>` blocks with a linear scan
//! 2. [`dom`]      — minimal DOM capability trait + scraper backend
//! 3. [`parse`]    — headers by text content, data cells as raw markup
//! 4. [`format`]   — inline tags → markdown tokens, lists → `• item<br>…`
//! 5. [`sanitize`] — pipe escaping, break markers, markdown un-escaping
//! 6. [`render`]   — header, separator and padded data rows

pub mod dom;
pub mod format;
pub mod locate;
pub mod parse;
pub mod render;
pub mod sanitize;
