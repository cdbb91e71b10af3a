//! Wire-format page envelopes returned by the list endpoints.
//!
//! The service has shipped two shapes for the same data: a legacy flat
//! object with the counters at the top level, and a newer shape nesting
//! them under a `page` object. Both normalize into the same
//! [`Page`] envelope.

use serde::Deserialize;

use kaleo_utils::pagination::Page;

/// Counter object of the nested wire shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCounters {
    /// Zero-based page number.
    pub number: usize,
    /// Requested page size.
    pub size: usize,
    /// Total item count across all pages.
    pub total_elements: usize,
    /// Total page count.
    pub total_pages: usize,
}

/// Nested shape: `{ "content": [...], "page": { ... } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct NestedPage<T> {
    /// Items for this page.
    pub content: Vec<T>,
    /// Pagination counters.
    pub page: PageCounters,
}

/// Legacy flat shape with the counters alongside the content.
///
/// Extra bookkeeping fields the server sends (`first`, `last`,
/// `numberOfElements`, `empty`, sort metadata) are derivable from the
/// counters and ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPage<T> {
    /// Items for this page.
    pub content: Vec<T>,
    /// Zero-based page number.
    pub number: usize,
    /// Requested page size.
    pub size: usize,
    /// Total item count across all pages.
    pub total_elements: usize,
    /// Total page count.
    pub total_pages: usize,
}

/// A list response in either wire shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PageWire<T> {
    /// Newer shape with a nested `page` object.
    Nested(NestedPage<T>),
    /// Legacy flat shape.
    Legacy(LegacyPage<T>),
}

impl<T> PageWire<T> {
    /// Normalize either wire shape into the same envelope.
    pub fn normalize(self) -> Page<T> {
        match self {
            PageWire::Nested(nested) => Page::new(
                nested.content,
                nested.page.number,
                nested.page.size,
                nested.page.total_elements,
                nested.page.total_pages,
            ),
            PageWire::Legacy(legacy) => Page::new(
                legacy.content,
                legacy.number,
                legacy.size,
                legacy.total_elements,
                legacy.total_pages,
            ),
        }
    }
}
