//! Pure pagination math shared by strategies and screens.

/// Compute the number of pages for a paginated collection.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Clamp a zero-based page index into the valid range for a page count.
///
/// A page count of zero clamps everything to page zero.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages.saturating_sub(1))
}

/// Return the 1-based inclusive item range a page shows, or `None` when the
/// page has nothing to show (empty collection, or a page past the data).
pub fn display_range(
    page_index: usize,
    page_size: usize,
    total_items: usize,
) -> Option<(usize, usize)> {
    if total_items == 0 {
        return None;
    }

    let start = page_index.checked_mul(page_size)?.checked_add(1)?;
    let end = ((page_index + 1).saturating_mul(page_size)).min(total_items);

    if start > end {
        return None;
    }

    Some((start, end))
}
