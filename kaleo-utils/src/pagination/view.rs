//! Pagination control derivation strategies.

use super::envelope::PageInfo;
use super::page::display_range;

/// Maximum number of page buttons the windowed strategy renders.
const WINDOW: usize = 5;

/// One page button, 1-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    /// 1-based page number shown to the user.
    pub display: usize,
    /// Whether this is the current page.
    pub active: bool,
}

impl PageButton {
    /// Zero-based page index this button navigates to.
    pub fn target(&self) -> usize {
        self.display.saturating_sub(1)
    }
}

/// Navigation controls derived from one page envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlSet {
    /// Jump-to-first is available.
    pub can_first: bool,
    /// Previous page is available.
    pub can_prev: bool,
    /// Next page is available.
    pub can_next: bool,
    /// Jump-to-last is available.
    pub can_last: bool,
    /// 1-based inclusive "showing X to Y" range; `None` when there is
    /// nothing to show.
    pub display_range: Option<(usize, usize)>,
    /// Numbered page buttons to render; empty for the simple strategy.
    pub pages: Vec<PageButton>,
}

impl ControlSet {
    /// Whether the host should render any controls at all.
    pub fn is_empty(&self) -> bool {
        self.display_range.is_none() && self.pages.is_empty()
    }
}

/// Derive navigation controls from a page envelope.
///
/// Implementations are pure: no I/O, no state beyond the input.
pub trait PageStrategy {
    /// Compute the control set for one envelope.
    fn compute_controls(&self, info: PageInfo) -> ControlSet;
}

/// First/prev/next/last enablement plus a display range, no page buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleStrategy;

/// Simple controls plus up to five numbered page buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowedStrategy;

impl PageStrategy for SimpleStrategy {
    fn compute_controls(&self, info: PageInfo) -> ControlSet {
        if info.total_items == 0 {
            return ControlSet::default();
        }

        let first = info.page_index == 0;
        let last = info.total_pages == 0 || info.page_index + 1 >= info.total_pages;

        ControlSet {
            can_first: !first,
            can_prev: !first,
            can_next: !last,
            can_last: !last,
            display_range: display_range(info.page_index, info.page_size, info.total_items),
            pages: Vec::new(),
        }
    }
}

impl PageStrategy for WindowedStrategy {
    fn compute_controls(&self, info: PageInfo) -> ControlSet {
        let mut controls = SimpleStrategy.compute_controls(info);

        if info.total_items > 0 {
            controls.pages = window_pages(info.page_index, info.total_pages);
        }

        controls
    }
}

/// Choose the 1-based page numbers shown by the windowed strategy.
///
/// The window pins to the start while the current page is within the first
/// three, pins to the end within the last three, and otherwise centers on
/// the current page.
fn window_pages(page_index: usize, total_pages: usize) -> Vec<PageButton> {
    let display_page = page_index + 1;

    (0..total_pages.min(WINDOW))
        .map(|slot| {
            let number = if total_pages <= WINDOW || display_page <= 3 {
                slot + 1
            } else if display_page >= total_pages - 2 {
                total_pages - (WINDOW - 1) + slot
            } else {
                display_page - 2 + slot
            };

            PageButton {
                display: number,
                active: number == display_page,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(page_index: usize, page_size: usize, total_items: usize, total_pages: usize) -> PageInfo {
        PageInfo {
            page_index,
            page_size,
            total_items,
            total_pages,
        }
    }

    fn shown(controls: &ControlSet) -> Vec<usize> {
        controls.pages.iter().map(|button| button.display).collect()
    }

    fn active(controls: &ControlSet) -> usize {
        let mut active = controls.pages.iter().filter(|button| button.active);
        let number = active.next().expect("one active page").display;
        assert!(active.next().is_none(), "exactly one active page");
        number
    }

    #[test]
    fn simple_enablement_follows_first_and_last() {
        let controls = SimpleStrategy.compute_controls(info(0, 10, 35, 4));
        assert!(!controls.can_first && !controls.can_prev);
        assert!(controls.can_next && controls.can_last);
        assert_eq!(controls.display_range, Some((1, 10)));

        let controls = SimpleStrategy.compute_controls(info(3, 10, 35, 4));
        assert!(controls.can_first && controls.can_prev);
        assert!(!controls.can_next && !controls.can_last);
        assert_eq!(controls.display_range, Some((31, 35)));
    }

    #[test]
    fn simple_renders_nothing_for_empty_collection() {
        let controls = SimpleStrategy.compute_controls(info(0, 10, 0, 0));
        assert!(controls.is_empty());
        assert!(!controls.can_prev && !controls.can_next);
    }

    #[test]
    fn compute_controls_is_idempotent() {
        let envelope = info(0, 10, 0, 0);
        assert_eq!(
            SimpleStrategy.compute_controls(envelope),
            SimpleStrategy.compute_controls(envelope),
        );

        let envelope = info(2, 10, 95, 10);
        assert_eq!(
            WindowedStrategy.compute_controls(envelope),
            WindowedStrategy.compute_controls(envelope),
        );
    }

    #[test]
    fn window_pins_to_start() {
        let controls = WindowedStrategy.compute_controls(info(0, 10, 100, 10));
        assert_eq!(shown(&controls), vec![1, 2, 3, 4, 5]);
        assert_eq!(active(&controls), 1);

        let controls = WindowedStrategy.compute_controls(info(1, 10, 100, 10));
        assert_eq!(shown(&controls), vec![1, 2, 3, 4, 5]);
        assert_eq!(active(&controls), 2);
    }

    #[test]
    fn window_centers_in_the_middle() {
        let controls = WindowedStrategy.compute_controls(info(5, 10, 100, 10));
        assert_eq!(shown(&controls), vec![4, 5, 6, 7, 8]);
        assert_eq!(active(&controls), 6);
    }

    #[test]
    fn window_pins_to_end() {
        let controls = WindowedStrategy.compute_controls(info(9, 10, 100, 10));
        assert_eq!(shown(&controls), vec![6, 7, 8, 9, 10]);
        assert_eq!(active(&controls), 10);
    }

    #[test]
    fn short_collections_show_every_page() {
        for page_index in 0..3 {
            let controls = WindowedStrategy.compute_controls(info(page_index, 10, 25, 3));
            assert_eq!(shown(&controls), vec![1, 2, 3]);
            assert_eq!(active(&controls), page_index + 1);
        }
    }

    #[test]
    fn buttons_convert_back_to_zero_based() {
        let controls = WindowedStrategy.compute_controls(info(5, 10, 100, 10));
        let targets: Vec<usize> = controls.pages.iter().map(PageButton::target).collect();
        assert_eq!(targets, vec![3, 4, 5, 6, 7]);
    }
}
