//! Helpers for rendering page controls.
//!
//! The store keeps `current_page` verbatim; these helpers are what a view uses
//! to keep navigation inside `[1, total_pages]`.

use serde::Serialize;

/// Pages shown on each side of the current page before collapsing into a gap.
const WINDOW: usize = 2;

/// One slot in the page bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageItem {
    Page(usize),
    Gap,
}

/// Page numbers to render: first and last always, a window of two pages around
/// `current`, and a [`PageItem::Gap`] wherever pages are skipped.
///
/// Returns nothing when there is at most one page (controls are hidden).
pub fn visible_pages(current: usize, total: usize) -> Vec<PageItem> {
    if total <= 1 {
        return Vec::new();
    }

    let lo = current.saturating_sub(WINDOW).max(2);
    let hi = current.saturating_add(WINDOW).min(total - 1);

    let mut items = vec![PageItem::Page(1)];
    if current.saturating_sub(WINDOW) > 2 {
        items.push(PageItem::Gap);
    }
    items.extend((lo..=hi).map(PageItem::Page));
    if current.saturating_add(WINDOW) < total - 1 {
        items.push(PageItem::Gap);
    }
    items.push(PageItem::Page(total));
    items
}

pub fn should_paginate(total_pages: usize) -> bool {
    total_pages > 1
}

pub fn has_previous(current: usize) -> bool {
    current > 1
}

pub fn has_next(current: usize, total_pages: usize) -> bool {
    current < total_pages
}

/// "Showing `first` to `last` of `total` events".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl PageSummary {
    /// Out-of-range pages clip to `total` instead of overflowing.
    pub fn new(current: usize, per_page: usize, total: usize) -> Self {
        let start = current.saturating_sub(1).saturating_mul(per_page);
        Self {
            first: start.saturating_add(1).min(total),
            last: start.saturating_add(per_page).min(total),
            total,
        }
    }
}

impl core::fmt::Display for PageSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} events",
            self.first, self.last, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Gap, Page};

    #[test]
    fn single_page_hides_controls() {
        assert!(visible_pages(1, 0).is_empty());
        assert!(visible_pages(1, 1).is_empty());
        assert!(!should_paginate(1));
        assert!(should_paginate(2));
    }

    #[test]
    fn small_totals_show_every_page() {
        assert_eq!(visible_pages(1, 2), [Page(1), Page(2)]);
        assert_eq!(visible_pages(3, 5), [Page(1), Page(2), Page(3), Page(4), Page(5)]);
    }

    #[test]
    fn gaps_appear_away_from_the_current_page() {
        assert_eq!(
            visible_pages(1, 10),
            [Page(1), Page(2), Page(3), Gap, Page(10)]
        );
        assert_eq!(
            visible_pages(6, 10),
            [Page(1), Gap, Page(4), Page(5), Page(6), Page(7), Page(8), Gap, Page(10)]
        );
        assert_eq!(
            visible_pages(10, 10),
            [Page(1), Gap, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn page_far_past_the_end_does_not_overflow() {
        assert_eq!(visible_pages(usize::MAX, 3), [Page(1), Gap, Page(3)]);
        assert_eq!(
            PageSummary::new(usize::MAX, 12, 18),
            PageSummary { first: 18, last: 18, total: 18 }
        );
    }

    #[test]
    fn navigation_bounds() {
        assert!(!has_previous(1));
        assert!(has_previous(2));
        assert!(has_next(1, 2));
        assert!(!has_next(2, 2));
    }

    #[test]
    fn summary_clips_last_page() {
        let summary = PageSummary::new(2, 12, 15);
        assert_eq!(summary, PageSummary { first: 13, last: 15, total: 15 });
        assert_eq!(summary.to_string(), "Showing 13 to 15 of 15 events");
        assert_eq!(PageSummary::new(1, 12, 40).to_string(), "Showing 1 to 12 of 40 events");
    }
}
