//! # Pagination Windowing
//!
//! Produces the compressed page-number sequence shown under paginated
//! tables: first and last page always visible, a sliding window of three
//! pages around the current page, ellipsis markers where gaps exist.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total = 9                                                              │
//! │                                                                         │
//! │  current = 1   →  [ 1 ][ 2 ][ 3 ][ 4 ] … [ 9 ]                          │
//! │  current = 5   →  [ 1 ] … [ 4 ][ 5 ][ 6 ] … [ 9 ]                       │
//! │  current = 9   →  [ 1 ] … [ 6 ][ 7 ][ 8 ][ 9 ]                          │
//! │                                                                         │
//! │  total ≤ 5     →  every page, no ellipsis                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The window is clamped to `[2, total-1]` and shifted near the
//! boundaries so it always spans exactly three pages when `total > 5`.

use serde::{Deserialize, Serialize};

/// One slot in the rendered page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageItem {
    /// A clickable page number (1-based).
    Page(u32),
    /// A gap marker ("…"), never adjacent to another gap.
    Ellipsis,
}

/// Computes the page strip for `current` of `total` pages.
///
/// `current` outside `[1, total]` is clamped before windowing, so a
/// stale current page after a deletion still renders something sane.
///
/// ## Example
/// ```rust
/// use stockbook_core::paging::{page_items, PageItem};
///
/// let strip = page_items(5, 9);
/// assert_eq!(strip[0], PageItem::Page(1));
/// assert_eq!(strip[1], PageItem::Ellipsis);
/// assert_eq!(strip.last(), Some(&PageItem::Page(9)));
/// ```
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }

    // Small totals show everything.
    if total <= 5 {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);

    // Three-wide window inside [2, total-1], shifted at the edges so it
    // never collapses below three pages.
    let (window_start, window_end) = if current <= 3 {
        (2, 4)
    } else if current >= total - 2 {
        (total - 3, total - 1)
    } else {
        (current - 1, current + 1)
    };

    let mut items = Vec::with_capacity(7);
    items.push(PageItem::Page(1));

    if window_start > 2 {
        items.push(PageItem::Ellipsis);
    }

    items.extend((window_start..=window_end).map(PageItem::Page));

    if window_end < total - 1 {
        items.push(PageItem::Ellipsis);
    }

    items.push(PageItem::Page(total));
    items
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(items: &[PageItem]) -> Vec<u32> {
        items
            .iter()
            .filter_map(|item| match item {
                PageItem::Page(n) => Some(*n),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_zero_pages_is_empty() {
        assert!(page_items(1, 0).is_empty());
    }

    #[test]
    fn test_small_totals_show_every_page() {
        for total in 1..=5 {
            let items = page_items(1, total);
            let expected: Vec<u32> = (1..=total).collect();
            assert_eq!(pages(&items), expected, "total={total}");
            assert!(!items.contains(&PageItem::Ellipsis));
        }
    }

    #[test]
    fn test_window_at_start() {
        let items = page_items(1, 9);
        assert_eq!(
            items,
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Ellipsis,
                PageItem::Page(9),
            ]
        );
    }

    #[test]
    fn test_window_in_middle() {
        let items = page_items(5, 9);
        assert_eq!(
            items,
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Ellipsis,
                PageItem::Page(9),
            ]
        );
    }

    #[test]
    fn test_window_at_end() {
        let items = page_items(9, 9);
        assert_eq!(
            items,
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(6),
                PageItem::Page(7),
                PageItem::Page(8),
                PageItem::Page(9),
            ]
        );
    }

    #[test]
    fn test_current_is_clamped() {
        assert_eq!(page_items(0, 9), page_items(1, 9));
        assert_eq!(page_items(99, 9), page_items(9, 9));
    }

    /// The boundary properties, checked exhaustively over a range:
    /// first/last always present, numbers strictly ascending, and no
    /// adjacent pair of numbers differs by more than 1 without an
    /// ellipsis between them.
    #[test]
    fn test_strip_properties_exhaustive() {
        for total in 6..40 {
            for current in 1..=total {
                let items = page_items(current, total);
                let nums = pages(&items);

                assert_eq!(nums.first(), Some(&1), "total={total} current={current}");
                assert_eq!(nums.last(), Some(&total), "total={total} current={current}");
                assert!(
                    nums.contains(&current),
                    "total={total} current={current} missing current"
                );
                assert!(nums.windows(2).all(|w| w[0] < w[1]));

                // Any numeric jump must be bridged by an ellipsis slot.
                for pair in items.windows(2) {
                    if let (PageItem::Page(a), PageItem::Page(b)) = (pair[0], pair[1]) {
                        assert_eq!(b - a, 1, "total={total} current={current} gap {a}..{b}");
                    }
                }

                // Ellipses never touch each other.
                assert!(!items
                    .windows(2)
                    .any(|w| w[0] == PageItem::Ellipsis && w[1] == PageItem::Ellipsis));
            }
        }
    }
}
