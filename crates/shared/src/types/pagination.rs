//! Client-side pagination over already-fetched lists.

use serde::{Deserialize, Serialize};

/// One page of a sliced result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items in the current page.
    pub items: Vec<T>,
    /// The page actually served, after clamping.
    pub current_page: usize,
    /// Total number of pages; never zero.
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Returns true if a previous page exists.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Returns true if a next page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Slices `items` into the requested page.
///
/// `total_pages` is `max(1, ceil(len / page_size))` and the requested page
/// is clamped into `[1, total_pages]`, so out-of-range requests serve the
/// nearest valid page instead of an empty one. A zero `page_size` is
/// treated as 1.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page_size: usize, requested_page: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let current_page = requested_page.clamp(1, total_pages);

    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    let items = if start < items.len() {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items,
        current_page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_input_yields_single_empty_page() {
        let page = paginate::<i32>(&[], 10, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn empty_input_clamps_any_requested_page() {
        let page = paginate::<i32>(&[], 10, 500);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn out_of_range_request_clamps_to_last_page() {
        let items: Vec<i32> = (0..25).collect();
        let page = paginate(&items, 10, 999);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.items, vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn zero_or_negative_page_clamps_to_first() {
        let items: Vec<i32> = (0..5).collect();
        let page = paginate(&items, 2, 0);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.items, vec![0, 1]);
    }

    #[rstest]
    #[case(1, vec![0, 1, 2])]
    #[case(2, vec![3, 4, 5])]
    #[case(3, vec![6])]
    fn slices_interior_pages(#[case] requested: usize, #[case] expected: Vec<i32>) {
        let items: Vec<i32> = (0..7).collect();
        let page = paginate(&items, 3, requested);
        assert_eq!(page.current_page, requested);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, expected);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let items: Vec<i32> = (0..20).collect();
        let page = paginate(&items, 10, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 10);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn zero_page_size_degrades_to_one() {
        let items: Vec<i32> = (0..3).collect();
        let page = paginate(&items, 0, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.items, vec![1]);
    }
}
