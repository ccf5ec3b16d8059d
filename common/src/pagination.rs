//! Page slicing and the compact page-number window.
//!
//! Pages are 1-based. Out-of-range page requests are clamped into
//! `[1, total_pages]` and the corrected page is reported back.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::list_const::PAGE_WINDOW_NEIGHBORS;


/// `max(1, ceil(item_count / page_size))`; a zero page size counts as 1.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// The page actually served, after clamping.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based position of the first item of this page in the whole list.
    pub fn first_item_number(&self) -> usize {
        (self.page - 1) * self.page_size.max(1) + 1
    }
}

/// Slice `[(page-1)*page_size, page*page_size)` of `filtered`, clamped to
/// its length. Short or empty on the last page and on an empty list.
pub fn paginate<T: Clone>(filtered: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(filtered.len(), page_size);
    let page = clamp_page(page, total_pages);
    let start = ((page - 1) * page_size).min(filtered.len());
    let end = (start + page_size).min(filtered.len());
    Page {
        items: filtered[start..end].to_vec(),
        page,
        page_size,
        total_pages,
        total_items: filtered.len(),
    }
}


/// One control of the page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PageWindowItem {
    Page(usize),
    Ellipsis,
}

/// First page, last page and the current page with one neighbour on each
/// side, with an ellipsis wherever consecutive entries skip pages.
pub fn page_window(current: usize, total: usize) -> Vec<PageWindowItem> {
    page_window_with_neighbors(current, total, PAGE_WINDOW_NEIGHBORS)
}

pub fn page_window_with_neighbors(current: usize, total: usize, neighbors: usize) -> Vec<PageWindowItem> {
    let total = total.max(1);
    let current = clamp_page(current, total);

    let mut pages = BTreeSet::from([1, total]);
    let low = current.saturating_sub(neighbors).max(1);
    let high = (current + neighbors).min(total);
    pages.extend(low..=high);

    let mut window = Vec::with_capacity(pages.len() * 2);
    let mut previous: Option<usize> = None;
    for page in pages {
        if let Some(previous) = previous {
            if page - previous > 1 {
                window.push(PageWindowItem::Ellipsis);
            }
        }
        window.push(PageWindowItem::Page(page));
        previous = Some(page);
    }
    window
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::PageWindowItem::{Ellipsis, Page as P};

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 9), 1);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(20, 9), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_paginate_slices_pages() {
        let items = (1..=20).collect::<Vec<_>>();
        let first = paginate(&items, 1, 9);
        assert_eq!(first.items, (1..=9).collect::<Vec<_>>());
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&items, 3, 9);
        assert_eq!(last.items, vec![19, 20]);
        assert_eq!(last.first_item_number(), 19);
        assert!(!last.has_next());
    }

    #[test]
    fn test_paginate_clamps_out_of_range_pages() {
        let items = (1..=20).collect::<Vec<_>>();
        let past_end = paginate(&items, 7, 9);
        assert_eq!(past_end.page, 3);
        assert_eq!(past_end.items, vec![19, 20]);

        let before_start = paginate(&items, 0, 9);
        assert_eq!(before_start.page, 1);
        assert_eq!(before_start.items.len(), 9);
    }

    #[test]
    fn test_paginate_empty_list() {
        let page = paginate::<u8>(&[], 4, 9);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_items, 0);
    }

    #[test]
    fn test_pages_reconstruct_the_list() {
        for len in [0usize, 1, 8, 9, 10, 27, 28] {
            let items = (0..len).collect::<Vec<_>>();
            let total = total_pages(len, 9);
            let mut joined = Vec::new();
            for page in 1..=total {
                joined.extend(paginate(&items, page, 9).items);
            }
            assert_eq!(joined, items);
        }
    }

    #[test]
    fn test_page_map_keeps_metadata() {
        let page = paginate(&[1, 2, 3], 2, 2).map(|n| n * 10);
        assert_eq!(page.items, vec![30]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_window_single_page() {
        assert_eq!(page_window(1, 1), vec![P(1)]);
        assert_eq!(page_window(1, 0), vec![P(1)]);
    }

    #[test]
    fn test_window_middle_page() {
        assert_eq!(page_window(5, 10), vec![P(1), Ellipsis, P(4), P(5), P(6), Ellipsis, P(10)]);
    }

    #[test]
    fn test_window_edges() {
        assert_eq!(page_window(1, 10), vec![P(1), P(2), Ellipsis, P(10)]);
        assert_eq!(page_window(10, 10), vec![P(1), Ellipsis, P(9), P(10)]);
        assert_eq!(page_window(2, 3), vec![P(1), P(2), P(3)]);
        assert_eq!(page_window(3, 5), vec![P(1), P(2), P(3), P(4), P(5)]);
    }

    #[test]
    fn test_window_clamps_current_page() {
        assert_eq!(page_window(42, 4), vec![P(1), Ellipsis, P(3), P(4)]);
        assert_eq!(page_window(0, 4), vec![P(1), P(2), Ellipsis, P(4)]);
    }

    #[test]
    fn test_window_with_wider_neighborhood() {
        assert_eq!(
            page_window_with_neighbors(6, 12, 2),
            vec![P(1), Ellipsis, P(4), P(5), P(6), P(7), P(8), Ellipsis, P(12)]
        );
    }

    #[test]
    fn test_window_serializes_with_kind_tag() {
        let json = serde_json::to_string(&page_window(1, 3)).unwrap();
        assert_eq!(json, r#"[{"kind":"page","value":1},{"kind":"page","value":2},{"kind":"page","value":3}]"#);
        let json = serde_json::to_string(&PageWindowItem::Ellipsis).unwrap();
        assert_eq!(json, r#"{"kind":"ellipsis"}"#);
    }
}
