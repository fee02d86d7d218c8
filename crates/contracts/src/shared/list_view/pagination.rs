use serde::{Deserialize, Serialize};

/// One page of a filtered list (page index is 0-based)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<R> {
    pub items: Vec<R>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<R> Page<R> {
    /// 1-based index of the first row on the page, 0 when the page is empty
    pub fn first_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.page * self.page_size + 1
        }
    }

    pub fn last_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.page * self.page_size + self.items.len()
        }
    }
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    total_items.div_ceil(size)
}

/// Slice out one page; the page index is clamped to the last page
pub fn paginate<R: Clone>(items: &[R], page: usize, page_size: usize) -> Page<R> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);
    let page = page.min(total_pages.saturating_sub(1));
    let start = page * page_size;
    let end = start.saturating_add(page_size).min(total_items);

    Page {
        items: items[start.min(end)..end].to_vec(),
        page,
        page_size,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_basic() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 1, 10);
        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.first_row(), 11);
        assert_eq!(page.last_row(), 20);

        let last = paginate(&items, 2, 10);
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_paginate_clamps_page() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 9, 2);
        assert_eq!(page.page, 2);
        assert_eq!(page.items, vec![5]);
    }

    #[test]
    fn test_huge_page_size() {
        assert_eq!(total_pages(10, usize::MAX), 1);
        assert_eq!(total_pages(0, usize::MAX), 0);
        let page = paginate(&[1, 2, 3], 0, usize::MAX);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_paginate_empty_and_zero_size() {
        let empty: Vec<u32> = Vec::new();
        let page = paginate(&empty, 3, 10);
        assert_eq!(page.page, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.first_row(), 0);

        let items = vec![1, 2, 3];
        let page = paginate(&items, 0, 0);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.items, vec![1]);
    }
}
