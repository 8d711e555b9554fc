//! # Past Events Carousel
//!
//! Bounded pagination: `next` on the last page and `prev` on the first are
//! no-ops, there is no wrap-around.

use std::ops::Range;

pub const ITEMS_PER_PAGE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    page: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, page: 0 }
    }

    pub fn total_slides(&self) -> usize {
        self.len.div_ceil(ITEMS_PER_PAGE)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn can_next(&self) -> bool {
        self.page + 1 < self.total_slides()
    }

    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Jump to a dot indicator. Out-of-range pages are ignored.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page >= self.total_slides() {
            return false;
        }
        self.page = page;
        true
    }

    /// Item indices on `page`.
    pub fn page_range(&self, page: usize) -> Range<usize> {
        let start = (page * ITEMS_PER_PAGE).min(self.len);
        let end = (start + ITEMS_PER_PAGE).min(self.len);
        start..end
    }

    pub fn page_items<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let range = self.page_range(page);
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }
}
