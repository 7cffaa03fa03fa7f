//! Page arithmetic over the filtered row sequence.

use std::ops::Range;

/// Page state. Pages are 0-based internally; the table reports them 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    page: usize,
    wrapping: bool,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: 0,
            page: 0,
            wrapping: true,
        }
    }
}

impl Paginator {
    /// `page_size` of 0 disables paging.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 0;
    }

    pub fn is_paged(&self) -> bool {
        self.page_size > 0
    }

    /// Current page, 0-based.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn wrapping(&self) -> bool {
        self.wrapping
    }

    pub fn set_wrapping(&mut self, wrapping: bool) {
        self.wrapping = wrapping;
    }

    pub fn max_pages(&self, total_rows: usize) -> usize {
        if self.page_size == 0 || total_rows == 0 {
            return 1;
        }
        total_rows.div_ceil(self.page_size)
    }

    /// Rows of the current page as a range into the row sequence.
    pub fn visible_range(&self, total_rows: usize) -> Range<usize> {
        if self.page_size == 0 {
            return 0..total_rows;
        }
        let start = (self.page * self.page_size).min(total_rows);
        let end = (start + self.page_size).min(total_rows);
        start..end
    }

    fn pages_apply(&self, total_rows: usize) -> bool {
        self.page_size > 0 && total_rows > self.page_size
    }

    /// Advance one page; returns the new cursor position.
    pub fn page_down(&mut self, total_rows: usize, cursor: usize) -> usize {
        if !self.pages_apply(total_rows) {
            return cursor;
        }

        let max = self.max_pages(total_rows);
        if self.page + 1 < max {
            self.page += 1;
        } else if self.wrapping {
            self.page = 0;
        }
        log::debug!("page down to {}/{max}", self.page + 1);
        self.page * self.page_size
    }

    /// Go back one page; returns the new cursor position.
    pub fn page_up(&mut self, total_rows: usize, cursor: usize) -> usize {
        if !self.pages_apply(total_rows) {
            return cursor;
        }

        let max = self.max_pages(total_rows);
        if self.page > 0 {
            self.page -= 1;
        } else if self.wrapping {
            self.page = max - 1;
        }
        log::debug!("page up to {}/{max}", self.page + 1);
        self.page * self.page_size
    }

    pub fn first(&mut self) -> usize {
        self.page = 0;
        0
    }

    pub fn last(&mut self, total_rows: usize) -> usize {
        self.page = self.max_pages(total_rows) - 1;
        self.page * self.page_size
    }

    /// Jump to 1-based `page`, clamped into range. Returns the new cursor.
    pub fn set_page(&mut self, page: usize, total_rows: usize, cursor: usize) -> usize {
        if self.page_size == 0 || page == self.page + 1 {
            return cursor;
        }

        let page = page.clamp(1, self.max_pages(total_rows));
        self.page = page - 1;
        log::debug!("jumped to page {page}");
        self.page * self.page_size
    }

    /// Move to whichever page holds `cursor`.
    pub fn follow(&mut self, cursor: usize) {
        if self.page_size > 0 {
            self.page = cursor / self.page_size;
        }
    }

    /// Pull the page back into range after the row count changed.
    pub fn clamp(&mut self, total_rows: usize) {
        let max = self.max_pages(total_rows);
        if self.page >= max {
            self.page = max - 1;
        }
    }
}
