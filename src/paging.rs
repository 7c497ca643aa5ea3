//! Fixed-size windows over an option set.
//!
//! Stateless: the caller keeps the current page index and passes it in.
//! Indices wrap modulo the page count, so "next" from the last page
//! returns to the first.

use serde::Serialize;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::models::{Candidate, OptionSet};

/// Splits options into pages of `page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
}

/// One page of options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a> {
    /// Normalized 0-based page index.
    pub index: usize,
    /// Total number of pages.
    pub page_count: usize,
    /// 0-based position of the first option on this page.
    pub offset: usize,
    /// Total number of options across all pages.
    pub total: usize,
    /// Options on this page.
    pub items: &'a [Candidate],
}

impl Page<'_> {
    /// Whether the page holds no options.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based position of the first option, for display ("Option 4").
    pub fn first_position(&self) -> usize {
        self.offset + 1
    }

    /// 1-based position of the last option on the page.
    pub fn last_position(&self) -> usize {
        self.offset + self.items.len()
    }

    /// Options paired with their 0-based index in the full option set.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Candidate)> {
        self.items.iter().enumerate().map(|(i, c)| (self.offset + i, c))
    }
}

impl Pager {
    /// Creates a pager. A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    /// Options per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(len / page_size)`; zero for an empty option set.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Wraps `index` into `0..page_count`. Returns 0 when there are no pages.
    pub fn normalize(&self, index: usize, len: usize) -> usize {
        match self.page_count(len) {
            0 => 0,
            count => index % count,
        }
    }

    /// The page at `index`, wrapped.
    pub fn page<'a>(&self, options: &'a OptionSet, index: usize) -> Page<'a> {
        let all = options.as_slice();
        let total = all.len();
        let page_count = self.page_count(total);
        let index = self.normalize(index, total);
        let start = (index * self.page_size).min(total);
        let end = (start + self.page_size).min(total);

        Page {
            index,
            page_count,
            offset: start,
            total,
            items: &all[start..end],
        }
    }

    /// Index of the page after `index`, wrapping to 0.
    pub fn next_page(&self, index: usize, len: usize) -> usize {
        match self.page_count(len) {
            0 => 0,
            count => (index % count + 1) % count,
        }
    }

    /// Index of the page before `index`, wrapping to the last page.
    pub fn previous_page(&self, index: usize, len: usize) -> usize {
        match self.page_count(len) {
            0 => 0,
            count => (index % count + count - 1) % count,
        }
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
