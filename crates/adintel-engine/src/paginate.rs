//! Two pagination styles used by the dashboard.
//!
//! The discovery grid grows by whole pages ("Load More"), so it shows a
//! prefix of the results. The alert tables use classic numbered pages.

use serde::{Deserialize, Serialize};

/// First `page_size * pages_loaded` records, or all of them if fewer.
#[must_use]
pub fn paginate<T>(records: &[T], page_size: usize, pages_loaded: usize) -> &[T] {
    let shown = page_size.saturating_mul(pages_loaded).min(records.len());
    &records[..shown]
}

/// "Load More" state for an incrementally revealed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page_size: usize,
    pub pages_loaded: usize,
}

impl Pagination {
    /// Start with one page loaded.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            pages_loaded: 1,
        }
    }

    /// How many of `total` records are currently shown.
    #[must_use]
    pub fn visible_count(&self, total: usize) -> usize {
        self.page_size.saturating_mul(self.pages_loaded).min(total)
    }

    /// Records still hidden behind "Load More".
    #[must_use]
    pub fn remaining(&self, total: usize) -> usize {
        total - self.visible_count(total)
    }

    /// Whether another page would reveal anything. Always `false` for a
    /// zero page size.
    #[must_use]
    pub fn has_more(&self, total: usize) -> bool {
        self.page_size > 0 && self.remaining(total) > 0
    }

    /// Reveal one more page. Returns `false`, leaving the state unchanged,
    /// when all `total` records are already visible or pages are empty.
    pub fn load_more(&mut self, total: usize) -> bool {
        if !self.has_more(total) {
            return false;
        }
        self.pages_loaded += 1;
        true
    }

    /// Collapse back to the first page.
    pub fn reset(&mut self) {
        self.pages_loaded = 1;
    }

    #[must_use]
    pub fn apply<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        paginate(records, self.page_size, self.pages_loaded)
    }
}

/// Number of numbered pages needed for `len` items. Zero items need zero pages.
#[must_use]
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Items on the 1-based `page`. Page 0 is treated as page 1; a page past the
/// end is empty.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.max(1).saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}
