// src/pagination.rs

use serde::Serialize;

/// Page size of the public preview.
pub const PREVIEW_PAGE_SIZE: u32 = 6;

/// An offset window into a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Page {
    /// Builds a page from untrusted query input. Negative offsets clamp to 0.
    pub fn new(limit: u32, offset: i64) -> Self {
        Self {
            limit: limit.max(1),
            offset: offset.clamp(0, i64::from(u32::MAX)) as u32,
        }
    }

    /// 1-based page number.
    pub fn number(&self) -> u32 {
        self.offset / self.limit + 1
    }

    /// The page before this one, stopping at offset 0.
    pub fn prev(&self) -> Page {
        Page {
            limit: self.limit,
            offset: self.offset.saturating_sub(self.limit),
        }
    }

    pub fn next(&self) -> Page {
        Page {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }
}

/// One fetched page plus what can be inferred about its neighbours.
///
/// The API reports no total, so a full page is taken to mean there may be
/// more. When the listing length is an exact multiple of the page size the
/// last Next leads to an empty page.
#[derive(Debug, Clone)]
pub struct PageWindow<T> {
    pub page: Page,
    pub items: Vec<T>,
}

impl<T> PageWindow<T> {
    pub fn new(page: Page, items: Vec<T>) -> Self {
        Self { page, items }
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.page.limit as usize
    }

    pub fn has_next(&self) -> bool {
        self.is_full()
    }

    pub fn has_prev(&self) -> bool {
        self.page.offset > 0
    }
}
