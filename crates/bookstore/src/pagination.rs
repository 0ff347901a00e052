//! Pagination helpers.

/// Default number of books per page.
pub const DEFAULT_PAGE_SIZE: u64 = 5;

/// A 1-based page of results.
///
/// Both the page number and the size are at least 1. A size of 0 would be
/// sent as `limit(0)`, which MongoDB reads as "no limit".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u64,
    size: u64,
}

impl Page {
    /// Creates a page. Page numbers and sizes below 1 are raised to 1.
    pub fn new(number: u64, size: u64) -> Self {
        Self {
            number: number.max(1),
            size: size.max(1),
        }
    }

    /// Page `number` with the default page size.
    pub fn nth(number: u64) -> Self {
        Self::new(number, DEFAULT_PAGE_SIZE)
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Number of documents to skip before this page.
    pub fn skip(&self) -> u64 {
        self.number.saturating_sub(1).saturating_mul(self.size)
    }

    /// Maximum number of documents on this page.
    pub fn limit(&self) -> i64 {
        i64::try_from(self.size).unwrap_or(i64::MAX)
    }

    /// The page after this one.
    pub fn next(&self) -> Self {
        Self::new(self.number.saturating_add(1), self.size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::nth(1)
    }
}
