/// Offset based window into a listing
///
/// # Example
/// ```
/// use agency_core_db::repository::pagination::PageRequest;
///
/// let first = PageRequest::new(50, 0);
/// let third = PageRequest::for_page(50, 3);
/// assert_eq!(third.offset, 100);
/// assert_eq!(first.limit, third.limit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Page by 1-based page number; page 0 is treated as page 1
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        let page_number = page_number.max(1);
        Self {
            limit: page_size,
            offset: (page_number - 1) * page_size,
        }
    }

    /// The request for the window following this one
    pub fn next(&self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset + self.limit,
        }
    }

    /// Applies the window to an already ordered collection
    pub fn slice<T>(&self, items: Vec<T>) -> Page<T> {
        let total = items.len();
        let window = items.into_iter().skip(self.offset).take(self.limit).collect();
        Page::new(window, total, self.limit, self.offset)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
        }
    }
}

/// One window of a listing plus the size of the whole listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }

    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit)
        }
    }
}
