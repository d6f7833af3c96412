use crate::DomainError;

/// One-based page of the catalog grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub total_pages: usize,
    pub offset: usize,
    pub limit: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Result<Self, DomainError> {
        if page_size == 0 {
            return Err(DomainError::ZeroPageSize);
        }
        Ok(Self { page, page_size })
    }

    /// Clamps the requested page into `1..=total_pages`. An empty catalog still has
    /// one (empty) page.
    pub fn window(self, total_items: usize) -> PageWindow {
        let total_pages = total_items.div_ceil(self.page_size).max(1);
        let page = self.page.clamp(1, total_pages);
        PageWindow {
            page,
            total_pages,
            offset: (page - 1) * self.page_size,
            limit: self.page_size,
        }
    }
}

impl PageWindow {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
