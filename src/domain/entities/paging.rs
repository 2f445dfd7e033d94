pub const PAGE_SIZE: i64 = 20;

/// One page of a listing plus the exact total row count.
#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page: i64,
    pub total_pages: i64,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, total_count: i64, page: i64) -> Self {
        Self {
            items,
            total_count,
            page,
            total_pages: total_count / PAGE_SIZE + if total_count % PAGE_SIZE > 0 { 1 } else { 0 },
        }
    }

    pub fn empty(page: i64) -> Self {
        Self {
            items: vec![],
            total_count: 0,
            page,
            total_pages: 0,
        }
    }
}

/// Clamp a 1-based page request and return the row offset for it.
pub fn page_offset(page: i64) -> (i64, i64) {
    let page = page.max(1);
    (page, (page - 1) * PAGE_SIZE)
}
