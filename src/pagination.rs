use serde::Serialize;

/// Default `limit` applied by the API endpoints when none is supplied.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Fixed page size used by the browsing page.
pub const SHOWS_PER_PAGE: i64 = 12;

/// A page of items together with prev/next affordances for the templates.
///
/// The shows query never computes a total match count, so "is there a next
/// page" is a heuristic: a full page is assumed to have more rows behind it,
/// a short page is treated as the end of the data.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, per_page: usize) -> Self {
        let page = if current_page == 0 { 1 } else { current_page };

        Self {
            has_prev: page > 1,
            has_next: items.len() >= per_page,
            items,
            page,
            per_page,
        }
    }
}
