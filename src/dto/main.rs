use serde::Deserialize;

use crate::domain::show::ShowWithDetails;
use crate::pagination::Paginated;

/// Cities offered by the browsing page's city dropdown.
pub const CITY_OPTIONS: [&str; 5] = [
    "New York",
    "Los Angeles",
    "Chicago",
    "Boston",
    "San Francisco",
];

/// Query parameters accepted by the browsing page.
#[derive(Debug, Default, Deserialize)]
pub struct ShowsPageQuery {
    /// Comedian search text entered by the user.
    pub q: Option<String>,
    /// Selected city from [`CITY_OPTIONS`].
    pub city: Option<String>,
    /// Selected calendar day, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// 1-based page number.
    pub page: Option<usize>,
}

/// Data required to render the shows browsing page.
pub struct ShowsPageData {
    /// Page of shows with prev/next affordances.
    pub shows: Paginated<ShowWithDetails>,
    /// Comedian search echoed back to the template when present.
    pub search_query: Option<String>,
    /// Selected city echoed back to the template when present.
    pub city: Option<String>,
    /// Selected date echoed back to the template when present.
    pub date: Option<String>,
}
