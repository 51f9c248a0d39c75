use chrono::NaiveDate;

use crate::domain::show::ShowWithDetails;
use crate::domain::venue::Venue;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(test)]
pub mod mock;
pub mod shows;
pub mod venues;

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

/// Filters for the shows listing. The upcoming-status and future-date
/// predicates are unconditional and not expressed here.
#[derive(Debug, Clone, Default)]
pub struct ShowListQuery {
    /// Exact match against the joined venue's city.
    pub city: Option<String>,
    /// Restrict to shows on this calendar day (server-local).
    pub on_date: Option<NaiveDate>,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default)]
pub struct VenueListQuery {
    /// Substring match against the venue city, case-insensitive.
    pub city: Option<String>,
    /// Substring match against the venue name, case-insensitive.
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ShowListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.on_date = Some(date);
        self
    }

    pub fn paginate(mut self, limit: i64, offset: i64) -> Self {
        self.pagination = Some(Pagination { limit, offset });
        self
    }
}

impl VenueListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, limit: i64, offset: i64) -> Self {
        self.pagination = Some(Pagination { limit, offset });
        self
    }
}

pub trait ShowReader {
    /// Lists upcoming shows with their venue and performer details, ordered by
    /// show date ascending.
    fn list_shows(&self, query: ShowListQuery) -> RepositoryResult<Vec<ShowWithDetails>>;
}

pub trait VenueReader {
    /// Lists venues matching the query, ordered by name ascending.
    fn list_venues(&self, query: VenueListQuery) -> RepositoryResult<Vec<Venue>>;
}
