use diesel::prelude::*;

use crate::db::{DbPool, get_connection};
use crate::domain::venue::Venue;
use crate::repository::{VenueListQuery, VenueReader, errors::RepositoryResult};

/// Diesel implementation of [`VenueReader`].
pub struct DieselVenueRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselVenueRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl VenueReader for DieselVenueRepository<'_> {
    fn list_venues(&self, query: VenueListQuery) -> RepositoryResult<Vec<Venue>> {
        use crate::models::venue::Venue as DbVenue;
        use crate::schema::venues;

        let mut conn = get_connection(self.pool)?;

        let mut stmt = venues::table
            .select(DbVenue::as_select())
            .order(venues::name.asc())
            .into_boxed();

        // SQLite LIKE is case-insensitive for ASCII, matching the contract of
        // both substring filters.
        if let Some(city) = &query.city {
            stmt = stmt.filter(venues::city.like(format!("%{city}%")));
        }

        if let Some(search) = &query.search {
            stmt = stmt.filter(venues::name.like(format!("%{search}%")));
        }

        if let Some(pagination) = query.pagination {
            stmt = stmt.limit(pagination.limit).offset(pagination.offset);
        }

        let items = stmt
            .load::<DbVenue>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}
