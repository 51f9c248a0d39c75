//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::show::ShowWithDetails;
use crate::domain::venue::Venue;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ShowListQuery, ShowReader, VenueListQuery, VenueReader};

mock! {
    pub Repository {}

    impl ShowReader for Repository {
        fn list_shows(&self, query: ShowListQuery) -> RepositoryResult<Vec<ShowWithDetails>>;
    }

    impl VenueReader for Repository {
        fn list_venues(&self, query: VenueListQuery) -> RepositoryResult<Vec<Venue>>;
    }
}
