//! Application services sitting between the HTTP routes and the repository.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod api;
pub mod main;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller supplied a filter value that cannot be interpreted.
    #[error("{0}")]
    Validation(String),

    /// The underlying query failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Treats blank or whitespace-only filter values as absent; the browsing page
/// submits empty strings for unset filters.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
