//! DTOs exposed by the listings API endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by `GET /api/shows`.
#[derive(Debug, Default, Deserialize)]
pub struct ShowsQuery {
    /// Page size, default 10.
    pub limit: Option<i64>,
    /// Row offset, default 0.
    pub offset: Option<i64>,
    /// Exact venue city filter.
    pub city: Option<String>,
    /// Calendar day filter, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Case-insensitive substring matched against performer names.
    pub comedian: Option<String>,
}

/// Query parameters accepted by `GET /api/venues`.
#[derive(Debug, Default, Deserialize)]
pub struct VenuesQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Case-insensitive substring matched against the venue city.
    pub city: Option<String>,
    /// Case-insensitive substring matched against the venue name.
    pub search: Option<String>,
}

/// The `{ data, count }` envelope returned by both endpoints. `count` is the
/// length of the returned page, not a total match count.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> Envelope<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Error body used for 4xx/5xx responses.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
