use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::venue::Venue as DomainVenue;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::venues)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::venue::Venue`].
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub capacity: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::venues)]
/// Insertable form of [`Venue`] for ingest tooling and test fixtures.
pub struct NewVenue<'a> {
    pub name: &'a str,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub capacity: Option<i32>,
}

impl From<Venue> for DomainVenue {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            description: venue.description,
            address: venue.address,
            city: venue.city,
            state: venue.state,
            zip_code: venue.zip_code,
            country: venue.country,
            phone: venue.phone,
            website: venue.website,
            capacity: venue.capacity,
            image_url: venue.image_url,
            created_at: venue.created_at,
            updated_at: venue.updated_at,
        }
    }
}
