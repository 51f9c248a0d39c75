use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::comedian::Comedian as DomainComedian;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::comedians)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::comedian::Comedian`].
pub struct Comedian {
    pub id: i32,
    pub name: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::comedians)]
/// Insertable form of [`Comedian`]. The service itself never writes; this is
/// used by ingest tooling and test fixtures.
pub struct NewComedian<'a> {
    pub name: &'a str,
    pub bio: Option<&'a str>,
    pub image_url: Option<&'a str>,
}

impl From<Comedian> for DomainComedian {
    fn from(comedian: Comedian) -> Self {
        Self {
            id: comedian.id,
            name: comedian.name,
            bio: comedian.bio,
            image_url: comedian.image_url,
            website: comedian.website,
            instagram: comedian.instagram,
            twitter: comedian.twitter,
            youtube: comedian.youtube,
            created_at: comedian.created_at,
            updated_at: comedian.updated_at,
        }
    }
}
