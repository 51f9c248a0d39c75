//! Diesel models for shows and their performer links.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::show::{Show as DomainShow, ShowPerformer as DomainShowPerformer};
use crate::models::comedian::Comedian;
use crate::models::venue::Venue;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Venue, foreign_key = venue_id))]
#[diesel(table_name = crate::schema::shows)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::show::Show`].
pub struct Show {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub venue_id: i32,
    pub show_date: NaiveDateTime,
    pub doors_open: Option<String>,
    pub show_time: Option<String>,
    pub ticket_price_min: Option<f64>,
    pub ticket_price_max: Option<f64>,
    pub ticket_url: Option<String>,
    pub age_restriction: Option<String>,
    pub status: String,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::shows)]
/// Insertable form of [`Show`] for ingest tooling and test fixtures.
pub struct NewShow<'a> {
    pub title: &'a str,
    pub venue_id: i32,
    pub show_date: NaiveDateTime,
    pub doors_open: Option<&'a str>,
    pub show_time: Option<&'a str>,
    pub ticket_price_min: Option<f64>,
    pub ticket_price_max: Option<f64>,
    pub ticket_url: Option<&'a str>,
    pub age_restriction: Option<&'a str>,
    pub status: &'a str,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Show, foreign_key = show_id))]
#[diesel(belongs_to(Comedian, foreign_key = comedian_id))]
#[diesel(table_name = crate::schema::show_performers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::show::ShowPerformer`].
pub struct ShowPerformer {
    pub id: i32,
    pub show_id: i32,
    pub comedian_id: i32,
    pub role: String,
    pub order_index: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::show_performers)]
/// Insertable form of [`ShowPerformer`] for ingest tooling and test fixtures.
pub struct NewShowPerformer<'a> {
    pub show_id: i32,
    pub comedian_id: i32,
    pub role: &'a str,
    pub order_index: i32,
}

impl From<Show> for DomainShow {
    fn from(show: Show) -> Self {
        Self {
            id: show.id,
            title: show.title,
            description: show.description,
            venue_id: show.venue_id,
            show_date: show.show_date,
            doors_open: show.doors_open,
            show_time: show.show_time,
            ticket_price_min: show.ticket_price_min,
            ticket_price_max: show.ticket_price_max,
            ticket_url: show.ticket_url,
            age_restriction: show.age_restriction,
            status: show.status.into(),
            image_url: show.image_url,
            created_at: show.created_at,
            updated_at: show.updated_at,
        }
    }
}

impl From<ShowPerformer> for DomainShowPerformer {
    fn from(performer: ShowPerformer) -> Self {
        Self {
            id: performer.id,
            show_id: performer.show_id,
            comedian_id: performer.comedian_id,
            role: performer.role.into(),
            order_index: performer.order_index,
            created_at: performer.created_at,
        }
    }
}
