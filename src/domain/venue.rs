use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A comedy venue. `city` and `name` are the filterable fields.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
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
