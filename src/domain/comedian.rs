use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stand-up comedian as listed in the catalog. Profile fields are shown on
/// cards when present; only `name` participates in filtering.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
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
