//! User-facing entities shared with the wider platform model.
//!
//! Declared for parity with the upstream catalog schema; no operation in this
//! service reads or writes them yet. They back planned follow/favorite
//! features.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: i32,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserFollow {
    pub id: i32,
    pub user_id: i32,
    pub comedian_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserFavorite {
    pub id: i32,
    pub user_id: i32,
    pub show_id: i32,
    pub created_at: NaiveDateTime,
}
