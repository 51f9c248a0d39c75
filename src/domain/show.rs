use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::comedian::Comedian;
use crate::domain::venue::Venue;

/// A scheduled show. Created upstream; this service only reads it while the
/// status transitions over the show's lifecycle.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Show {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub venue_id: i32,
    pub show_date: NaiveDateTime,
    /// Doors time as a plain `HH:MM` string, when announced.
    pub doors_open: Option<String>,
    /// Start time as a plain `HH:MM` string, when announced.
    pub show_time: Option<String>,
    pub ticket_price_min: Option<f64>,
    pub ticket_price_max: Option<f64>,
    pub ticket_url: Option<String>,
    pub age_restriction: Option<String>,
    pub status: ShowStatus,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShowStatus {
    Upcoming,
    SoldOut,
    Cancelled,
    Completed,
}

impl ShowStatus {
    /// Stable string form used in the database `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShowStatus::Upcoming => "upcoming",
            ShowStatus::SoldOut => "sold_out",
            ShowStatus::Cancelled => "cancelled",
            ShowStatus::Completed => "completed",
        }
    }
}

impl Display for ShowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for ShowStatus {
    fn from(s: &str) -> Self {
        match s {
            "upcoming" => ShowStatus::Upcoming,
            "sold_out" => ShowStatus::SoldOut,
            "cancelled" => ShowStatus::Cancelled,
            // Unknown statuses never surface in listings.
            _ => ShowStatus::Completed,
        }
    }
}

impl From<String> for ShowStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PerformerRole {
    Headliner,
    Opener,
    Feature,
    Host,
    Performer,
}

impl PerformerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformerRole::Headliner => "headliner",
            PerformerRole::Opener => "opener",
            PerformerRole::Feature => "feature",
            PerformerRole::Host => "host",
            PerformerRole::Performer => "performer",
        }
    }
}

impl Display for PerformerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for PerformerRole {
    fn from(s: &str) -> Self {
        match s {
            "headliner" => PerformerRole::Headliner,
            "opener" => PerformerRole::Opener,
            "feature" => PerformerRole::Feature,
            "host" => PerformerRole::Host,
            _ => PerformerRole::Performer,
        }
    }
}

impl From<String> for PerformerRole {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

/// A show/comedian link with the comedian's billing on that show.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ShowPerformer {
    pub id: i32,
    pub show_id: i32,
    pub comedian_id: i32,
    pub role: PerformerRole,
    pub order_index: i32,
    pub created_at: NaiveDateTime,
}

/// A performer entry joined with its comedian, as it appears on the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PerformerWithComedian {
    #[serde(flatten)]
    pub performer: ShowPerformer,
    pub comedian: Comedian,
}

/// The composite read shape returned by the shows endpoint: a show flattened
/// with its venue and the ordered bill of performers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ShowWithDetails {
    #[serde(flatten)]
    pub show: Show,
    pub venue: Venue,
    pub performers: Vec<PerformerWithComedian>,
}

impl ShowWithDetails {
    /// True when any billed comedian's name contains `needle`, ignoring case.
    pub fn has_performer_named(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.performers
            .iter()
            .any(|p| p.comedian.name.to_lowercase().contains(&needle))
    }
}
