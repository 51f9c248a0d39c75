use std::collections::HashMap;

use chrono::{Local, NaiveTime, TimeDelta};
use diesel::prelude::*;

use crate::db::{DbPool, get_connection};
use crate::domain::show::{PerformerWithComedian, ShowStatus, ShowWithDetails};
use crate::repository::{ShowListQuery, ShowReader, errors::RepositoryResult};

/// Diesel implementation of [`ShowReader`].
pub struct DieselShowRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselShowRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl ShowReader for DieselShowRepository<'_> {
    fn list_shows(&self, query: ShowListQuery) -> RepositoryResult<Vec<ShowWithDetails>> {
        use crate::models::comedian::Comedian as DbComedian;
        use crate::models::show::{Show as DbShow, ShowPerformer as DbShowPerformer};
        use crate::models::venue::Venue as DbVenue;
        use crate::schema::{comedians, show_performers, shows, venues};

        let mut conn = get_connection(self.pool)?;

        // Unconditional listing invariant: only upcoming shows that have not
        // started yet, measured at request receipt in server-local time.
        let now = Local::now().naive_local();

        let mut stmt = shows::table
            .inner_join(venues::table)
            .filter(shows::status.eq(ShowStatus::Upcoming.as_str()))
            .filter(shows::show_date.ge(now))
            .select((DbShow::as_select(), DbVenue::as_select()))
            .order(shows::show_date.asc())
            .into_boxed();

        if let Some(city) = &query.city {
            stmt = stmt.filter(venues::city.eq(city.as_str()));
        }

        if let Some(day) = query.on_date {
            let start = day.and_time(NaiveTime::MIN);
            let end = start + TimeDelta::days(1);
            stmt = stmt
                .filter(shows::show_date.ge(start))
                .filter(shows::show_date.lt(end));
        }

        if let Some(pagination) = query.pagination {
            stmt = stmt.limit(pagination.limit).offset(pagination.offset);
        }

        let rows: Vec<(DbShow, DbVenue)> = stmt.load(&mut conn)?;

        let show_ids: Vec<i32> = rows.iter().map(|(show, _)| show.id).collect();

        let performer_rows: Vec<(DbShowPerformer, DbComedian)> = show_performers::table
            .inner_join(comedians::table)
            .filter(show_performers::show_id.eq_any(&show_ids))
            .order((
                show_performers::show_id.asc(),
                show_performers::order_index.asc(),
            ))
            .select((DbShowPerformer::as_select(), DbComedian::as_select()))
            .load(&mut conn)?;

        let mut performers_by_show: HashMap<i32, Vec<PerformerWithComedian>> = HashMap::new();
        for (performer, comedian) in performer_rows {
            let show_id = performer.show_id;
            performers_by_show
                .entry(show_id)
                .or_default()
                .push(PerformerWithComedian {
                    performer: performer.into(),
                    comedian: comedian.into(),
                });
        }

        Ok(rows
            .into_iter()
            .map(|(show, venue)| ShowWithDetails {
                performers: performers_by_show.remove(&show.id).unwrap_or_default(),
                show: show.into(),
                venue: venue.into(),
            })
            .collect())
    }
}
