//! Shared fixtures: a disposable SQLite database plus catalog seed helpers.
//!
//! The service itself never writes to the catalog, so seeding goes through
//! the insertable models directly rather than through any repository API.

#![allow(dead_code)]

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use laughtrack::db::{DbPool, establish_connection_pool};
use laughtrack::models::comedian::NewComedian;
use laughtrack::models::show::{NewShow, NewShowPerformer};
use laughtrack::models::venue::NewVenue;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let db_path = dir.path().join("test.db");
        let pool = establish_connection_pool(db_path.to_str().expect("utf-8 db path"))
            .expect("failed to build pool");

        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

pub fn seed_venue(pool: &DbPool, name: &str, city: Option<&str>) -> i32 {
    use laughtrack::schema::venues;

    let mut conn = pool.get().unwrap();
    diesel::insert_into(venues::table)
        .values(NewVenue {
            name,
            address: None,
            city,
            capacity: None,
        })
        .returning(venues::id)
        .get_result(&mut conn)
        .unwrap()
}

pub fn seed_show(
    pool: &DbPool,
    title: &str,
    venue_id: i32,
    show_date: NaiveDateTime,
    status: &str,
) -> i32 {
    use laughtrack::schema::shows;

    let mut conn = pool.get().unwrap();
    diesel::insert_into(shows::table)
        .values(NewShow {
            title,
            venue_id,
            show_date,
            doors_open: None,
            show_time: None,
            ticket_price_min: None,
            ticket_price_max: None,
            ticket_url: None,
            age_restriction: None,
            status,
        })
        .returning(shows::id)
        .get_result(&mut conn)
        .unwrap()
}

pub fn seed_comedian(pool: &DbPool, name: &str) -> i32 {
    use laughtrack::schema::comedians;

    let mut conn = pool.get().unwrap();
    diesel::insert_into(comedians::table)
        .values(NewComedian {
            name,
            bio: None,
            image_url: None,
        })
        .returning(comedians::id)
        .get_result(&mut conn)
        .unwrap()
}

pub fn seed_performer(pool: &DbPool, show_id: i32, comedian_id: i32, role: &str, order_index: i32) {
    use laughtrack::schema::show_performers;

    let mut conn = pool.get().unwrap();
    diesel::insert_into(show_performers::table)
        .values(NewShowPerformer {
            show_id,
            comedian_id,
            role,
            order_index,
        })
        .execute(&mut conn)
        .unwrap();
}
