use actix_web::{Responder, get, web};
use log::error;
use tera::{Context, Tera};

use crate::db::DbPool;
use crate::dto::main::{CITY_OPTIONS, ShowsPageQuery};
use crate::repository::shows::DieselShowRepository;
use crate::routes::render_template;
use crate::services::main as main_service;

#[get("/")]
pub async fn show_index(
    params: web::Query<ShowsPageQuery>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let repo = DieselShowRepository::new(&pool);

    let mut context = Context::new();
    context.insert("cities", &CITY_OPTIONS);

    match main_service::load_shows_page(&repo, params.into_inner()) {
        Ok(data) => {
            context.insert("shows", &data.shows);
            context.insert("search_query", &data.search_query);
            context.insert("selected_city", &data.city);
            context.insert("selected_date", &data.date);
        }
        Err(e) => {
            error!("Failed to load shows page: {e}");
            context.insert("page_error", &e.to_string());
        }
    }

    render_template(&tera, "main/index.html", &context)
}
