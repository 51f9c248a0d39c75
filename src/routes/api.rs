use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::db::DbPool;
use crate::dto::api::{ApiError, Envelope, ShowsQuery, VenuesQuery};
use crate::repository::shows::DieselShowRepository;
use crate::repository::venues::DieselVenueRepository;
use crate::services::{ServiceError, api};

fn error_response(context: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(message) => HttpResponse::BadRequest().json(ApiError::new(message)),
        ServiceError::Repository(e) => {
            error!("{context}: {e}");
            HttpResponse::InternalServerError().json(ApiError::new(e.to_string()))
        }
    }
}

#[get("/shows")]
pub async fn api_shows(
    params: web::Query<ShowsQuery>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselShowRepository::new(&pool);

    match api::list_shows(&repo, params.into_inner()) {
        Ok(shows) => HttpResponse::Ok().json(Envelope::new(shows)),
        Err(e) => error_response("Failed to list shows", e),
    }
}

#[get("/venues")]
pub async fn api_venues(
    params: web::Query<VenuesQuery>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselVenueRepository::new(&pool);

    match api::list_venues(&repo, params.into_inner()) {
        Ok(venues) => HttpResponse::Ok().json(Envelope::new(venues)),
        Err(e) => error_response("Failed to list venues", e),
    }
}
