//! HTTP route handlers and shared response helpers.

use actix_web::HttpResponse;
use tera::{Context, Tera};

pub mod api;
pub mod main;

/// Renders a tera template into an HTML response, mapping render failures to a
/// bare 500.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
