//! DTOs crossing the HTTP boundary and the template context.

pub mod api;
pub mod main;
