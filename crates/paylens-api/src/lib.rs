//! # paylens-api
//!
//! REST API layer: HTTP handlers, routes, and request/response models.
//! Handlers are free functions over `web::Data` services; domain errors
//! map to status codes through the per-domain `map_*_error_to_response`
//! functions, always with the `{error, message}` envelope.

pub mod bearer;
pub mod handlers;
pub mod models;
pub mod routes;
