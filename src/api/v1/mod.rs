/*
 * Responsibility
 * - Entry point of the v1 surface (routes() re-export)
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
