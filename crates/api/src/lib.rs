//! HTTP API layer for catalog-rs.
//!
//! Resourceful JSON endpoints for categories, genres and cast members, plus
//! multipart endpoints for videos and their file uploads. Built on Axum 0.8.

pub mod endpoints;
pub mod middleware;
pub mod response;

pub use endpoints::router;
pub use middleware::AppState;
