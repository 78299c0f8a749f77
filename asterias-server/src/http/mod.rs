//! HTTP server layer
//!
//! Axum server with:
//! - Server-rendered pages and one JSON endpoint
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod render;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
